//! Packed sparse-set component storage for a frame-stepped game.
//!
//! * [`EntityHandle`]: opaque, monotonically allocated entity id.
//! * [`ComponentStore`]: one component per entity, `O(1)` access, linear iteration.
//! * [`MultiStore`]: several records per entity, for per-frame relations.
//! * [`ComponentContainer`]: the type-erased view every store exposes.
//! * [`define_registry!`]: builds a registry holding one store per component type, with
//! [`RegistryBase`] operations fanned out over all of them.
//! * [`Registry`]: the game's registry.

mod entity;
pub use entity::*;
mod error;
pub use error::*;
mod component_storage;
pub use component_storage::*;
mod multi_store;
pub use multi_store::*;
mod container;
pub use container::*;
mod iter;
pub use iter::*;
mod registry_base;
pub use registry_base::*;
mod debug;
pub use debug::*;
mod macro_define;

pub mod components;
mod registry;
pub use registry::Registry;

pub use paste;
#[doc(hidden)]
pub use tracing;

#[cfg(feature = "use_serde")]
mod serde;
