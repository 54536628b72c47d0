//! Store errors.
//!
//! Only contract failures are errors. A miss on `has`, `find` or `remove` is an expected
//! outcome and is reported through `bool`/`Option`, never through [`StoreError`].

use thiserror::Error;

use crate::EntityHandle;

/// The precondition a caller broke.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// `emplace` on an entity that already owns a component in this store.
    #[error("already has a component in this store")]
    DuplicateEmplace,
    /// `get`/`get_mut` on an entity that owns no component in this store.
    #[error("has no component in this store")]
    AbsentAccess,
}

/// Errors returned by the `try_*` store operations.
///
/// The panicking variants of those operations (`emplace`, `get`, `get_mut`) panic with
/// this error's `Display` output, which names the entity and the component type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("invariant violation: entity {entity} {violation} (component `{component}`)")]
    InvariantViolation {
        entity: EntityHandle,
        /// Type name of the component stored by the offending store.
        component: &'static str,
        violation: Violation,
    },
}

impl StoreError {
    pub(crate) fn duplicate<T>(entity: EntityHandle) -> StoreError {
        StoreError::InvariantViolation {
            entity,
            component: std::any::type_name::<T>(),
            violation: Violation::DuplicateEmplace,
        }
    }

    pub(crate) fn absent<T>(entity: EntityHandle) -> StoreError {
        StoreError::InvariantViolation {
            entity,
            component: std::any::type_name::<T>(),
            violation: Violation::AbsentAccess,
        }
    }

    /// The entity the failed operation was called with.
    pub fn entity(&self) -> EntityHandle {
        match self {
            StoreError::InvariantViolation { entity, .. } => *entity,
        }
    }

    pub fn violation(&self) -> Violation {
        match self {
            StoreError::InvariantViolation { violation, .. } => *violation,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
