
/// Macro to create a registry type where this is called.
///
/// A registry owns exactly one store per component type. Each store is declared with its
/// field name and its kind:
///
/// * `ComponentStore<C>`, one component per entity (the default),
/// * `MultiStore<C>`, several records per entity (per-frame relations such as collisions).
///
/// The code below:
///
/// ```ignore
/// define_registry! {
///     pub struct Registry {
///         motions: ComponentStore<Motion>,
///         collisions: MultiStore<Collision>,
///     }
/// }
/// ```
///
/// will roughly generate the following code:
///
/// ```ignore
/// pub struct Registry {
///     pub motions: ComponentStore<Motion>,
///     pub collisions: MultiStore<Collision>,
/// }
///
/// impl Registry {
///     pub fn new() -> Self { ... }
///     pub fn with_capacity(capacity: usize) -> Self { ... }
///     pub fn motions(&self) -> &ComponentStore<Motion> { ... }
///     pub fn motions_mut(&mut self) -> &mut ComponentStore<Motion> { ... }
///     // same for collisions...
///     pub fn store<C: StoreOf<Self>>(&self) -> &C::Store { ... }
///     pub fn containers(&self) -> Vec<&dyn ComponentContainer> { ... }
/// }
///
/// impl RegistryBase for Registry { ... }
///
/// impl StoreOf<Registry> for Motion { ... }
/// impl StoreOf<Registry> for Collision { ... }
/// ```
///
/// The fields, the constructor and the list used by registry-wide operations
/// (`remove_all_components_of`, `clear_all_components`, ...) all come from the same
/// declaration, so a store can't be left out of entity destruction.
///
/// A component type may only be declared once per registry, otherwise the `StoreOf` impls
/// conflict and the registry does not compile.
///
/// ```rust
/// # use packed_ecs::{define_registry, RegistryBase};
/// define_registry! {
///     #[derive(Debug)]
///     pub struct Registry {
///         speeds: ComponentStore<f32>,
///         hits: MultiStore<u8>,
///     }
/// }
///
/// let mut registry = Registry::new();
/// let e = registry.create_entity();
/// registry.speeds.emplace(e, 2.0);
/// registry.hits.emplace_with_duplicates(e, 1);
/// assert_eq!(registry.remove_all_components_of(e), 2);
/// ```
#[macro_export]
macro_rules! define_registry {
    (
        $(#[$meta:meta])*
        $vis:vis struct $registry:ident {
            $(
                $(#[$field_meta:meta])*
                $store:ident : $kind:ident < $component:ty >
            ),* $(,)?
        }
    ) => {
        $crate::paste::paste! {
        $(#[$meta])*
        $vis struct $registry {
            $(
                $(#[$field_meta])*
                pub $store: $crate::$kind<$component>,
            )*
        }

        impl $registry {
            /// Field names of every store, in declaration order.
            pub const STORE_NAMES: &'static [&'static str] = &[ $( stringify!($store) ),* ];

            pub fn new() -> Self {
                let registry = Self {
                    $(
                        $store: $crate::$kind::new(),
                    )*
                };
                $crate::tracing::debug!(
                    registry = stringify!($registry),
                    stores = Self::STORE_NAMES.len(),
                    "registry created"
                );
                registry
            }

            /// Creates a registry where every store is pre-sized for `capacity` components.
            pub fn with_capacity(capacity: usize) -> Self {
                let registry = Self {
                    $(
                        $store: $crate::$kind::with_capacity(capacity),
                    )*
                };
                $crate::tracing::debug!(
                    registry = stringify!($registry),
                    stores = Self::STORE_NAMES.len(),
                    capacity,
                    "registry created"
                );
                registry
            }

            $(
                #[inline]
                pub fn $store(&self) -> &$crate::$kind<$component> {
                    &self.$store
                }

                #[inline]
                pub fn [<$store _mut>](&mut self) -> &mut $crate::$kind<$component> {
                    &mut self.$store
                }
            )*

            /// Store holding components of type `C`.
            #[inline]
            pub fn store<C: $crate::StoreOf<Self>>(&self) -> &C::Store {
                C::store(self)
            }

            #[inline]
            pub fn store_mut<C: $crate::StoreOf<Self>>(&mut self) -> &mut C::Store {
                C::store_mut(self)
            }

            /// Type-erased view of every store, in declaration order.
            pub fn containers(&self) -> Vec<&dyn $crate::ComponentContainer> {
                vec![
                    $(
                        &self.$store as &dyn $crate::ComponentContainer,
                    )*
                ]
            }

            pub fn containers_mut(&mut self) -> Vec<&mut dyn $crate::ComponentContainer> {
                vec![
                    $(
                        &mut self.$store as &mut dyn $crate::ComponentContainer,
                    )*
                ]
            }
        }

        impl Default for $registry {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::RegistryBase for $registry {
            #[allow(unused_mut, unused_variables)]
            fn for_each_container(&self, mut f: impl FnMut(&'static str, &dyn $crate::ComponentContainer)) {
                $(
                    f(stringify!($store), &self.$store);
                )*
            }

            #[allow(unused_mut, unused_variables)]
            fn for_each_container_mut(&mut self, mut f: impl FnMut(&'static str, &mut dyn $crate::ComponentContainer)) {
                $(
                    f(stringify!($store), &mut self.$store);
                )*
            }
        }

        $(
            impl $crate::StoreOf<$registry> for $component {
                type Store = $crate::$kind<$component>;

                #[inline]
                fn store(registry: &$registry) -> &Self::Store {
                    &registry.$store
                }

                #[inline]
                fn store_mut(registry: &mut $registry) -> &mut Self::Store {
                    &mut registry.$store
                }
            }
        )*
        }
    };
}
