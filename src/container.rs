use crate::{ComponentStore, EntityHandle, MultiStore};

/// Type-erased view over a single store.
///
/// This is the subset of operations that make sense without knowing the component type,
/// which is what registry-wide operations need: destroying an entity everywhere, wiping all
/// stores, or listing what exists. The trait is object safe and used as
/// `&dyn ComponentContainer` / `&mut dyn ComponentContainer`.
pub trait ComponentContainer {
    /// Returns true if `entity` has at least one component in this store.
    fn has(&self, entity: EntityHandle) -> bool;

    /// Removes everything `entity` owns in this store.
    ///
    /// Returns false (and does nothing) if there was nothing to remove.
    fn remove(&mut self, entity: EntityHandle) -> bool;

    fn clear(&mut self);

    /// Number of stored components, duplicates included.
    fn size(&self) -> usize;

    /// Name of the component type, for diagnostics only. Not guaranteed to be stable.
    fn type_name(&self) -> &'static str;
}

impl<T: 'static> ComponentContainer for ComponentStore<T> {
    #[inline]
    fn has(&self, entity: EntityHandle) -> bool {
        ComponentStore::has(self, entity)
    }

    #[inline]
    fn remove(&mut self, entity: EntityHandle) -> bool {
        ComponentStore::remove(self, entity).is_some()
    }

    fn clear(&mut self) {
        ComponentStore::clear(self)
    }

    #[inline]
    fn size(&self) -> usize {
        ComponentStore::size(self)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

impl<T: 'static> ComponentContainer for MultiStore<T> {
    #[inline]
    fn has(&self, entity: EntityHandle) -> bool {
        MultiStore::has(self, entity)
    }

    fn remove(&mut self, entity: EntityHandle) -> bool {
        self.remove_records_of(entity) > 0
    }

    fn clear(&mut self) {
        MultiStore::clear(self)
    }

    #[inline]
    fn size(&self) -> usize {
        MultiStore::size(self)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}
