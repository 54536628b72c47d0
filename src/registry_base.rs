use crate::{ComponentContainer, EntityHandle, EntityReport, RegistryReport};

/// Cross-cutting operations over every store of a registry.
///
/// Implemented by [`define_registry!`](crate::define_registry) for the generated struct; only
/// the two `for_each_container*` methods are generated, everything else is built on them.
/// Because the macro derives the container list from the same declaration as the fields,
/// a store cannot exist without taking part in these operations.
pub trait RegistryBase {
    /// Calls `f` with the field name and type-erased view of every store, in declaration
    /// order.
    fn for_each_container(&self, f: impl FnMut(&'static str, &dyn ComponentContainer));

    fn for_each_container_mut(&mut self, f: impl FnMut(&'static str, &mut dyn ComponentContainer));

    /// Allocates a fresh entity handle.
    #[inline]
    fn create_entity(&self) -> EntityHandle {
        EntityHandle::new()
    }

    /// Destroys the whole footprint of `entity`: every store drops what it owns.
    ///
    /// Stores that don't hold the entity are left untouched. Returns how many stores held it.
    fn remove_all_components_of(&mut self, entity: EntityHandle) -> usize {
        let mut touched = 0;
        self.for_each_container_mut(|_, container| {
            if container.remove(entity) {
                touched += 1;
            }
        });
        tracing::debug!(%entity, stores = touched, "removed all components of entity");
        touched
    }

    /// Empties every store. Returns the number of components dropped.
    fn clear_all_components(&mut self) -> usize {
        let mut dropped = 0;
        self.for_each_container_mut(|_, container| {
            dropped += container.size();
            container.clear();
        });
        tracing::debug!(components = dropped, "cleared all components");
        dropped
    }

    fn total_components(&self) -> usize {
        let mut total = 0;
        self.for_each_container(|_, container| total += container.size());
        total
    }

    /// Population of every non-empty store, without logging anything.
    fn component_counts(&self) -> RegistryReport {
        let mut report = RegistryReport::default();
        self.for_each_container(|store, container| report.record(store, container));
        report
    }

    /// Stores in which `entity` owns something, without logging anything.
    fn components_of(&self, entity: EntityHandle) -> EntityReport {
        let mut report = EntityReport::new(entity);
        self.for_each_container(|store, container| report.record(store, container));
        report
    }

    /// Logs the population of every non-empty store at `info` level and returns it.
    fn list_all_components(&self) -> RegistryReport {
        let report = self.component_counts();
        report.log();
        report
    }

    /// Logs which stores `entity` appears in at `info` level and returns it.
    fn list_all_components_of(&self, entity: EntityHandle) -> EntityReport {
        let report = self.components_of(entity);
        report.log();
        report
    }
}

/// Typed access to the store holding `Self` inside registry `R`.
///
/// Generated by [`define_registry!`](crate::define_registry) once per declared component type,
/// which is also why a component type may only appear once per registry.
pub trait StoreOf<R>: Sized + 'static {
    type Store: ComponentContainer;

    fn store(registry: &R) -> &Self::Store;

    fn store_mut(registry: &mut R) -> &mut Self::Store;
}
