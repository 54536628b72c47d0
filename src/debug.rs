//! Diagnostic reports over a registry.
//!
//! These are meant for console/log output while developing. Nothing parses them, so the
//! `Display` layout may change freely.

use std::fmt;

use crate::{ComponentContainer, EntityHandle};

/// Population of one store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreCount {
    /// Field name of the store in the registry.
    pub store: &'static str,
    pub component: &'static str,
    pub count: usize,
}

/// Population of every non-empty store of a registry, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryReport {
    pub stores: Vec<StoreCount>,
}

impl RegistryReport {
    pub(crate) fn record(&mut self, store: &'static str, container: &dyn ComponentContainer) {
        let count = container.size();
        if count > 0 {
            self.stores.push(StoreCount { store, component: container.type_name(), count });
        }
    }

    /// Number of components across all stores.
    pub fn total(&self) -> usize {
        self.stores.iter().map(|s| s.count).sum()
    }

    /// Count for the store named `store`, or `None` if it is empty or unknown.
    pub fn count_of(&self, store: &str) -> Option<usize> {
        self.stores.iter().find(|s| s.store == store).map(|s| s.count)
    }

    pub(crate) fn log(&self) {
        tracing::info!(total = self.total(), stores = self.stores.len(), "registry population");
        for s in &self.stores {
            tracing::info!(store = s.store, component = s.component, count = s.count);
        }
    }
}

impl fmt::Display for RegistryReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} components in {} stores:", self.total(), self.stores.len())?;
        for s in &self.stores {
            writeln!(f, "{:>6} {} ({})", s.count, s.store, s.component)?;
        }
        Ok(())
    }
}

/// One store an entity appears in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreMembership {
    pub store: &'static str,
    pub component: &'static str,
}

/// Every store a single entity appears in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityReport {
    pub entity: EntityHandle,
    pub stores: Vec<StoreMembership>,
}

impl EntityReport {
    pub(crate) fn new(entity: EntityHandle) -> Self {
        EntityReport { entity, stores: Vec::new() }
    }

    pub(crate) fn record(&mut self, store: &'static str, container: &dyn ComponentContainer) {
        if container.has(self.entity) {
            self.stores.push(StoreMembership { store, component: container.type_name() });
        }
    }

    /// True if the entity appears in no store at all, i.e. it is dead.
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    pub fn contains(&self, store: &str) -> bool {
        self.stores.iter().any(|s| s.store == store)
    }

    pub(crate) fn log(&self) {
        tracing::info!(entity = %self.entity, stores = self.stores.len(), "entity components");
        for s in &self.stores {
            tracing::info!(entity = %self.entity, store = s.store, component = s.component);
        }
    }
}

impl fmt::Display for EntityReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "entity {} is in {} stores:", self.entity, self.stores.len())?;
        for s in &self.stores {
            writeln!(f, "  {} ({})", s.store, s.component)?;
        }
        Ok(())
    }
}
