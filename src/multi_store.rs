use std::fmt;

use hashbrown::HashMap;

use crate::EntityHandle;

/// Packed storage that allows several records per entity.
///
/// Meant for transient one-to-many relations, such as the collision records a physics step
/// produces: one entity can collide with several others in the same frame. Consume the
/// records by iterating, then [`clear`](Self::clear) once per frame.
///
/// There is no `get` or `remove` by entity: with duplicates there is no single
/// component to return. The type-erased [`ComponentContainer::remove`](crate::ComponentContainer::remove)
/// used by registry-wide destruction drops *every* record owned by the entity, in `O(n)`.
pub struct MultiStore<T> {
    // records per owner, so `has` stays O(1)
    pub(crate) counts: HashMap<EntityHandle, usize>,
    pub(crate) components: Vec<T>,
    pub(crate) entities: Vec<EntityHandle>,
}

impl<T> MultiStore<T> {
    pub fn new() -> MultiStore<T> {
        MultiStore {
            counts: HashMap::new(),
            components: Vec::new(),
            entities: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> MultiStore<T> {
        MultiStore {
            counts: HashMap::with_capacity(capacity),
            components: Vec::with_capacity(capacity),
            entities: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.components.capacity()
    }

    /// Appends a record owned by `entity`, whether or not it already owns some.
    pub fn emplace_with_duplicates(&mut self, entity: EntityHandle, component: T) -> &mut T {
        *self.counts.entry(entity).or_insert(0) += 1;
        let index = self.components.len();
        self.entities.push(entity);
        self.components.push(component);
        &mut self.components[index]
    }

    /// Returns true if `entity` owns at least one record.
    #[inline]
    pub fn has(&self, entity: EntityHandle) -> bool {
        self.counts.contains_key(&entity)
    }

    #[inline]
    pub fn count_of(&self, entity: EntityHandle) -> usize {
        self.counts.get(&entity).copied().unwrap_or(0)
    }

    /// Every record owned by `entity`, in insertion order.
    pub fn records_of(&self, entity: EntityHandle) -> impl Iterator<Item = &T> + '_ {
        self.entities.iter()
            .zip(self.components.iter())
            .filter(move |(owner, _)| **owner == entity)
            .map(|(_, c)| c)
    }

    // Compacts in place, keeping the relative order of the survivors.
    pub(crate) fn remove_records_of(&mut self, entity: EntityHandle) -> usize {
        let Some(count) = self.counts.remove(&entity) else {
            return 0;
        };
        let mut kept = 0;
        for read in 0..self.entities.len() {
            if self.entities[read] != entity {
                self.entities.swap(kept, read);
                self.components.swap(kept, read);
                kept += 1;
            }
        }
        self.entities.truncate(kept);
        self.components.truncate(kept);
        debug_assert_eq!(self.entities.len(), self.components.len());
        count
    }

    pub fn clear(&mut self) {
        self.counts.clear();
        self.components.clear();
        self.entities.clear();
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.components.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Owners, index-aligned with [`components`](Self::components). May contain repeats.
    #[inline]
    pub fn entities(&self) -> &[EntityHandle] {
        &self.entities
    }

    #[inline]
    pub fn components(&self) -> &[T] {
        &self.components
    }

    #[inline]
    pub fn components_mut(&mut self) -> &mut [T] {
        &mut self.components
    }
}

impl<T> Default for MultiStore<T> {
    fn default() -> Self {
        MultiStore::new()
    }
}

impl<T: Clone> Clone for MultiStore<T> {
    fn clone(&self) -> Self {
        MultiStore {
            counts: self.counts.clone(),
            components: self.components.clone(),
            entities: self.entities.clone(),
        }
    }

    fn clone_from(&mut self, other: &Self) {
        self.counts.clone_from(&other.counts);
        self.components.clone_from(&other.components);
        self.entities.clone_from(&other.entities);
    }
}

impl<T: fmt::Debug> fmt::Debug for MultiStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
