use std::fmt;

use hashbrown::HashMap;

use crate::{EntityHandle, StoreError, StoreResult};

/// Record of a swap-removal.
///
/// Removing from a [`ComponentStore`] moves the last dense element into the vacated slot,
/// so the dense order of the remaining components changes. This tells the caller exactly
/// what happened, which is enough to fix up an index-based loop cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapRemoval<T> {
    /// The component that was removed.
    pub value: T,
    /// Dense index that was vacated.
    pub index: usize,
    /// Entity whose component now sits at `index`, or `None` if the removed component
    /// was the last one.
    pub moved: Option<EntityHandle>,
}

/// Packed storage for one component type.
///
/// Classic sparse set: a sparse map from handle to dense position, plus two index-aligned
/// dense arrays holding the components and their owners. Lookups, insertions and removals
/// are `O(1)` amortized, and iterating [`components`](Self::components) is a walk over a
/// contiguous slice.
///
/// * Each entity owns at most one component here. Use [`MultiStore`](crate::MultiStore) for
/// one-to-many records.
/// * Removal is a swap-removal, so **iteration order is not stable across removals**. Removing
/// while walking [`entities`](Self::entities) forward skips the element that was swapped into
/// the current slot: walk backward, loop over [`entities_snapshot`](Self::entities_snapshot),
/// or use [`retain`](Self::retain).
pub struct ComponentStore<T> {
    pub(crate) sparse: HashMap<EntityHandle, usize>,
    pub(crate) components: Vec<T>,
    pub(crate) entities: Vec<EntityHandle>,
}

impl<T> ComponentStore<T> {
    pub fn new() -> ComponentStore<T> {
        ComponentStore {
            sparse: HashMap::new(),
            components: Vec::new(),
            entities: Vec::new(),
        }
    }

    /// Pre-sizes the sparse map and both dense arrays for `capacity` components.
    pub fn with_capacity(capacity: usize) -> ComponentStore<T> {
        ComponentStore {
            sparse: HashMap::with_capacity(capacity),
            components: Vec::with_capacity(capacity),
            entities: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.components.capacity()
    }

    /// Adds a component for `entity` and returns it, so callers can fill fields in place.
    ///
    /// # Panics
    ///
    /// Panics if `entity` already has a component in this store. This is a bug in the
    /// caller: use [`insert`](Self::insert) to replace, or [`try_emplace`](Self::try_emplace)
    /// if the duplicate is expected.
    #[track_caller]
    pub fn emplace(&mut self, entity: EntityHandle, component: T) -> &mut T {
        self.try_emplace(entity, component)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// [`emplace`](Self::emplace) with the component's default value.
    #[track_caller]
    pub fn emplace_default(&mut self, entity: EntityHandle) -> &mut T where T: Default {
        self.emplace(entity, T::default())
    }

    /// Adds a component for `entity`, or returns `StoreError::InvariantViolation` if it
    /// already has one. The store is left untouched on error.
    pub fn try_emplace(&mut self, entity: EntityHandle, component: T) -> StoreResult<&mut T> {
        if self.sparse.contains_key(&entity) {
            return Err(StoreError::duplicate::<T>(entity));
        }
        Ok(self.push(entity, component))
    }

    /// Adds or replaces the component of `entity`.
    ///
    /// Returns the previous component if there was one. Replacing keeps the dense position.
    pub fn insert(&mut self, entity: EntityHandle, component: T) -> Option<T> {
        match self.sparse.get(&entity) {
            Some(&index) => Some(std::mem::replace(&mut self.components[index], component)),
            None => {
                self.push(entity, component);
                None
            }
        }
    }

    fn push(&mut self, entity: EntityHandle, component: T) -> &mut T {
        let index = self.components.len();
        self.sparse.insert(entity, index);
        self.entities.push(entity);
        self.components.push(component);
        debug_assert_eq!(self.entities.len(), self.components.len());
        &mut self.components[index]
    }

    /// Returns true if `entity` has a component in this store. Never fails.
    #[inline]
    pub fn has(&self, entity: EntityHandle) -> bool {
        self.sparse.contains_key(&entity)
    }

    /// Dense index of the component of `entity`, if any.
    ///
    /// Only valid until the next removal.
    #[inline]
    pub fn index_of(&self, entity: EntityHandle) -> Option<usize> {
        self.sparse.get(&entity).copied()
    }

    #[inline]
    pub fn find(&self, entity: EntityHandle) -> Option<&T> {
        let index = *self.sparse.get(&entity)?;
        Some(&self.components[index])
    }

    #[inline]
    pub fn find_mut(&mut self, entity: EntityHandle) -> Option<&mut T> {
        let index = *self.sparse.get(&entity)?;
        Some(&mut self.components[index])
    }

    pub fn try_get(&self, entity: EntityHandle) -> StoreResult<&T> {
        self.find(entity).ok_or_else(|| StoreError::absent::<T>(entity))
    }

    pub fn try_get_mut(&mut self, entity: EntityHandle) -> StoreResult<&mut T> {
        match self.sparse.get(&entity) {
            Some(&index) => Ok(&mut self.components[index]),
            None => Err(StoreError::absent::<T>(entity)),
        }
    }

    /// Returns the component of `entity`.
    ///
    /// # Panics
    ///
    /// Panics if `entity` has no component here. Call [`has`](Self::has) or
    /// [`find`](Self::find) first when absence is a legitimate outcome.
    #[track_caller]
    pub fn get(&self, entity: EntityHandle) -> &T {
        self.try_get(entity).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutable version of [`get`](Self::get), with the same panic contract.
    #[track_caller]
    pub fn get_mut(&mut self, entity: EntityHandle) -> &mut T {
        self.try_get_mut(entity).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Swap-removes the component of `entity`.
    ///
    /// The last dense element is moved into the vacated slot and its sparse entry is
    /// updated. Removing an entity that is not here is a no-op returning `None`.
    pub fn remove(&mut self, entity: EntityHandle) -> Option<SwapRemoval<T>> {
        let index = self.sparse.remove(&entity)?;
        let value = self.components.swap_remove(index);
        self.entities.swap_remove(index);

        let moved = self.entities.get(index).copied();
        if let Some(moved) = moved {
            if let Some(slot) = self.sparse.get_mut(&moved) {
                *slot = index;
            }
            tracing::trace!(%entity, %moved, index, "swap-removed component");
        }
        debug_assert_eq!(self.entities.len(), self.components.len());

        Some(SwapRemoval { value, index, moved })
    }

    /// Keeps only the components for which `keep` returns true.
    ///
    /// Walks the dense arrays backward, so the element swapped into a vacated slot has
    /// always been visited already: every component is seen exactly once, and `keep` may
    /// freely mutate the component it is given. Returns how many were removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where F: FnMut(EntityHandle, &mut T) -> bool
    {
        let mut removed = 0;
        let mut index = self.components.len();
        while index > 0 {
            index -= 1;
            let entity = self.entities[index];
            if !keep(entity, &mut self.components[index]) {
                self.remove(entity);
                removed += 1;
            }
        }
        removed
    }

    /// Drops every component. Capacity is kept.
    pub fn clear(&mut self) {
        self.sparse.clear();
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

    /// Owners, index-aligned with [`components`](Self::components).
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

    /// Copy of the owner list, safe to loop over while adding or removing components.
    pub fn entities_snapshot(&self) -> Vec<EntityHandle> {
        self.entities.clone()
    }
}

impl<T> Default for ComponentStore<T> {
    fn default() -> Self {
        ComponentStore::new()
    }
}

impl<T: Clone> Clone for ComponentStore<T> {
    fn clone(&self) -> Self {
        ComponentStore {
            sparse: self.sparse.clone(),
            components: self.components.clone(),
            entities: self.entities.clone(),
        }
    }

    fn clone_from(&mut self, other: &Self) {
        self.sparse.clone_from(&other.sparse);
        self.components.clone_from(&other.components);
        self.entities.clone_from(&other.entities);
    }
}

impl<T: fmt::Debug> fmt::Debug for ComponentStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Violation;

    fn handles(n: usize) -> Vec<EntityHandle> {
        (0..n).map(|_| EntityHandle::new()).collect()
    }

    // Sparse and dense must agree on every slot.
    fn assert_consistent<T>(store: &ComponentStore<T>) {
        assert_eq!(store.entities.len(), store.components.len());
        assert_eq!(store.sparse.len(), store.entities.len());
        for (&entity, &index) in &store.sparse {
            assert_eq!(store.entities[index], entity);
        }
    }

    #[test]
    fn emplace_then_get() {
        let mut store = ComponentStore::new();
        let e = EntityHandle::new();
        *store.emplace(e, 1u32) += 4;
        assert!(store.has(e));
        assert_eq!(*store.get(e), 5);
        assert_eq!(store.size(), 1);
    }

    #[test]
    fn try_emplace_rejects_duplicate() {
        let mut store = ComponentStore::new();
        let e = EntityHandle::new();
        store.emplace(e, 'a');
        let err = store.try_emplace(e, 'b').unwrap_err();
        assert_eq!(err.entity(), e);
        assert_eq!(err.violation(), Violation::DuplicateEmplace);
        assert_eq!(*store.get(e), 'a');
        assert_eq!(store.size(), 1);
    }

    #[test]
    #[should_panic(expected = "already has a component")]
    fn emplace_duplicate_panics() {
        let mut store = ComponentStore::new();
        let e = EntityHandle::new();
        store.emplace(e, 0i8);
        store.emplace(e, 1i8);
    }

    #[test]
    #[should_panic(expected = "has no component")]
    fn get_absent_panics() {
        let store: ComponentStore<f32> = ComponentStore::new();
        store.get(EntityHandle::new());
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut store = ComponentStore::new();
        let [a, b] = [EntityHandle::new(), EntityHandle::new()];
        assert_eq!(store.insert(a, 1), None);
        assert_eq!(store.insert(b, 2), None);
        assert_eq!(store.insert(a, 10), Some(1));
        assert_eq!(store.components(), &[10, 2]);
        assert_consistent(&store);
    }

    #[test]
    fn remove_reports_swap() {
        let mut store = ComponentStore::new();
        let e = handles(3);
        for (i, &entity) in e.iter().enumerate() {
            store.emplace(entity, i);
        }

        let removal = store.remove(e[0]).unwrap();
        assert_eq!(removal, SwapRemoval { value: 0, index: 0, moved: Some(e[2]) });
        assert_eq!(store.entities(), &[e[2], e[1]]);
        assert_eq!(store.index_of(e[2]), Some(0));

        let removal = store.remove(e[1]).unwrap();
        assert_eq!(removal.moved, None);
        assert_eq!(store.remove(e[1]), None);
        assert_eq!(store.size(), 1);
        assert_consistent(&store);
    }

    #[test]
    fn retain_visits_each_once() {
        let mut store = ComponentStore::new();
        let e = handles(10);
        for (i, &entity) in e.iter().enumerate() {
            store.emplace(entity, i as i32);
        }

        let mut seen = 0;
        let removed = store.retain(|_, value| {
            seen += 1;
            *value -= 1;
            *value % 2 == 0
        });
        assert_eq!(seen, 10);
        assert_eq!(removed, 5);
        let mut left: Vec<i32> = store.components().to_vec();
        left.sort_unstable();
        assert_eq!(left, vec![0, 2, 4, 6, 8]);
        assert_consistent(&store);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut store = ComponentStore::with_capacity(16);
        for e in handles(8) {
            store.emplace(e, ());
        }
        store.clear();
        assert!(store.is_empty());
        assert!(store.capacity() >= 16);
        assert_consistent(&store);
    }
}
