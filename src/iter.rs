use std::iter::{FusedIterator, Zip};
use std::slice;

use crate::{ComponentStore, EntityHandle, MultiStore};

/// Iterator over `(owner, &component)` pairs, in dense order.
///
/// Shared by [`ComponentStore`] and [`MultiStore`]: both keep owners and components in two
/// index-aligned vectors.
pub struct Iter<'a, T> {
    pub(crate) inner: Zip<slice::Iter<'a, EntityHandle>, slice::Iter<'a, T>>,
}

/// Iterator over `(owner, &mut component)` pairs, in dense order.
pub struct IterMut<'a, T> {
    pub(crate) inner: Zip<slice::Iter<'a, EntityHandle>, slice::IterMut<'a, T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(entities: &'a [EntityHandle], components: &'a [T]) -> Self {
        debug_assert_eq!(entities.len(), components.len());
        Iter { inner: entities.iter().zip(components.iter()) }
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(entities: &'a [EntityHandle], components: &'a mut [T]) -> Self {
        debug_assert_eq!(entities.len(), components.len());
        IterMut { inner: entities.iter().zip(components.iter_mut()) }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (EntityHandle, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(e, c)| (*e, c))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(e, c)| (*e, c))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = (EntityHandle, &'a mut T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(e, c)| (*e, c))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(e, c)| (*e, c))
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}
impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<T> ComponentStore<T> {
    /// Iterates `(owner, &component)` in dense order.
    ///
    /// The borrow prevents removal during the walk; see [`retain`](Self::retain) for that.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.entities, &self.components)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&self.entities, &mut self.components)
    }
}

impl<T> MultiStore<T> {
    /// Iterates every record, duplicates included, in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.entities, &self.components)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&self.entities, &mut self.components)
    }
}

impl<'a, T> IntoIterator for &'a ComponentStore<T> {
    type Item = (EntityHandle, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ComponentStore<T> {
    type Item = (EntityHandle, &'a mut T);
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<'a, T> IntoIterator for &'a MultiStore<T> {
    type Item = (EntityHandle, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut MultiStore<T> {
    type Item = (EntityHandle, &'a mut T);
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ComponentStore, EntityHandle};

    #[test]
    fn iter_follows_dense_order() {
        let mut store = ComponentStore::new();
        let e: Vec<_> = (0..4).map(|_| EntityHandle::new()).collect();
        for (i, &entity) in e.iter().enumerate() {
            store.emplace(entity, i);
        }
        store.remove(e[1]);

        let pairs: Vec<_> = store.iter().map(|(e, c)| (e, *c)).collect();
        assert_eq!(pairs, vec![(e[0], 0), (e[3], 3), (e[2], 2)]);
        assert_eq!(store.iter().len(), 3);

        for (_, c) in &mut store {
            *c *= 10;
        }
        let last = store.iter().next_back().map(|(e, c)| (e, *c));
        assert_eq!(last, Some((e[2], 20)));
    }
}
