//! The set-like collaborator consumed by set algebra.
//!
//! [`OrderedSet`] combines with any collection that can answer membership
//! queries and enumerate its elements, not only with other ordered sets.

use std::collections::{BTreeSet, HashSet, btree_set, hash_set};
use std::hash::{BuildHasher, Hash};

use super::{Iter, OrderedSet};

/// A collection of unique elements that [`OrderedSet`] can combine with.
///
/// Implementations must not report the same element twice from
/// [`elements`](SetLike::elements), and [`element_count`](SetLike::element_count)
/// must equal the number of elements produced.
///
/// # Examples
///
/// ```rust
/// use linked_set::set::{OrderedSet, SetLike};
/// use std::collections::BTreeSet;
///
/// let ordered: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
/// let other: BTreeSet<i32> = [2, 3, 4].into_iter().collect();
///
/// assert_eq!(other.element_count(), 3);
/// assert_eq!(ordered.intersection(&other).to_string(), "[2, 3]");
/// ```
pub trait SetLike<T> {
    /// Iterator over the elements of the collection.
    type Elements<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of elements in the collection.
    fn element_count(&self) -> usize;

    /// Returns `true` if the collection contains `element`.
    fn has_element(&self, element: &T) -> bool;

    /// Returns an iterator over the elements of the collection, in no
    /// particular order.
    fn elements(&self) -> Self::Elements<'_>;
}

impl<T: Ord> SetLike<T> for OrderedSet<T> {
    type Elements<'a>
        = Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn element_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn has_element(&self, element: &T) -> bool {
        self.contains(element)
    }

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }
}

impl<T: Ord> SetLike<T> for BTreeSet<T> {
    type Elements<'a>
        = btree_set::Iter<'a, T>
    where
        T: 'a;

    fn element_count(&self) -> usize {
        self.len()
    }

    fn has_element(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }
}

impl<T: Eq + Hash, S: BuildHasher> SetLike<T> for HashSet<T, S> {
    type Elements<'a>
        = hash_set::Iter<'a, T>
    where
        T: 'a,
        S: 'a;

    fn element_count(&self) -> usize {
        self.len()
    }

    fn has_element(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn count_and_probe<S: SetLike<i32>>(set: &S, probe: i32) -> (usize, bool, i32) {
        (
            set.element_count(),
            set.has_element(&probe),
            set.elements().sum(),
        )
    }

    #[rstest]
    fn test_ordered_set_is_set_like() {
        let set: OrderedSet<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(count_and_probe(&set, 2), (3, true, 6));
        assert_eq!(count_and_probe(&set, 7), (3, false, 6));
    }

    #[rstest]
    fn test_btree_set_is_set_like() {
        let set: BTreeSet<i32> = [4, 5].into_iter().collect();
        assert_eq!(count_and_probe(&set, 4), (2, true, 9));
    }

    #[rstest]
    fn test_hash_set_is_set_like() {
        let set: HashSet<i32> = [10, 20, 30].into_iter().collect();
        assert_eq!(count_and_probe(&set, 15), (3, false, 60));
    }
}
