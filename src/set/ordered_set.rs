//! The ordered set and its chain maintenance.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Rev;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use super::arena::{Node, NodeArena, NodeId};
use super::{CursorMut, IntoIter, Iter, SetLike};
use crate::error::SetError;

/// An ordered set backed by a doubly-linked chain.
///
/// Elements are kept unique and in ascending order of [`Ord`] at all times.
/// The chain's nodes live in an internal slot arena and link to each other by
/// index, so no node is ever reachable from outside the set.
///
/// Equality and ordering of `T` must agree: `a == b` exactly when
/// `a.cmp(&b)` is [`Ordering::Equal`]. Membership is decided with `==` while
/// placement is decided with `cmp`, and a type that breaks this contract
/// leaves the set in an unspecified (but memory safe) order.
///
/// # Time Complexity
///
/// | Operation                         | Complexity  |
/// |-----------------------------------|-------------|
/// | `insert` / `remove` / `contains`  | O(n)        |
/// | `len` / `is_empty` / `first` / `last` | O(1)    |
/// | `union` / `intersection` / `complement` | O(n * c), c = cost of a membership test on the other set |
/// | `&a \| &b` with two ordered sets  | O(n + m)    |
/// | `power_set`                       | O(2^n * n)  |
///
/// # Examples
///
/// ```rust
/// use linked_set::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// assert!(set.insert(5));
/// assert!(set.insert(3));
/// assert!(set.insert(9));
/// assert!(!set.insert(3));
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.to_string(), "[3, 5, 9]");
///
/// assert!(set.remove(&5));
/// assert!(!set.remove(&5));
/// assert_eq!(set.to_string(), "[3, 9]");
/// ```
#[derive(Clone)]
pub struct OrderedSet<T> {
    pub(super) arena: NodeArena<T>,
    pub(super) front: Option<NodeId>,
    pub(super) rear: Option<NodeId>,
    pub(super) len: usize,
}

static_assertions::assert_impl_all!(OrderedSet<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(OrderedSet<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(OrderedSet<std::rc::Rc<i32>>: Send, Sync);

impl<T> OrderedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            front: None,
            rear: None,
            len: 0,
        }
    }

    /// Creates a new empty set with room for `capacity` elements before the
    /// node arena reallocates.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: NodeArena::with_capacity(capacity),
            front: None,
            rear: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the set can hold without reallocating
    /// its node arena.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        trace!("clearing {} elements", self.len);
        self.arena.clear();
        self.front = None;
        self.rear = None;
        self.len = 0;
    }

    /// Returns the smallest element, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.front.map(|id| &self.arena.get(id).element)
    }

    /// Returns the largest element, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.rear.map(|id| &self.arena.get(id).element)
    }

    /// Removes and returns the smallest element, if any.
    pub fn pop_first(&mut self) -> Option<T> {
        let id = self.front?;
        Some(self.unlink(id))
    }

    /// Removes and returns the largest element, if any.
    pub fn pop_last(&mut self) -> Option<T> {
        let id = self.rear?;
        Some(self.unlink(id))
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [3, 1, 2].into_iter().collect();
    /// let elements: Vec<&i32> = set.iter().collect();
    /// assert_eq!(elements, vec![&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns an iterator over the elements in descending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
    /// let elements: Vec<i32> = set.descending_iter().copied().collect();
    /// assert_eq!(elements, vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn descending_iter(&self) -> Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    /// Returns a cursor that walks the set in ascending order and can remove
    /// the element it produced last.
    ///
    /// See [`CursorMut`] for the removal protocol.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }

    /// Splices a new node holding `element` between `prev` and `next`.
    ///
    /// `prev` and `next` must be adjacent in the chain (or the matching end
    /// of the chain when `None`).
    fn link(&mut self, element: T, prev: Option<NodeId>, next: Option<NodeId>) -> NodeId {
        let id = self.arena.allocate(Node {
            element,
            prev,
            next,
        });
        match prev {
            Some(prev) => self.arena.get_mut(prev).next = Some(id),
            None => self.front = Some(id),
        }
        match next {
            Some(next) => self.arena.get_mut(next).prev = Some(id),
            None => self.rear = Some(id),
        }
        self.len += 1;
        id
    }

    /// Unlinks the node `id` from the chain and returns its element.
    pub(super) fn unlink(&mut self, id: NodeId) -> T {
        let Node {
            element,
            prev,
            next,
        } = self.arena.deallocate(id);
        match prev {
            Some(prev) => self.arena.get_mut(prev).next = next,
            None => self.front = next,
        }
        match next {
            Some(next) => self.arena.get_mut(next).prev = prev,
            None => self.rear = prev,
        }
        self.len -= 1;
        element
    }
}

impl<T: Ord> OrderedSet<T> {
    /// Builds a set from elements that are already strictly ascending.
    pub(super) fn from_ascending<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let elements = elements.into_iter();
        let mut set = Self::with_capacity(elements.size_hint().0);
        for element in elements {
            set.push_back(element);
        }
        set
    }

    fn push_back(&mut self, element: T) {
        debug_assert!(
            self.last().is_none_or(|last| *last < element),
            "elements must be appended in strictly ascending order"
        );
        self.link(element, self.rear, None);
    }

    /// Finds the node holding an element equal to `element`.
    fn find<Q>(&self, element: &Q) -> Option<NodeId>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut current = self.front;
        while let Some(id) = current {
            let node = self.arena.get(id);
            if node.element.borrow() == element {
                return Some(id);
            }
            current = node.next;
        }
        None
    }

    /// Returns `true` if the set contains an element equal to `element`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
    /// assert!(set.contains(&2));
    /// assert!(!set.contains(&4));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.find(element).is_some()
    }

    /// Like [`contains`](Self::contains), but accepts a possibly absent
    /// element.
    ///
    /// An absent element is never contained, so `None` answers `false` rather
    /// than failing. This is deliberately more lenient than
    /// [`try_insert`](Self::try_insert) and [`try_remove`](Self::try_remove),
    /// which reject `None`: a query cannot corrupt the set.
    #[must_use]
    pub fn contains_option<Q>(&self, element: Option<&Q>) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        element.is_some_and(|element| self.contains(element))
    }

    /// Adds `element` to the set, keeping ascending order.
    ///
    /// Returns `false` and leaves the set unchanged if an equal element is
    /// already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert!(set.insert(2));
    /// assert!(set.insert(1));
    /// assert!(!set.insert(2));
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        if self.contains(&element) {
            trace!("insert skipped duplicate, len {}", self.len);
            return false;
        }

        let mut prev = None;
        let mut next = self.front;
        while let Some(id) = next {
            let node = self.arena.get(id);
            if element.cmp(&node.element) == Ordering::Less {
                break;
            }
            prev = Some(id);
            next = node.next;
        }

        self.link(element, prev, next);
        trace!("inserted element, len {}", self.len);
        true
    }

    /// Adds a possibly absent element to the set.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::AbsentElement`] if `element` is `None`; the set is
    /// left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_set::{OrderedSet, SetError};
    ///
    /// let mut set = OrderedSet::new();
    /// assert_eq!(set.try_insert(Some(1)), Ok(true));
    /// assert_eq!(set.try_insert(Some(1)), Ok(false));
    /// assert!(matches!(set.try_insert(None), Err(SetError::AbsentElement { .. })));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn try_insert(&mut self, element: Option<T>) -> Result<bool, SetError> {
        let element = element.ok_or(SetError::AbsentElement {
            operation: "try_insert",
        })?;
        Ok(self.insert(element))
    }

    /// Removes the element equal to `element` and returns it.
    pub fn take<Q>(&mut self, element: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let id = self.find(element)?;
        let removed = self.unlink(id);
        trace!("removed element, len {}", self.len);
        Some(removed)
    }

    /// Removes the element equal to `element`.
    ///
    /// Returns `false` and leaves the set unchanged if no such element is
    /// present.
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.take(element).is_some()
    }

    /// Removes a possibly absent element from the set.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::AbsentElement`] if `element` is `None`; the set is
    /// left unchanged.
    pub fn try_remove<Q>(&mut self, element: Option<&Q>) -> Result<bool, SetError>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let element = element.ok_or(SetError::AbsentElement {
            operation: "try_remove",
        })?;
        Ok(self.remove(element))
    }

    /// Returns `true` if `self` and `other` contain exactly the same
    /// elements.
    ///
    /// The sizes must match and the complement of `self` relative to `other`
    /// must be empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_set::OrderedSet;
    /// use std::collections::HashSet;
    ///
    /// let set: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
    /// let same: HashSet<i32> = [3, 2, 1].into_iter().collect();
    /// let subset: HashSet<i32> = [1, 2].into_iter().collect();
    ///
    /// assert!(set.set_eq(&same));
    /// assert!(!set.set_eq(&subset));
    /// ```
    #[must_use]
    pub fn set_eq<S: SetLike<T> + ?Sized>(&self, other: &S) -> bool {
        self.len == other.element_count() && self.iter().all(|element| other.has_element(element))
    }

    /// Returns `true` if every element of `self` is in `other`.
    #[must_use]
    pub fn is_subset<S: SetLike<T> + ?Sized>(&self, other: &S) -> bool {
        self.len <= other.element_count() && self.iter().all(|element| other.has_element(element))
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[must_use]
    pub fn is_superset<S: SetLike<T> + ?Sized>(&self, other: &S) -> bool {
        other.element_count() <= self.len && other.elements().all(|element| self.contains(element))
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    #[must_use]
    pub fn is_disjoint<S: SetLike<T> + ?Sized>(&self, other: &S) -> bool {
        !self.iter().any(|element| other.has_element(element))
    }
}

impl<T: Ord + Clone> OrderedSet<T> {
    /// Returns a new set with every element of `self` and of `other`.
    ///
    /// Neither operand is modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_set::OrderedSet;
    ///
    /// let left: OrderedSet<i32> = [1, 2].into_iter().collect();
    /// let right: OrderedSet<i32> = [2, 3].into_iter().collect();
    ///
    /// assert_eq!(left.union(&right).to_string(), "[1, 2, 3]");
    /// ```
    #[must_use]
    pub fn union<S: SetLike<T> + ?Sized>(&self, other: &S) -> Self {
        let mut all = Self::from_ascending(self.iter().cloned());
        for element in other.elements() {
            if !all.contains(element) {
                all.insert(element.clone());
            }
        }
        all
    }

    /// Returns a new set with the elements of `self` that are also in
    /// `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_set::OrderedSet;
    /// use std::collections::BTreeSet;
    ///
    /// let left: OrderedSet<i32> = [1, 2].into_iter().collect();
    /// let right: BTreeSet<i32> = [2, 3].into_iter().collect();
    ///
    /// assert_eq!(left.intersection(&right).to_string(), "[2]");
    /// ```
    #[must_use]
    pub fn intersection<S: SetLike<T> + ?Sized>(&self, other: &S) -> Self {
        Self::from_ascending(
            self.iter()
                .filter(|element| other.has_element(element))
                .cloned(),
        )
    }

    /// Returns a new set with the elements of `self` that are not in
    /// `other`.
    ///
    /// This is the asymmetric difference `self - other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_set::OrderedSet;
    ///
    /// let left: OrderedSet<i32> = [1, 2].into_iter().collect();
    /// let right: OrderedSet<i32> = [2, 3].into_iter().collect();
    ///
    /// assert_eq!(left.complement(&right).to_string(), "[1]");
    /// assert_eq!(right.complement(&left).to_string(), "[3]");
    /// ```
    #[must_use]
    pub fn complement<S: SetLike<T> + ?Sized>(&self, other: &S) -> Self {
        Self::from_ascending(
            self.iter()
                .filter(|element| !other.has_element(element))
                .cloned(),
        )
    }

    /// Returns a new set with the elements that are in exactly one of `self`
    /// and `other`.
    #[must_use]
    pub fn symmetric_difference<S: SetLike<T> + ?Sized>(&self, other: &S) -> Self {
        let mut result = self.complement(other);
        for element in other.elements() {
            if !self.contains(element) {
                result.insert(element.clone());
            }
        }
        result
    }
}

impl<T> Default for OrderedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T: Ord + Copy + 'a> Extend<&'a T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for OrderedSet<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.set_eq(other)
    }
}

impl<T: Ord> Eq for OrderedSet<T> {}

impl<T: Hash> Hash for OrderedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equal sets hold equal elements in the same (ascending) order.
        self.len.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

/// Merges two ordered sets in a single pass over both chains.
impl<T: Ord + Clone> BitOr<&OrderedSet<T>> for &OrderedSet<T> {
    type Output = OrderedSet<T>;

    fn bitor(self, rhs: &OrderedSet<T>) -> OrderedSet<T> {
        let mut left = self.iter().peekable();
        let mut right = rhs.iter().peekable();
        let mut merged = OrderedSet::with_capacity(self.len + rhs.len);
        loop {
            // An exhausted side orders after everything still pending.
            let ordering = match (left.peek(), right.peek()) {
                (Some(left_element), Some(right_element)) => left_element.cmp(right_element),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => break,
            };
            let next = match ordering {
                Ordering::Less => left.next(),
                Ordering::Greater => right.next(),
                Ordering::Equal => {
                    right.next();
                    left.next()
                }
            };
            if let Some(element) = next {
                merged.push_back(element.clone());
            }
        }
        merged
    }
}

impl<T: Ord + Clone> BitAnd<&OrderedSet<T>> for &OrderedSet<T> {
    type Output = OrderedSet<T>;

    fn bitand(self, rhs: &OrderedSet<T>) -> OrderedSet<T> {
        self.intersection(rhs)
    }
}

impl<T: Ord + Clone> Sub<&OrderedSet<T>> for &OrderedSet<T> {
    type Output = OrderedSet<T>;

    fn sub(self, rhs: &OrderedSet<T>) -> OrderedSet<T> {
        self.complement(rhs)
    }
}

impl<T: Ord + Clone> BitXor<&OrderedSet<T>> for &OrderedSet<T> {
    type Output = OrderedSet<T>;

    fn bitxor(self, rhs: &OrderedSet<T>) -> OrderedSet<T> {
        self.symmetric_difference(rhs)
    }
}

#[cfg(test)]
impl<T: Ord + fmt::Debug> OrderedSet<T> {
    /// Walks the chain in both directions and checks every structural
    /// invariant.
    pub(crate) fn assert_chain_invariants(&self) {
        assert_eq!(self.front.is_none(), self.len == 0);
        assert_eq!(self.rear.is_none(), self.len == 0);
        assert_eq!(self.arena.len(), self.len);

        let mut count = 0;
        let mut prev: Option<NodeId> = None;
        let mut current = self.front;
        while let Some(id) = current {
            let node = self.arena.get(id);
            assert_eq!(node.prev, prev, "broken back link at position {count}");
            if let Some(prev) = prev {
                let prev_element = &self.arena.get(prev).element;
                assert!(
                    *prev_element < node.element,
                    "{prev_element:?} is not below {:?}",
                    node.element
                );
            }
            prev = Some(id);
            current = node.next;
            count += 1;
        }
        assert_eq!(prev, self.rear);
        assert_eq!(count, self.len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn build(elements: &[i32]) -> OrderedSet<i32> {
        let mut set = OrderedSet::new();
        for &element in elements {
            set.insert(element);
            set.assert_chain_invariants();
        }
        set
    }

    fn collect(set: &OrderedSet<i32>) -> Vec<i32> {
        set.iter().copied().collect()
    }

    #[rstest]
    fn test_new_set_has_no_chain() {
        let set: OrderedSet<i32> = OrderedSet::new();
        assert!(set.front.is_none());
        assert!(set.rear.is_none());
        set.assert_chain_invariants();
    }

    #[rstest]
    #[case(&[5, 3, 9, 3], &[3, 5, 9])]
    #[case(&[1, 2, 3], &[1, 2, 3])]
    #[case(&[3, 2, 1], &[1, 2, 3])]
    #[case(&[2, 1, 3, 0, 4], &[0, 1, 2, 3, 4])]
    #[case(&[7, 7, 7], &[7])]
    fn test_insert_keeps_chain_ascending(#[case] inserted: &[i32], #[case] expected: &[i32]) {
        let set = build(inserted);
        assert_eq!(collect(&set), expected);
        assert_eq!(set.len(), expected.len());
    }

    #[rstest]
    fn test_insert_updates_front_and_rear() {
        let mut set = build(&[5]);
        assert_eq!(set.front, set.rear);

        set.insert(1);
        assert_eq!(set.first(), Some(&1));
        assert_eq!(set.last(), Some(&5));

        set.insert(9);
        assert_eq!(set.last(), Some(&9));
        set.assert_chain_invariants();
    }

    #[rstest]
    #[case(3)]
    #[case(5)]
    #[case(9)]
    fn test_remove_patches_links_at_every_position(#[case] removed: i32) {
        let mut set = build(&[3, 5, 9]);
        assert!(set.remove(&removed));
        set.assert_chain_invariants();
        assert!(!set.contains(&removed));
        assert_eq!(set.len(), 2);
    }

    #[rstest]
    fn test_remove_last_element_clears_ends() {
        let mut set = build(&[4]);
        assert!(set.remove(&4));
        assert!(set.front.is_none());
        assert!(set.rear.is_none());
        set.assert_chain_invariants();
    }

    #[rstest]
    fn test_removed_slots_are_reused() {
        let mut set = build(&[1, 2, 3]);
        let capacity = set.arena.capacity();
        set.remove(&2);
        set.insert(4);
        set.remove(&1);
        set.insert(0);
        assert_eq!(set.arena.capacity(), capacity);
        assert_eq!(collect(&set), vec![0, 3, 4]);
        set.assert_chain_invariants();
    }

    #[rstest]
    fn test_pop_first_and_last() {
        let mut set = build(&[1, 2, 3]);
        assert_eq!(set.pop_first(), Some(1));
        assert_eq!(set.pop_last(), Some(3));
        set.assert_chain_invariants();
        assert_eq!(set.pop_last(), Some(2));
        assert_eq!(set.pop_first(), None);
        set.assert_chain_invariants();
    }

    #[rstest]
    fn test_merge_union_matches_insert_union() {
        let left = build(&[1, 4, 6, 8]);
        let right = build(&[2, 4, 5, 9]);

        let merged = &left | &right;
        merged.assert_chain_invariants();
        assert_eq!(merged, left.union(&right));
        assert_eq!(collect(&merged), vec![1, 2, 4, 5, 6, 8, 9]);
    }

    #[rstest]
    fn test_algebra_results_hold_invariants() {
        let left = build(&[1, 2, 3, 4]);
        let right = build(&[3, 4, 5]);

        for result in [
            left.union(&right),
            left.intersection(&right),
            left.complement(&right),
            left.symmetric_difference(&right),
        ] {
            result.assert_chain_invariants();
        }
    }

    #[rstest]
    fn test_clone_is_independent() {
        let original = build(&[1, 2]);
        let mut copy = original.clone();
        copy.insert(3);
        copy.assert_chain_invariants();
        assert_eq!(collect(&original), vec![1, 2]);
    }

    #[rstest]
    fn test_clear_resets_chain() {
        let mut set = build(&[1, 2, 3]);
        set.clear();
        set.assert_chain_invariants();
        set.insert(10);
        set.assert_chain_invariants();
    }
}
