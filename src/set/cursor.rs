//! Removal while iterating.

use super::OrderedSet;
use super::arena::NodeId;
use crate::error::SetError;

/// A cursor over an [`OrderedSet`] that can remove the element it produced
/// last.
///
/// This `struct` is created by [`OrderedSet::cursor_mut`]. It walks the set
/// in ascending order. After each successful [`next`](CursorMut::next) the
/// produced element may be removed once with [`remove`](CursorMut::remove);
/// removing again before the next advance is an error and leaves the set
/// untouched. The cursor borrows the set mutably, so nothing else can change
/// the chain while it is alive.
///
/// # Examples
///
/// ```rust
/// use linked_set::{OrderedSet, SetError};
///
/// let mut set: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
/// let mut cursor = set.cursor_mut();
///
/// assert_eq!(cursor.next(), Some(&1));
/// assert_eq!(cursor.next(), Some(&2));
/// assert_eq!(cursor.remove(), Ok(2));
/// assert_eq!(cursor.remove(), Err(SetError::NoCurrentElement));
/// assert_eq!(cursor.next(), Some(&3));
///
/// assert_eq!(set.to_string(), "[1, 3]");
/// ```
pub struct CursorMut<'a, T> {
    set: &'a mut OrderedSet<T>,
    next: Option<NodeId>,
    last: Option<NodeId>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(super) const fn new(set: &'a mut OrderedSet<T>) -> Self {
        let next = set.front;
        Self {
            set,
            next,
            last: None,
        }
    }

    /// Advances the cursor and returns the element it moved over.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        let id = self.next?;
        self.next = self.set.arena.get(id).next;
        self.last = Some(id);
        Some(&self.set.arena.get(id).element)
    }

    /// Returns the element the next call to [`next`](Self::next) would
    /// produce, without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.next.map(|id| &self.set.arena.get(id).element)
    }

    /// Returns the element most recently produced by [`next`](Self::next),
    /// unless it has been removed.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.last.map(|id| &self.set.arena.get(id).element)
    }

    /// Removes the element most recently produced by [`next`](Self::next)
    /// and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::NoCurrentElement`] if `next` has not produced an
    /// element yet, or if that element was already removed. The set is not
    /// modified in that case.
    pub fn remove(&mut self) -> Result<T, SetError> {
        let id = self.last.take().ok_or(SetError::NoCurrentElement)?;
        let removed = self.set.unlink(id);
        trace!("cursor removed element, len {}", self.set.len);
        Ok(removed)
    }

    /// Returns the number of elements left in the set.
    #[must_use]
    pub const fn set_len(&self) -> usize {
        self.set.len
    }
}

impl<T> OrderedSet<T> {
    /// Retains only the elements for which `predicate` returns `true`,
    /// visiting them in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_set::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = (1..=6).collect();
    /// set.retain(|element| element % 2 == 0);
    /// assert_eq!(set.to_string(), "[2, 4, 6]");
    /// ```
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.cursor_mut();
        while let Some(element) = cursor.next() {
            if !predicate(element) {
                let removed = cursor.remove();
                debug_assert!(removed.is_ok(), "element was just produced");
            }
        }
    }
}
