//! Power-set enumeration.

use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::OrderedSet;
use crate::error::SetError;

/// Sets up to this length enumerate without allocating the element table.
const INLINE_ELEMENTS: usize = 16;

/// An iterator over every subset of an [`OrderedSet`].
///
/// This `struct` is created by [`OrderedSet::power_set`]. It yields exactly
/// `2^n` sets for a set of `n` elements. Member `i` contains the element at
/// ascending position `j` exactly when bit `j` of `i` is set, so the first
/// member is the empty set and the last one is a copy of the whole set.
/// Callers should not rely on any particular order of members.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct PowerSet<'a, T> {
    elements: SmallVec<[&'a T; INLINE_ELEMENTS]>,
    next_index: usize,
    end: usize,
}

impl<'a, T: Ord + Clone> PowerSet<'a, T> {
    fn new(set: &'a OrderedSet<T>) -> Result<Self, SetError> {
        let len = set.len();
        let end = u32::try_from(len)
            .ok()
            .and_then(|shift| 1_usize.checked_shl(shift))
            .ok_or(SetError::PowerSetOverflow { len })?;
        debug!("enumerating {end} subsets of a {len} element set");
        Ok(Self {
            elements: set.iter().collect(),
            next_index: 0,
            end,
        })
    }

    fn subset(&self, index: usize) -> OrderedSet<T> {
        OrderedSet::from_ascending(
            self.elements
                .iter()
                .enumerate()
                .filter(|(position, _)| (index >> position) & 1 == 1)
                .map(|(_, element)| (*element).clone()),
        )
    }
}

impl<T: Ord + Clone> Iterator for PowerSet<'_, T> {
    type Item = OrderedSet<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index == self.end {
            return None;
        }
        let subset = self.subset(self.next_index);
        self.next_index += 1;
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next_index;
        (remaining, Some(remaining))
    }
}

impl<T: Ord + Clone> DoubleEndedIterator for PowerSet<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next_index == self.end {
            return None;
        }
        self.end -= 1;
        Some(self.subset(self.end))
    }
}

impl<T: Ord + Clone> ExactSizeIterator for PowerSet<'_, T> {}

impl<T: Ord + Clone> FusedIterator for PowerSet<'_, T> {}

impl<T: Ord + Clone> OrderedSet<T> {
    /// Returns an iterator over every subset of this set, including the
    /// empty set and the set itself.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::PowerSetOverflow`] if `2^len` does not fit in a
    /// `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
    /// let members: Vec<String> = set
    ///     .power_set()
    ///     .unwrap()
    ///     .map(|member| member.to_string())
    ///     .collect();
    ///
    /// assert_eq!(members.len(), 8);
    /// assert!(members.contains(&"[]".to_string()));
    /// assert!(members.contains(&"[1, 3]".to_string()));
    /// assert!(members.contains(&"[1, 2, 3]".to_string()));
    /// ```
    pub fn power_set(&self) -> Result<PowerSet<'_, T>, SetError> {
        PowerSet::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 2)]
    #[case(3, 8)]
    #[case(5, 32)]
    fn test_power_set_has_two_to_the_n_members(#[case] len: i32, #[case] expected: usize) {
        let set: OrderedSet<i32> = (0..len).collect();
        let power_set = set.power_set().unwrap();
        assert_eq!(power_set.len(), expected);
        assert_eq!(power_set.count(), expected);
    }

    #[rstest]
    fn test_member_index_selects_elements_by_bit() {
        let set: OrderedSet<i32> = [10, 20, 30].into_iter().collect();
        let members: Vec<Vec<i32>> = set
            .power_set()
            .unwrap()
            .map(|member| member.into_iter().collect())
            .collect();

        assert_eq!(
            members,
            vec![
                vec![],
                vec![10],
                vec![20],
                vec![10, 20],
                vec![30],
                vec![10, 30],
                vec![20, 30],
                vec![10, 20, 30],
            ]
        );
    }

    #[rstest]
    fn test_members_hold_chain_invariants() {
        let set: OrderedSet<i32> = [4, 2, 8, 6].into_iter().collect();
        for member in set.power_set().unwrap() {
            member.assert_chain_invariants();
            assert!(member.is_subset(&set));
        }
    }

    #[rstest]
    fn test_power_set_from_both_ends() {
        let set: OrderedSet<i32> = [1, 2].into_iter().collect();
        let mut power_set = set.power_set().unwrap();

        assert_eq!(power_set.next_back().map(|member| member.len()), Some(2));
        assert_eq!(power_set.next().map(|member| member.len()), Some(0));
        assert_eq!(power_set.len(), 2);
        assert_eq!(power_set.by_ref().count(), 2);
        assert!(power_set.next_back().is_none());
    }

    #[rstest]
    fn test_power_set_overflow_is_reported() {
        let set: OrderedSet<u32> = (0..usize::BITS).collect();
        let error = set.power_set().unwrap_err();
        assert_eq!(
            error,
            SetError::PowerSetOverflow {
                len: usize::BITS as usize
            }
        );
    }
}
