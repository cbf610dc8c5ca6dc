//! Error types for [`OrderedSet`](crate::set::OrderedSet) operations.
//!
//! Every fallible operation validates its input before touching the chain,
//! so a returned error always means the set is unchanged.

/// Represents errors that can occur when using an
/// [`OrderedSet`](crate::set::OrderedSet).
///
/// # Examples
///
/// ```rust
/// use linked_set::{OrderedSet, SetError};
///
/// let mut set: OrderedSet<i32> = OrderedSet::new();
/// let error = set.try_insert(None).unwrap_err();
///
/// assert_eq!(error, SetError::AbsentElement { operation: "try_insert" });
/// assert_eq!(
///     format!("{error}"),
///     "try_insert: absent elements cannot be stored in an ordered set"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    /// An absent element was passed to a mutating operation.
    AbsentElement {
        /// The name of the operation that rejected the element.
        operation: &'static str,
    },
    /// A cursor was asked to remove an element it has not produced, or has
    /// already removed.
    NoCurrentElement,
    /// The power set has more members than `usize` can index.
    PowerSetOverflow {
        /// The length of the set whose power set was requested.
        len: usize,
    },
}

impl std::fmt::Display for SetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AbsentElement { operation } => write!(
                formatter,
                "{operation}: absent elements cannot be stored in an ordered set"
            ),
            Self::NoCurrentElement => write!(
                formatter,
                "cursor has no current element: call next() before remove()"
            ),
            Self::PowerSetOverflow { len } => write!(
                formatter,
                "power set of {len} elements has more than usize::MAX members"
            ),
        }
    }
}

impl std::error::Error for SetError {}

static_assertions::assert_impl_all!(SetError: std::error::Error, Send, Sync, Clone);
