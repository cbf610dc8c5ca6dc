//! Ordered set backed by a doubly-linked chain.
//!
//! This module provides [`OrderedSet`], a mutable set of unique elements kept
//! in ascending order, together with its iterators:
//!
//! - [`Iter`]: ascending (and, reversed, descending) borrowing iterator
//! - [`IntoIter`]: owning iterator
//! - [`CursorMut`]: ascending cursor that can remove the element it produced
//! - [`PowerSet`]: every subset of the set
//!
//! Set algebra accepts any [`SetLike`] collection, so an `OrderedSet` can be
//! combined with a `BTreeSet` or a `HashSet` as easily as with another
//! `OrderedSet`.
//!
//! # Chain Layout
//!
//! ```text
//!   front                                      rear
//!     │                                          │
//!     ▼                                          ▼
//!   ┌───┐  next  ┌───┐  next  ┌───┐  next  ┌───┐
//!   │ 1 │ ─────► │ 3 │ ─────► │ 5 │ ─────► │ 9 │
//!   │   │ ◄───── │   │ ◄───── │   │ ◄───── │   │
//!   └───┘  prev  └───┘  prev  └───┘  prev  └───┘
//! ```
//!
//! Nodes live in a slot arena owned by the set and refer to their neighbours
//! by slot index. Removed nodes return their slot to a free list.
//!
//! # Examples
//!
//! ```rust
//! use linked_set::set::OrderedSet;
//!
//! let left: OrderedSet<i32> = [1, 2].into_iter().collect();
//! let right: OrderedSet<i32> = [2, 3].into_iter().collect();
//!
//! assert_eq!((&left | &right).to_string(), "[1, 2, 3]");
//! assert_eq!((&left & &right).to_string(), "[2]");
//! assert_eq!((&left - &right).to_string(), "[1]");
//! ```

mod arena;
mod cursor;
mod iter;
mod ordered_set;
mod power_set;
mod set_like;

pub use cursor::CursorMut;
pub use iter::IntoIter;
pub use iter::Iter;
pub use ordered_set::OrderedSet;
pub use power_set::PowerSet;
pub use set_like::SetLike;
