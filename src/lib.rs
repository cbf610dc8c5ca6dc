//! # linked-set
//!
//! An ordered set of unique, totally-ordered elements kept in ascending order
//! inside a doubly-linked chain.
//!
//! ## Overview
//!
//! - **Ordered storage**: [`OrderedSet`](set::OrderedSet) keeps its elements
//!   sorted at all times, so iteration is ascending without any sorting step.
//! - **Set algebra**: union, intersection, complement and equality against
//!   any [`SetLike`](set::SetLike) collection.
//! - **Iteration**: ascending, descending, removal while iterating through a
//!   [`CursorMut`](set::CursorMut), and power-set enumeration.
//!
//! ## Feature Flags
//!
//! - `log` (default): emit `trace`/`debug` diagnostics through the `log`
//!   facade.
//!
//! ## Example
//!
//! ```rust
//! use linked_set::prelude::*;
//!
//! let mut set = OrderedSet::new();
//! set.insert(5);
//! set.insert(3);
//! set.insert(9);
//! set.insert(3);
//!
//! assert_eq!(set.len(), 3);
//! assert_eq!(set.to_string(), "[3, 5, 9]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

#[macro_use]
mod macros;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use linked_set::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::SetError;
    pub use crate::set::*;
}

pub mod error;
pub mod set;

pub use error::SetError;
pub use set::OrderedSet;
