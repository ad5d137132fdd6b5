//! A module containing [`ArrayList`] and associated types.
//!
//! Alongside the list itself, this module provides the borrowed ([`Iter`], [`IterMut`]) and owned
//! ([`IntoIter`]) iterators, as well as the detached [`Cursor`] for fail-fast bidirectional
//! traversal and modification.
//!
//! [`ArrayList`] is also re-exported under the parent module.

mod array_list;
mod cursor;
mod iter;

pub use array_list::*;
pub use cursor::*;
pub use iter::*;
