//! A module containing [`LinkedList`] and associated types.
//!
//! Alongside the list, this module provides its iterators and the detached [`Cursor`]. The list
//! also implements [`Queue`](crate::collections::traits::Queue) and
//! [`Deque`](crate::collections::traits::Deque).

mod cursor;
mod deque;
mod iter;
mod length;
mod linked_list;
mod node;
mod tests;

pub use cursor::*;
pub use iter::*;
pub(crate) use length::*;
pub use linked_list::*;
pub(crate) use node::*;
