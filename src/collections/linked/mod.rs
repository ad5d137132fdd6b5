//! Linked collection types. Primarily revolves around [`LinkedList`] and its accompanying
//! [`Cursor`] type.

pub mod list;

#[doc(inline)]
pub use list::{Cursor, LinkedList};
