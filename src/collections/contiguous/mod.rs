//! Contiguous collection types. Revolves around [`ArrayList`], with [`Stack`] built on top of it.

pub mod array_list;
pub mod stack;

#[doc(inline)]
pub use array_list::ArrayList;
#[doc(inline)]
pub use stack::Stack;
