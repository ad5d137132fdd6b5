//! A module containing [`Stack`], a LIFO adapter over [`ArrayList`](super::ArrayList).

mod stack;
mod tests;

pub use stack::*;
