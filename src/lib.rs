//! This crate is my attempt at writing the list-shaped parts of a collections framework by hand:
//! a growable array list, a doubly linked list, a stack on top of the array list and the
//! queue / deque interfaces that the linked list satisfies.
//!
//! # Purpose
//! This is a learning project, with no expectation for it to be used in production. Each type
//! reproduces the behavior of a well known standard collection, including the less obvious parts:
//! the capacity growth policy, index shifting, fail-fast iteration and the split between
//! throwing and "absent result" accessors.
//!
//! # Method
//! Containers are generic over any `T`. There is no special null value; an absent element is
//! stored as [`None`] in a list of [`Option<T>`], and every search uses [`PartialEq`], under which
//! two `None`s are equal and `None` never equals a `Some`.
//!
//! Iteration comes in two flavours. The usual borrowing iterators ([`iter`](
//! collections::contiguous::ArrayList::iter), [`iter_mut`](
//! collections::contiguous::ArrayList::iter_mut), [`IntoIterator`]) are checked by the borrow
//! checker. Alongside them, each list hands out detached cursors (see
//! [`ListCursor`](collections::traits::ListCursor)) which take the list as an argument on every
//! step. Because a cursor doesn't hold a borrow, the list can be modified behind its back, which
//! the cursor detects with a modification counter and reports as
//! [`ConcurrentModification`](collections::error::ConcurrentModification).
//!
//! # Error Handling
//! Index based methods come in pairs: one that panics with the error's message and a `try_`
//! variant returning a [`Result`]. Methods that fail on an empty collection return a [`Result`]
//! (the throwing form) or an [`Option`] (the absent-result form) directly. Capacity overflow
//! panics in the infallible growth paths, since nobody wants to handle that every time they push.
//!
//! All errors are strongly typed: structs (mostly ZSTs) that implement
//! [`Error`](std::error::Error), combined into enums for static dispatch where a method can fail
//! in more than one way.
//!
//! # Thread Safety
//! None of these containers synchronize anything. The fail-fast checks are a single-threaded
//! safety net, not a guarantee under concurrent mutation.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
