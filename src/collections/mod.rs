//! Various list-shaped collection types.
//!
//! # Purpose
//! I wrote these types to learn about each of the data structures themselves, but also about the
//! contracts around them: growth policies, fail-fast iteration and the difference between methods
//! that throw on an empty collection and ones that return an absent result.
//!
//! # Method
//! [`ArrayList`](contiguous::ArrayList) and [`LinkedList`](linked::LinkedList) share a cursor
//! protocol, [`ListCursor`](traits::ListCursor). [`Stack`](contiguous::Stack) is composed over an
//! ArrayList rather than extending it, and LinkedList implements [`Queue`](traits::Queue) and
//! [`Deque`](traits::Deque) directly, since it has `O(1)` access to both ends.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;

#[doc(inline)]
pub use crate::util::error;
