//! Traits describing capabilities that collections can share.
//!
//! [`Queue`] and [`Deque`] are capability sets in the style of a collections framework's queue
//! interfaces. [`ListCursor`] is the shared shape of the detached, fail-fast cursors handed out by
//! each list type.

pub mod cursor;
pub mod deque;
pub mod queue;

#[doc(inline)]
pub use cursor::*;
#[doc(inline)]
pub use deque::*;
#[doc(inline)]
pub use queue::*;
