//! Error types shared by all collections in this crate.
//!
//! Each failure is a small struct (usually a ZST) with its own [`Display`] message. Methods that
//! can fail in more than one way return one of the enums at the bottom of this module, which
//! derive [`From`](derive_more::From) so that `?` lifts the individual errors into them.

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the valid range for the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The rejected index.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// Growing the collection would require a capacity that can't be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// A throwing accessor was used on an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSuchElement;

impl Display for NoSuchElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No such element!")
    }
}

impl Error for NoSuchElement {}

/// [`Stack::pop`](crate::collections::contiguous::Stack::pop) or
/// [`Stack::peek`](crate::collections::contiguous::Stack::peek) was called on an empty stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStack;

impl Display for EmptyStack {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Attempted to access the top of an empty stack!")
    }
}

impl Error for EmptyStack {}

/// A list was structurally modified without going through the cursor that detected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcurrentModification;

impl Display for ConcurrentModification {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "List was modified outside of the cursor traversing it!")
    }
}

impl Error for ConcurrentModification {}

/// A cursor was asked to modify the element it last returned, but it hasn't returned one since
/// it was created or last changed the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalState;

impl Display for IllegalState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor has no last returned element to modify!")
    }
}

impl Error for IllegalState {}

/// A range argument was inverted or reached past the end of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRange {
    /// The inclusive start of the range.
    pub start: usize,
    /// The exclusive end of the range.
    pub end: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

impl Display for InvalidRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range {}..{} is invalid for collection with {} elements!",
            self.start, self.end, self.len,
        )
    }
}

impl Error for InvalidRange {}

/// Returned by the non-panicking `offer` methods when the value couldn't be added. Holds the
/// rejected value so that it isn't lost.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Debug for Full<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Full(..)")
    }
}

impl<T> Display for Full<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Collection is at capacity!")
    }
}

impl<T> Error for Full<T> {}

/// Returned by insertions, which can fail on the index or on the growth needed to fit the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum IndexOrCapOverflow {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
}

/// Every way in which a [`ListCursor`](crate::collections::traits::ListCursor) step can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum CursorError {
    /// The cursor stepped past either end of the list.
    NoSuchElement(NoSuchElement),
    /// The list changed behind the cursor's back.
    ConcurrentModification(ConcurrentModification),
    /// There was no last returned element to set or remove.
    IllegalState(IllegalState),
    /// An insertion couldn't grow the list.
    CapacityOverflow(CapacityOverflow),
}
