use crate::util::error::CursorError;

/// A bidirectional, fail-fast cursor over a list of type `L`.
///
/// Cursors are detached from their list: instead of holding a borrow, every step takes the list
/// as an argument. This means that the list can be modified between two steps, which is exactly
/// what the cursor is there to catch. Each list keeps a modification count that is bumped by every
/// structural change (anything that adds or removes elements). A cursor remembers the count it
/// last saw and reports [`ConcurrentModification`](crate::collections::error::ConcurrentModification)
/// as soon as it notices a change it didn't make itself.
///
/// The position of a cursor always lies between two elements (or before the first / after the
/// last one). [`next`](ListCursor::next) returns the element after the position and moves past
/// it, [`previous`](ListCursor::previous) does the same in the other direction.
///
/// A cursor must only be used with the list that created it. Using it with a different list
/// won't cause undefined behavior, but the results are meaningless and may panic.
///
/// This is a single-threaded safety net, not a correctness guarantee.
///
/// The position itself is exposed by inherent `next_index` and `previous_index` methods on each
/// cursor type, since those don't need the list.
pub trait ListCursor<L: ?Sized> {
    /// The type of element stored in the list.
    type Item;

    /// Returns true if there is an element after the cursor's position.
    fn has_next(&self, list: &L) -> bool;

    /// Returns the element after the cursor and moves the cursor past it.
    ///
    /// # Errors
    /// - `ConcurrentModification` if the list was structurally modified by anything other than
    ///   this cursor since the cursor last synchronized with it.
    /// - `NoSuchElement` if the cursor is already at the end of the list.
    fn next<'a>(&mut self, list: &'a L) -> Result<&'a Self::Item, CursorError>;

    /// Returns true if there is an element before the cursor's position.
    fn has_previous(&self, list: &L) -> bool;

    /// Returns the element before the cursor and moves the cursor back past it.
    ///
    /// # Errors
    /// The same as [`next`](ListCursor::next), at the start of the list rather than the end.
    fn previous<'a>(&mut self, list: &'a L) -> Result<&'a Self::Item, CursorError>;

    /// Replaces the element last returned by [`next`](ListCursor::next) or
    /// [`previous`](ListCursor::previous), returning the old value. This isn't a structural
    /// modification.
    ///
    /// # Errors
    /// - `IllegalState` if no element has been returned since the cursor was created or last
    ///   inserted or removed an element.
    /// - `ConcurrentModification` as for [`next`](ListCursor::next).
    fn set(&mut self, list: &mut L, value: Self::Item) -> Result<Self::Item, CursorError>;

    /// Inserts `value` immediately before the element that [`next`](ListCursor::next) would
    /// return and moves the cursor past it, so a following call to `next` is unaffected while a
    /// call to [`previous`](ListCursor::previous) returns the new element.
    ///
    /// # Errors
    /// - `ConcurrentModification` as for [`next`](ListCursor::next).
    /// - `CapacityOverflow` if the list can't grow to hold the new element.
    fn insert(&mut self, list: &mut L, value: Self::Item) -> Result<(), CursorError>;

    /// Removes the element last returned by [`next`](ListCursor::next) or
    /// [`previous`](ListCursor::previous) and returns it. The cursor stays valid afterwards.
    ///
    /// # Errors
    /// The same as [`set`](ListCursor::set).
    fn remove(&mut self, list: &mut L) -> Result<Self::Item, CursorError>;
}

/// An adapter which walks a [`ListCursor`] backwards: `next` calls the inner cursor's
/// `previous`. Create one over a cursor that is positioned at the end of its list to iterate the
/// list in descending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescendingCursor<C> {
    pub(crate) inner: C,
}

impl<C> DescendingCursor<C> {
    pub const fn new(inner: C) -> DescendingCursor<C> {
        DescendingCursor { inner }
    }

    pub fn has_next<L: ?Sized>(&self, list: &L) -> bool
    where
        C: ListCursor<L>,
    {
        self.inner.has_previous(list)
    }

    pub fn next<'a, L: ?Sized>(
        &mut self,
        list: &'a L,
    ) -> Result<&'a <C as ListCursor<L>>::Item, CursorError>
    where
        C: ListCursor<L>,
    {
        self.inner.previous(list)
    }

    pub fn remove<L: ?Sized>(&mut self, list: &mut L) -> Result<<C as ListCursor<L>>::Item, CursorError>
    where
        C: ListCursor<L>,
    {
        self.inner.remove(list)
    }

    /// Returns the wrapped cursor, at whatever position this adapter left it.
    pub fn into_inner(self) -> C {
        self.inner
    }
}
