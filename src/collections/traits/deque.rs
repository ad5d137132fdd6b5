use std::iter::Rev;

use super::Queue;
use crate::util::error::{Full, NoSuchElement};

/// A double-ended queue, supporting insertion, removal and inspection at both ends.
///
/// The [`Queue`] methods act on the deque as a FIFO queue: [`add`](Queue::add) and
/// [`offer`](Queue::offer) act on the last element, while [`remove`](Queue::remove),
/// [`poll`](Queue::poll), [`element`](Queue::element) and [`peek`](Queue::peek) act on the first.
/// [`push`](Deque::push) and [`pop`](Deque::pop) use the deque as a LIFO stack, with the first
/// element as its top.
pub trait Deque<T>: Queue<T> {
    /// A double ended iterator over the deque, from first to last.
    type Iter<'a>: DoubleEndedIterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Adds `value` to the front of the deque.
    ///
    /// # Panics
    /// Panics if the deque can't grow to hold another element.
    fn add_first(&mut self, value: T);

    /// Adds `value` to the back of the deque.
    ///
    /// # Panics
    /// Panics if the deque can't grow to hold another element.
    fn add_last(&mut self, value: T);

    /// Adds `value` to the front of the deque, handing it back if there is no room for it.
    fn offer_first(&mut self, value: T) -> Result<(), Full<T>>;

    /// Adds `value` to the back of the deque, handing it back if there is no room for it.
    fn offer_last(&mut self, value: T) -> Result<(), Full<T>>;

    fn remove_first(&mut self) -> Result<T, NoSuchElement>;

    fn remove_last(&mut self) -> Result<T, NoSuchElement>;

    fn poll_first(&mut self) -> Option<T>;

    fn poll_last(&mut self) -> Option<T>;

    fn get_first(&self) -> Result<&T, NoSuchElement>;

    fn get_last(&self) -> Result<&T, NoSuchElement>;

    fn peek_first(&self) -> Option<&T>;

    fn peek_last(&self) -> Option<&T>;

    /// Removes the first element equal to `item`, scanning from the front. Returns true if an
    /// element was removed.
    fn remove_first_occurrence(&mut self, item: &T) -> bool
    where
        T: PartialEq;

    /// Removes the last element equal to `item`, scanning from the back. Returns true if an
    /// element was removed.
    fn remove_last_occurrence(&mut self, item: &T) -> bool
    where
        T: PartialEq;

    /// Pushes `value` onto the stack represented by this deque. Equivalent to
    /// [`add_first`](Deque::add_first).
    fn push(&mut self, value: T) {
        self.add_first(value);
    }

    /// Pops the top of the stack represented by this deque. Equivalent to
    /// [`remove_first`](Deque::remove_first).
    fn pop(&mut self) -> Result<T, NoSuchElement> {
        self.remove_first()
    }

    /// Returns an iterator over the deque from first to last.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns an iterator over the deque from last to first.
    fn descending_iter(&self) -> Rev<Self::Iter<'_>> {
        self.iter().rev()
    }
}
