use crate::util::error::{Full, NoSuchElement};

/// A first-in first-out collection.
///
/// Each operation comes in two forms: one that reports failure with an error and one that reports
/// it with an absent result. Insertion happens at the tail, while removal and inspection happen at
/// the head.
///
/// | | Error form | Absent-result form |
/// |-|-|-|
/// | Insert | [`add`](Queue::add) | [`offer`](Queue::offer) |
/// | Remove | [`remove`](Queue::remove) | [`poll`](Queue::poll) |
/// | Inspect | [`element`](Queue::element) | [`peek`](Queue::peek) |
pub trait Queue<T> {
    /// Adds `value` to the tail of the queue.
    ///
    /// # Panics
    /// Panics if the queue can't grow to hold another element.
    fn add(&mut self, value: T);

    /// Adds `value` to the tail of the queue, handing it back inside [`Full`] if the queue can't
    /// grow to hold it.
    fn offer(&mut self, value: T) -> Result<(), Full<T>>;

    /// Removes and returns the head of the queue.
    fn remove(&mut self) -> Result<T, NoSuchElement>;

    /// Removes and returns the head of the queue, or [`None`] if it is empty.
    fn poll(&mut self) -> Option<T>;

    /// Returns a reference to the head of the queue without removing it.
    fn element(&self) -> Result<&T, NoSuchElement>;

    /// Returns a reference to the head of the queue without removing it, or [`None`] if it is
    /// empty.
    fn peek(&self) -> Option<&T>;

    /// Returns the number of elements in the queue.
    fn len(&self) -> usize;

    /// Returns true if the queue contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
