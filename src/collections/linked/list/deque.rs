use super::{Iter, LinkedList};
use crate::collections::traits::{Deque, Queue};
use crate::util::error::{Full, NoSuchElement};

impl<T> Queue<T> for LinkedList<T> {
    fn add(&mut self, value: T) {
        self.add_last(value);
    }

    fn offer(&mut self, value: T) -> Result<(), Full<T>> {
        self.offer_last(value)
    }

    fn remove(&mut self) -> Result<T, NoSuchElement> {
        self.remove_first()
    }

    fn poll(&mut self) -> Option<T> {
        self.poll_first()
    }

    fn element(&self) -> Result<&T, NoSuchElement> {
        self.get_first()
    }

    fn peek(&self) -> Option<&T> {
        self.peek_first()
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

impl<T> Deque<T> for LinkedList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    fn add_first(&mut self, value: T) {
        LinkedList::add_first(self, value);
    }

    fn add_last(&mut self, value: T) {
        LinkedList::add_last(self, value);
    }

    fn offer_first(&mut self, value: T) -> Result<(), Full<T>> {
        LinkedList::offer_first(self, value)
    }

    fn offer_last(&mut self, value: T) -> Result<(), Full<T>> {
        LinkedList::offer_last(self, value)
    }

    fn remove_first(&mut self) -> Result<T, NoSuchElement> {
        LinkedList::remove_first(self)
    }

    fn remove_last(&mut self) -> Result<T, NoSuchElement> {
        LinkedList::remove_last(self)
    }

    fn poll_first(&mut self) -> Option<T> {
        LinkedList::poll_first(self)
    }

    fn poll_last(&mut self) -> Option<T> {
        LinkedList::poll_last(self)
    }

    fn get_first(&self) -> Result<&T, NoSuchElement> {
        LinkedList::get_first(self)
    }

    fn get_last(&self) -> Result<&T, NoSuchElement> {
        LinkedList::get_last(self)
    }

    fn peek_first(&self) -> Option<&T> {
        LinkedList::peek_first(self)
    }

    fn peek_last(&self) -> Option<&T> {
        LinkedList::peek_last(self)
    }

    fn remove_first_occurrence(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        LinkedList::remove_first_occurrence(self, item)
    }

    fn remove_last_occurrence(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        LinkedList::remove_last_occurrence(self, item)
    }

    fn iter(&self) -> Self::Iter<'_> {
        LinkedList::iter(self)
    }
}
