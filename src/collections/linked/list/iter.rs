use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{Arena, LinkedList, Link, Slot};
use crate::util::option::OptionExtension;

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// An owned iterator over a [`LinkedList`].
pub struct IntoIter<T> {
    // Holding the list and polling either end is all this needs to do.
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.poll_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.poll_last()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            arena: &self.arena,
            head: self.state.head(),
            tail: self.state.tail(),
            len: self.len(),
        }
    }
}

/// A borrowed iterator over the elements of a [`LinkedList`].
pub struct Iter<'a, T> {
    // head and tail are the next nodes to yield from either end, len is the number of nodes left
    // between them (inclusive). The links are only followed while len is non-zero.
    pub(crate) arena: &'a Arena<T>,
    pub(crate) head: Link,
    pub(crate) tail: Link,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let node = self.arena.node(self.head.unreachable());
        self.head = node.next;
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let node = self.arena.node(self.tail.unreachable());
        self.tail = node.prev;
        self.len -= 1;
        Some(&node.value)
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            arena: self.arena,
            head: self.head,
            tail: self.tail,
            len: self.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let head = self.state.head();
        let tail = self.state.tail();
        let len = self.len();
        let slots = self.arena.slots.occupied_slots_mut();

        IterMut {
            slot_count: slots.len(),
            slots: slots.as_mut_ptr(),
            head,
            tail,
            len,
            _phantom: PhantomData,
        }
    }
}

/// A mutably borrowed iterator over the elements of a [`LinkedList`].
pub struct IterMut<'a, T> {
    // The same traversal as Iter, but over a pointer to the arena's slots so that references to
    // several distinct nodes can be handed out at once.
    pub(crate) slots: *mut Option<Slot<T>>,
    pub(crate) slot_count: usize,
    pub(crate) head: Link,
    pub(crate) tail: Link,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    /// Returns the node behind `link` with the full lifetime of the iterator.
    ///
    /// # Safety
    /// The node must not have been returned by this iterator before.
    unsafe fn node(&mut self, link: Link) -> (&'a mut T, Link, Link) {
        let index = link.unreachable().0;
        assert!(index < self.slot_count, "link outside of the arena");

        // SAFETY: index is in bounds of the slots borrowed for 'a. The list's links form a single
        // chain of distinct nodes and len stops both ends from walking past each other, so no
        // other reference to this slot exists.
        let slot = unsafe { &mut *self.slots.add(index) };
        match slot {
            Some(Slot::Occupied(node)) => (&mut node.value, node.prev, node.next),
            _ => unreachable!("link to a vacant slot"),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        // SAFETY: head hasn't been yielded yet, as len is non-zero.
        let (value, _, next) = unsafe { self.node(self.head) };
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        // SAFETY: tail hasn't been yielded yet, as len is non-zero.
        let (value, prev, _) = unsafe { self.node(self.tail) };
        self.tail = prev;
        self.len -= 1;
        Some(value)
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}
