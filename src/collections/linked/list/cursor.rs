use std::mem;

use super::{LinkedList, Link};
use crate::collections::traits::ListCursor;
use crate::util::error::{ConcurrentModification, CursorError, IllegalState, NoSuchElement};

/// A detached, fail-fast cursor over a [`LinkedList`]. See [`ListCursor`] for the protocol.
///
/// Unlike indexing into a LinkedList, every step of a cursor is `O(1)`, including insertion and
/// removal. This is the main reason to pick a LinkedList in the first place.
///
/// # Examples
/// ```
/// # use list_lib::collections::linked::LinkedList;
/// # use list_lib::collections::traits::ListCursor;
/// let mut list = LinkedList::from(['a', 'c']);
/// let mut cursor = list.cursor();
/// cursor.next(&list)?;
/// cursor.insert(&mut list, 'b')?;
/// assert_eq!(cursor.next(&list)?, &'c');
/// assert_eq!(list, LinkedList::from(['a', 'b', 'c']));
/// # Ok::<(), list_lib::collections::error::CursorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    /// The node returned by the next call to `next`, or [`None`] at the end of the list.
    pub(crate) next: Link,
    pub(crate) next_index: usize,
    pub(crate) last_returned: Link,
    pub(crate) expected_mod_count: usize,
}

impl Cursor {
    pub(crate) const fn new(next: Link, next_index: usize, mod_count: usize) -> Cursor {
        Cursor {
            next,
            next_index,
            last_returned: None,
            expected_mod_count: mod_count,
        }
    }

    /// Returns the index of the element that `next` would return, which is the length of the
    /// list if the cursor is at the end.
    pub const fn next_index(&self) -> usize {
        self.next_index
    }

    /// Returns the index of the element that `previous` would return, or [`None`] if the cursor
    /// is at the start of the list.
    pub const fn previous_index(&self) -> Option<usize> {
        self.next_index.checked_sub(1)
    }

    const fn check_for_comodification<T>(
        &self,
        list: &LinkedList<T>,
    ) -> Result<(), ConcurrentModification> {
        if list.mod_count == self.expected_mod_count {
            Ok(())
        } else {
            Err(ConcurrentModification)
        }
    }
}

impl<T> ListCursor<LinkedList<T>> for Cursor {
    type Item = T;

    fn has_next(&self, list: &LinkedList<T>) -> bool {
        self.next_index < list.len()
    }

    fn next<'a>(&mut self, list: &'a LinkedList<T>) -> Result<&'a T, CursorError> {
        self.check_for_comodification(list)?;

        let handle = match self.next {
            Some(handle) if self.has_next(list) => handle,
            _ => return Err(NoSuchElement.into()),
        };
        let node = list.arena.node(handle);

        self.last_returned = Some(handle);
        self.next = node.next;
        self.next_index += 1;
        Ok(&node.value)
    }

    fn has_previous(&self, _list: &LinkedList<T>) -> bool {
        self.next_index > 0
    }

    fn previous<'a>(&mut self, list: &'a LinkedList<T>) -> Result<&'a T, CursorError> {
        self.check_for_comodification(list)?;

        if !self.has_previous(list) {
            return Err(NoSuchElement.into());
        }

        let handle = match self.next {
            Some(next) => list.arena.node(next).prev,
            None => list.state.tail(),
        }
        .ok_or(NoSuchElement)?;

        self.last_returned = Some(handle);
        self.next = Some(handle);
        self.next_index -= 1;
        Ok(&list.arena.node(handle).value)
    }

    fn set(&mut self, list: &mut LinkedList<T>, value: T) -> Result<T, CursorError> {
        let handle = self.last_returned.ok_or(IllegalState)?;
        self.check_for_comodification(list)?;

        Ok(mem::replace(&mut list.arena.node_mut(handle).value, value))
    }

    fn insert(&mut self, list: &mut LinkedList<T>, value: T) -> Result<(), CursorError> {
        self.check_for_comodification(list)?;

        match self.next {
            Some(succ) => list.try_link_before(value, succ)?,
            None => list.try_link_last(value)?,
        };

        self.last_returned = None;
        self.next_index += 1;
        self.expected_mod_count = list.mod_count;
        Ok(())
    }

    fn remove(&mut self, list: &mut LinkedList<T>) -> Result<T, CursorError> {
        let handle = self.last_returned.ok_or(IllegalState)?;
        self.check_for_comodification(list)?;

        let after = list.arena.node(handle).next;
        let value = list.unlink(handle);

        if self.next == Some(handle) {
            // Returned by previous, so the position was just before the removed node.
            self.next = after;
        } else {
            // Returned by next, so the removed node was before the position.
            self.next_index -= 1;
        }

        self.last_returned = None;
        self.expected_mod_count = list.mod_count;
        Ok(value)
    }
}
