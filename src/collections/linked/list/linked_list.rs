use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::Rev;
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Arena, Cursor, Iter, IterMut, Length, Link, Node, NodeHandle, ONE};
use crate::collections::traits::DescendingCursor;
use crate::util::error;
#[doc(inline)]
pub use crate::util::error::{
    CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds, NoSuchElement,
};
use crate::util::fmt::{DebugEntries, display_list};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in both directions. See also: [`Cursor`] for fail-fast bi-directional
/// traversal and modification.
///
/// Nodes are kept in an arena owned by the list and refer to each other by handle rather than by
/// pointer, so relinking is just a matter of updating a few indices.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being added.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `peek/get_first/last` | `O(1)` |
/// | `add_first/last` | `O(1)`* |
/// | `poll/remove_first/last` | `O(1)` |
/// | `get` / `set` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove_at` | `O(min(i, n-i))` |
/// | `insert_all` | `O(min(i, n-i)+m)` |
/// | `remove_first/last_occurrence` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// \* Amortized, as the arena occasionally grows.
///
/// As a general note, modern computer architecture isn't kind to linked lists, (or more
/// importantly, favours contiguous collections) because all `O(i)` or `O(n)` operations will
/// consist primarily of cache misses. For this reason,
/// [`ArrayList`](crate::collections::contiguous::ArrayList) should be preferred for most
/// applications unless the `O(1)` operations at both ends or through a [`Cursor`] are being
/// heavily utilized.
pub struct LinkedList<T> {
    pub(crate) state: ListState,
    pub(crate) arena: Arena<T>,
    pub(crate) mod_count: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum ListState {
    #[default]
    Empty,
    Full(ListContents),
}

use ListState::*;

/// The ends of a non-empty list. A list is either empty or has both a head and a tail, which
/// rules out half-linked states entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListContents {
    pub len: Length,
    pub head: NodeHandle,
    pub tail: NodeHandle,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            arena: Arena::new(),
            mod_count: 0,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns the number of structural modifications made to this LinkedList so far.
    pub const fn mod_count(&self) -> usize {
        self.mod_count
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn peek_first(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(&self.arena.node(head).value),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn peek_last(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(&self.arena.node(tail).value),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn peek_first_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(&mut self.arena.node_mut(head).value),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn peek_last_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(&mut self.arena.node_mut(tail).value),
        }
    }

    /// Returns a reference to the first element in the list, or an [`Err`] if it is empty.
    pub fn get_first(&self) -> Result<&T, NoSuchElement> {
        self.peek_first().ok_or(NoSuchElement)
    }

    /// Returns a reference to the last element in the list, or an [`Err`] if it is empty.
    pub fn get_last(&self) -> Result<&T, NoSuchElement> {
        self.peek_last().ok_or(NoSuchElement)
    }

    /// Add the provided element to the front of the LinkedList.
    ///
    /// # Panics
    /// Panics if the list can't grow to hold another element.
    pub fn add_first(&mut self, value: T) {
        self.try_link_first(value).throw();
    }

    /// Add the provided element to the back of the LinkedList.
    ///
    /// # Panics
    /// Panics if the list can't grow to hold another element.
    pub fn add_last(&mut self, value: T) {
        self.try_link_last(value).throw();
    }

    /// Add the provided element to the front of the LinkedList, handing it back if the list can't
    /// grow to hold it.
    pub fn offer_first(&mut self, value: T) -> Result<(), error::Full<T>> {
        if self.has_room() {
            self.add_first(value);
            Ok(())
        } else {
            Err(error::Full(value))
        }
    }

    /// Add the provided element to the back of the LinkedList, handing it back if the list can't
    /// grow to hold it.
    pub fn offer_last(&mut self, value: T) -> Result<(), error::Full<T>> {
        if self.has_room() {
            self.add_last(value);
            Ok(())
        } else {
            Err(error::Full(value))
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn poll_first(&mut self) -> Option<T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(self.unlink(head)),
        }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn poll_last(&mut self) -> Option<T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(self.unlink(tail)),
        }
    }

    /// Removes the first element from the list and returns it, or an [`Err`] if the list is
    /// empty.
    pub fn remove_first(&mut self) -> Result<T, NoSuchElement> {
        self.poll_first().ok_or(NoSuchElement)
    }

    /// Removes the last element from the list and returns it, or an [`Err`] if the list is empty.
    pub fn remove_last(&mut self) -> Result<T, NoSuchElement> {
        self.poll_last().ok_or(NoSuchElement)
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The node is found by walking from whichever end of the list is closer to `index`.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(&self.arena.node(self.checked_seek(index)?).value)
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let handle = self.checked_seek(index)?;
        Ok(&mut self.arena.node_mut(handle).value)
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value. This
    /// isn't a structural modification.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn set(&mut self, index: usize, new_value: T) -> T {
        self.try_set(index, new_value).throw()
    }

    pub fn try_set(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, new_value))
    }

    /// Inserts `value` so that it ends up at `index`. Inserting at `len` adds to the back.
    ///
    /// # Panics
    /// Panics if `index > len` or the list can't grow to hold another element.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        match self.checked_successor(index)? {
            Some(succ) => self.try_link_before(value, succ)?,
            None => self.try_link_last(value)?,
        };
        Ok(())
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn remove_at(&mut self, index: usize) -> T {
        self.try_remove_at(index).throw()
    }

    pub fn try_remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let handle = self.checked_seek(index)?;
        Ok(self.unlink(handle))
    }

    /// Appends every element produced by `iter` to the back of the list, in order. Returns true
    /// if any elements were added.
    ///
    /// # Panics
    /// Panics if the list can't grow to hold the new elements.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, iter: I) -> bool {
        self.insert_all(self.len(), iter)
    }

    /// Splices every element produced by `iter` into the list as a contiguous run starting at
    /// `index`, preserving the order of the source. Returns true if any elements were added.
    ///
    /// # Panics
    /// Panics if `index > len` or the list can't grow to hold the new elements.
    ///
    /// # Examples
    /// ```
    /// # use list_lib::collections::linked::LinkedList;
    /// let mut list = LinkedList::from([1, 5]);
    /// assert!(list.insert_all(1, [2, 3, 4]));
    /// assert_eq!(list, LinkedList::from([1, 2, 3, 4, 5]));
    /// ```
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, index: usize, iter: I) -> bool {
        self.try_insert_all(index, iter).throw()
    }

    /// Splices the elements of `iter` in at `index`, returning an [`Err`] rather than panicking.
    ///
    /// If the list runs out of room part way through, the elements that were already added stay
    /// in place as a contiguous run and the rest of the source is dropped.
    pub fn try_insert_all<I: IntoIterator<Item = T>>(
        &mut self,
        index: usize,
        iter: I,
    ) -> Result<bool, IndexOrCapOverflow> {
        let succ = self.checked_successor(index)?;

        let mut added = false;
        for value in iter {
            // Linking each value in front of the same successor keeps them in source order.
            match succ {
                Some(succ) => self.try_link_before(value, succ)?,
                None => self.try_link_last(value)?,
            };
            added = true;
        }

        Ok(added)
    }

    /// Removes the first element equal to `item`, scanning from the front. Returns true if an
    /// element was removed.
    pub fn remove_first_occurrence(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let mut curr = self.state.head();
        while let Some(handle) = curr {
            let node = self.arena.node(handle);
            if node.value == *item {
                self.unlink(handle);
                return true;
            }
            curr = node.next;
        }
        false
    }

    /// Removes the last element equal to `item`, scanning from the back. Returns true if an
    /// element was removed.
    pub fn remove_last_occurrence(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let mut curr = self.state.tail();
        while let Some(handle) = curr {
            let node = self.arena.node(handle);
            if node.value == *item {
                self.unlink(handle);
                return true;
            }
            curr = node.prev;
        }
        false
    }

    /// An alias for [`remove_first_occurrence`](LinkedList::remove_first_occurrence).
    pub fn remove_item(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_first_occurrence(item)
    }

    /// Drops every element in the list.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.state = Empty;
        self.mod_count += 1;
    }

    /// Returns a boxed slice holding clones of all elements, from first to last.
    pub fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns a cursor positioned before the first element.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.state.head(), 0, self.mod_count)
    }

    /// Returns a cursor positioned before the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the list.
    pub fn cursor_at(&self, index: usize) -> Cursor {
        self.try_cursor_at(index).throw()
    }

    pub fn try_cursor_at(&self, index: usize) -> Result<Cursor, IndexOutOfBounds> {
        Ok(Cursor::new(self.checked_successor(index)?, index, self.mod_count))
    }

    /// Returns a cursor which walks the list from back to front, by driving a cursor positioned
    /// at the end of the list backwards.
    pub fn descending_cursor(&self) -> DescendingCursor<Cursor> {
        DescendingCursor::new(Cursor::new(None, self.len(), self.mod_count))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over the list from last to first.
    pub fn descending_iter(&self) -> Rev<Iter<'_, T>> {
        self.iter().rev()
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn last_index_of(&self, item: &T) -> Option<usize> {
        self.iter().rposition(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T> LinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeHandle, IndexOutOfBounds> {
        match self.state {
            Full(contents) if index < contents.len.get() => Ok(contents.seek(&self.arena, index)),
            state => Err(IndexOutOfBounds {
                index,
                len: state.len(),
            }),
        }
    }

    /// Finds the node that will follow an element inserted at `index`, which is [`None`] when
    /// inserting at the end of the list.
    pub(crate) fn checked_successor(&self, index: usize) -> Result<Link, IndexOutOfBounds> {
        if index == self.len() {
            Ok(None)
        } else {
            Ok(Some(self.checked_seek(index)?))
        }
    }

    /// Returns true if the next node can be linked without running out of room.
    pub(crate) fn has_room(&mut self) -> bool {
        self.state.len().checked_add(1).is_some() && self.arena.try_reserve_one().is_ok()
    }

    pub(crate) fn try_link_first(&mut self, value: T) -> Result<NodeHandle, CapacityOverflow> {
        let handle = match &mut self.state {
            Empty => {
                let handle = self.arena.try_alloc(Node {
                    value,
                    prev: None,
                    next: None,
                })?;
                self.state = ListState::single(handle);
                handle
            },
            Full(contents) => {
                let len = contents.len.checked_add(1).ok_or(CapacityOverflow)?;
                let handle = self.arena.try_alloc(Node {
                    value,
                    prev: None,
                    next: Some(contents.head),
                })?;

                self.arena.node_mut(contents.head).prev = Some(handle);
                contents.head = handle;
                contents.len = len;
                handle
            },
        };

        self.mod_count += 1;
        Ok(handle)
    }

    pub(crate) fn try_link_last(&mut self, value: T) -> Result<NodeHandle, CapacityOverflow> {
        let handle = match &mut self.state {
            Empty => {
                let handle = self.arena.try_alloc(Node {
                    value,
                    prev: None,
                    next: None,
                })?;
                self.state = ListState::single(handle);
                handle
            },
            Full(contents) => {
                let len = contents.len.checked_add(1).ok_or(CapacityOverflow)?;
                let handle = self.arena.try_alloc(Node {
                    value,
                    prev: Some(contents.tail),
                    next: None,
                })?;

                self.arena.node_mut(contents.tail).next = Some(handle);
                contents.tail = handle;
                contents.len = len;
                handle
            },
        };

        self.mod_count += 1;
        Ok(handle)
    }

    /// Links `value` in immediately before `succ`, which must be a node of this list.
    pub(crate) fn try_link_before(
        &mut self,
        value: T,
        succ: NodeHandle,
    ) -> Result<NodeHandle, CapacityOverflow> {
        let Full(contents) = &mut self.state else {
            unreachable!("successor node in an empty list")
        };

        let len = contents.len.checked_add(1).ok_or(CapacityOverflow)?;
        let pred = self.arena.node(succ).prev;
        let handle = self.arena.try_alloc(Node {
            value,
            prev: pred,
            next: Some(succ),
        })?;

        self.arena.node_mut(succ).prev = Some(handle);
        match pred {
            Some(pred) => self.arena.node_mut(pred).next = Some(handle),
            None => contents.head = handle,
        }
        contents.len = len;

        self.mod_count += 1;
        Ok(handle)
    }

    /// Unlinks the node behind `handle`, which must belong to this list, and returns its value.
    pub(crate) fn unlink(&mut self, handle: NodeHandle) -> T {
        let node = self.arena.take(handle);

        match &mut self.state {
            Empty => unreachable!("unlinking from an empty list"),
            Full(contents) => match contents.len.checked_sub(1) {
                None => self.state = Empty,
                Some(new_len) => {
                    match (node.prev, node.next) {
                        (Some(prev), Some(next)) => {
                            self.arena.node_mut(prev).next = Some(next);
                            self.arena.node_mut(next).prev = Some(prev);
                        },
                        (None, Some(next)) => {
                            self.arena.node_mut(next).prev = None;
                            contents.head = next;
                        },
                        (Some(prev), None) => {
                            self.arena.node_mut(prev).next = None;
                            contents.tail = prev;
                        },
                        (None, None) => unreachable!("lone node in a list of length > 1"),
                    }
                    contents.len = new_len;
                },
            },
        }

        self.mod_count += 1;
        node.value
    }

    /// Walks the list in both directions, checking that every link agrees with its neighbour and
    /// that both walks cover exactly `len` nodes.
    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                assert_eq!(self.arena.node(head).prev, None);
                assert_eq!(self.arena.node(tail).next, None);

                let mut count = 1;
                let mut curr = head;
                while let Some(next) = self.arena.node(curr).next {
                    assert_eq!(self.arena.node(next).prev, Some(curr));
                    curr = next;
                    count += 1;
                }
                assert_eq!(curr, tail);
                assert_eq!(count, len.get());

                let mut count = 1;
                let mut curr = tail;
                while let Some(prev) = self.arena.node(curr).prev {
                    curr = prev;
                    count += 1;
                }
                assert_eq!(curr, head);
                assert_eq!(count, len.get());
            },
        }
    }
}

impl ListContents {
    /// Finds the node at `index`, walking from whichever end is closer.
    pub fn seek<T>(&self, arena: &Arena<T>, index: usize) -> NodeHandle {
        if index < self.len.get() / 2 {
            let mut node = self.head;
            for _ in 0..index {
                node = arena.node(node).next.unreachable();
            }
            node
        } else {
            let mut node = self.tail;
            for _ in 0..(self.last_index() - index) {
                node = arena.node(node).prev.unreachable();
            }
            node
        }
    }

    pub const fn wrap_one(handle: NodeHandle) -> ListContents {
        ListContents {
            len: ONE,
            head: handle,
            tail: handle,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl ListState {
    pub const fn single(handle: NodeHandle) -> ListState {
        Full(ListContents::wrap_one(handle))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    pub const fn head(&self) -> Link {
        match self {
            Empty => None,
            Full(ListContents { head, .. }) => Some(*head),
        }
    }

    pub const fn tail(&self) -> Link {
        match self {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(*tail),
        }
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.add_all(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        display_list(f, self.iter())
    }
}
