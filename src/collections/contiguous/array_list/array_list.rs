use std::cmp;
use std::convert::Infallible;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter;
use std::mem;
use std::ops::{Bound, Index, IndexMut, RangeBounds};

use super::{Cursor, Iter, IterMut};
use crate::collections::traits::DescendingCursor;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds, InvalidRange};
use crate::util::fmt::{DebugEntries, display_list};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// The capacity allocated the first time an empty ArrayList grows.
pub const DEFAULT_CAPACITY: usize = 10;

const MAX_SIZE: usize = isize::MAX as usize;

/// A variable size contiguous collection, storing its elements in a boxed slice of slots.
///
/// Elements occupy slots `0..len` in order, while the slots in `len..cap` are always empty. This
/// means that removing an element never leaves a stale copy of it behind in the spare capacity.
///
/// # Growth
/// When an insertion needs more room, the capacity grows to `old + max(required - old, old / 2)`,
/// or to `max(DEFAULT_CAPACITY, required)` for a list with no capacity at all. Growing by half
/// again keeps appends amortized `O(1)` without wasting as much space as doubling would. The
/// capacity never shrinks on its own, see [`trim_to_size`](ArrayList::trim_to_size).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayList.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being added.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` / `set` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)`* |
/// | `remove_at` | `O(n-i)` |
/// | `insert_all` | `O(n-i+m)` |
/// | `remove_item` | `O(n)` |
/// | `remove_all` / `retain_all` | `O(n*m)` |
/// | `index_of` / `contains` | `O(n)` |
/// | `trim_to_size` | `O(n)` |
///
/// \* Plus `O(n)` if the ArrayList doesn't have enough capacity for the new element.
pub struct ArrayList<T> {
    pub(crate) slots: Box<[Option<T>]>,
    pub(crate) len: usize,
    pub(crate) mod_count: usize,
}

impl<T> ArrayList<T> {
    /// Creates a new ArrayList with length and capacity 0. Memory will be allocated when the
    /// first element is added.
    ///
    /// # Examples
    /// ```
    /// # use list_lib::collections::contiguous::ArrayList;
    /// let list: ArrayList<u8> = ArrayList::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.cap(), 0);
    /// ```
    pub fn new() -> ArrayList<T> {
        ArrayList {
            slots: Self::alloc_slots(0),
            len: 0,
            mod_count: 0,
        }
    }

    /// Creates a new ArrayList with capacity exactly equal to the provided value, allowing values
    /// to be added without reallocation.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use list_lib::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<u8> = ArrayList::with_cap(5);
    /// assert_eq!(list.cap(), 5);
    /// list.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(list.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> ArrayList<T> {
        Self::try_with_cap(cap).throw()
    }

    /// Creates a new ArrayList with capacity exactly equal to the provided value, returning an
    /// [`Err`] if the memory layout size would exceed [`isize::MAX`].
    pub fn try_with_cap(cap: usize) -> Result<ArrayList<T>, CapacityOverflow> {
        Ok(ArrayList {
            slots: Self::alloc_slots(Self::check_layout(cap)?),
            len: 0,
            mod_count: 0,
        })
    }

    /// Returns the length of the ArrayList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ArrayList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the ArrayList.
    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of structural modifications made to this ArrayList so far. Cursors
    /// compare against this value to detect modifications made behind their backs.
    pub const fn mod_count(&self) -> usize {
        self.mod_count
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the ArrayList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.slots[index].as_ref().unreachable())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the ArrayList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.slots[index].as_mut().unreachable())
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value. This
    /// isn't a structural modification, so it doesn't disturb any cursors.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn set(&mut self, index: usize, new_value: T) -> T {
        self.try_set(index, new_value).throw()
    }

    pub fn try_set(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(mem::replace(&mut self.slots[index], Some(new_value)).unreachable())
    }

    /// Push the provided value onto the end of the ArrayList, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the required capacity overflows.
    ///
    /// # Examples
    /// ```
    /// # use list_lib::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::<u8>::new();
    /// for i in 0..=5 {
    ///     list.push(i);
    /// }
    /// assert_eq!(list, ArrayList::from([0, 1, 2, 3, 4, 5]));
    /// assert_eq!(list.cap(), 10);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    pub fn try_push(&mut self, value: T) -> Result<(), CapacityOverflow> {
        if self.len == self.cap() {
            self.grow(self.len.checked_add(1).ok_or(CapacityOverflow)?)?;
        }

        self.slots[self.len] = Some(value);
        self.len += 1;
        self.mod_count += 1;
        Ok(())
    }

    /// Pops the last value off the end of the ArrayList, returning [`None`] if it is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            self.mod_count += 1;
            self.slots[self.len].take()
        }
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    /// Inserting at `len` is equivalent to a push.
    ///
    /// # Panics
    /// Panics if `index > len` or the required capacity overflows.
    ///
    /// # Examples
    /// ```
    /// # use list_lib::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::from([0, 1, 2]);
    /// list.insert(1, 100);
    /// list.insert(1, 200);
    /// list.insert(5, 300);
    /// assert_eq!(list, ArrayList::from([0, 200, 100, 1, 2, 300]));
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        self.check_position(index)?;

        if self.len == self.cap() {
            self.grow(self.len.checked_add(1).ok_or(CapacityOverflow)?)?;
        }

        // Write into the first spare slot, then rotate it into place, shifting everything in
        // index..len one slot to the right.
        self.slots[self.len] = Some(value);
        self.slots[index..=self.len].rotate_right(1);

        self.len += 1;
        self.mod_count += 1;
        Ok(())
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use list_lib::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<_> = "Hello world!".chars().collect();
    /// assert_eq!(list.remove_at(1), 'e');
    /// assert_eq!(list.remove_at(4), ' ');
    /// assert_eq!(list, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> T {
        self.try_remove_at(index).throw()
    }

    pub fn try_remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.fast_remove(index))
    }

    /// Removes the first element equal to `item`, returning true if one was found.
    pub fn remove_item(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(item) {
            Some(index) => {
                self.fast_remove(index);
                true
            },
            None => false,
        }
    }

    /// Appends every element produced by `iter`, returning true if any were added.
    ///
    /// # Panics
    /// Panics if the required capacity overflows.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, iter: I) -> bool {
        self.insert_all(self.len, iter)
    }

    /// Inserts every element produced by `iter` as a contiguous run starting at `index`,
    /// preserving the order of the source. Returns true if any elements were added.
    ///
    /// # Panics
    /// Panics if `index > len` or the required capacity overflows.
    ///
    /// # Examples
    /// ```
    /// # use list_lib::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::from([1, 5]);
    /// assert!(list.insert_all(1, 2..5));
    /// assert!(!list.insert_all(0, []));
    /// assert_eq!(list, ArrayList::from([1, 2, 3, 4, 5]));
    /// ```
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, index: usize, iter: I) -> bool {
        self.try_insert_all(index, iter).throw()
    }

    /// Inserts the elements of `iter` at `index`, returning an [`Err`] rather than panicking. The
    /// list is left unchanged when an error is returned.
    pub fn try_insert_all<I: IntoIterator<Item = T>>(
        &mut self,
        index: usize,
        iter: I,
    ) -> Result<bool, IndexOrCapOverflow> {
        self.check_position(index)?;

        // Take a snapshot of the source first, so that its length is known up front and nothing
        // is shifted until it has been fully consumed.
        let iter = iter.into_iter();
        let mut added = ArrayList::try_with_cap(iter.size_hint().0)?;
        for item in iter {
            added.try_push(item)?;
        }
        let count = added.len;
        if count == 0 {
            return Ok(false);
        }

        let new_len = self.len.checked_add(count).ok_or(CapacityOverflow)?;
        if new_len > self.cap() {
            self.grow(new_len)?;
        }

        for (slot, value) in self.slots[self.len..new_len].iter_mut().zip(added) {
            *slot = Some(value);
        }
        // The new run sits after the old tail, rotate it into place in front of it.
        self.slots[index..new_len].rotate_right(count);

        self.len = new_len;
        self.mod_count += 1;
        Ok(true)
    }

    /// Drops all elements in the ArrayList, leaving its capacity untouched.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
        self.mod_count += 1;
    }

    /// Shrinks the ArrayList so that its capacity is equal to its length. An empty ArrayList
    /// releases its storage entirely.
    pub fn trim_to_size(&mut self) {
        if self.len < self.cap() {
            self.realloc_with_cap(self.len);
        }
    }

    /// Ensures that the ArrayList has capacity to hold an additional `extra` elements, growing
    /// according to the usual growth policy. After invoking this method, the capacity will be
    /// `>= len + extra`.
    ///
    /// # Panics
    /// Panics if the required capacity overflows.
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        let required = self.len.checked_add(extra).ok_or(CapacityOverflow)?;
        if required > self.cap() {
            self.grow(required)?;
        }
        Ok(())
    }

    /// Removes every element for which `filter` returns true, keeping the relative order of the
    /// rest. Returns true if anything was removed.
    pub fn remove_where<F: FnMut(&T) -> bool>(&mut self, mut filter: F) -> bool {
        let Ok(removed) = self.batch_remove(|item| Ok::<_, Infallible>(filter(item)), false);
        removed
    }

    /// Keeps only the elements for which `filter` returns true, preserving their relative order.
    /// Returns true if anything was removed.
    pub fn retain_where<F: FnMut(&T) -> bool>(&mut self, mut filter: F) -> bool {
        let Ok(removed) = self.batch_remove(|item| Ok::<_, Infallible>(filter(item)), true);
        removed
    }

    /// Removes every element for which `filter` returns `Ok(true)`.
    ///
    /// If `filter` fails, the error is returned and the ArrayList is left in a consistent state:
    /// the elements tested before the failure have been removed or kept as usual, while the
    /// element that failed and everything after it are kept as they were.
    ///
    /// # Examples
    /// ```
    /// # use list_lib::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::from([1, 2, 3, 4, 2]);
    /// let result = list.try_remove_where(|&item| match item {
    ///     4 => Err("four"),
    ///     item => Ok(item == 2),
    /// });
    /// assert_eq!(result, Err("four"));
    /// assert_eq!(list, ArrayList::from([1, 3, 4, 2]));
    /// ```
    pub fn try_remove_where<E, F>(&mut self, filter: F) -> Result<bool, E>
    where
        F: FnMut(&T) -> Result<bool, E>,
    {
        self.batch_remove(filter, false)
    }

    /// Keeps only the elements for which `filter` returns `Ok(true)`, with the same failure
    /// behavior as [`try_remove_where`](ArrayList::try_remove_where).
    pub fn try_retain_where<E, F>(&mut self, filter: F) -> Result<bool, E>
    where
        F: FnMut(&T) -> Result<bool, E>,
    {
        self.batch_remove(filter, true)
    }

    /// Returns a new ArrayList containing clones of the elements in `range`. The result is
    /// independent of self, rather than being a view into it.
    ///
    /// # Panics
    /// Panics if the range is inverted or extends past the end of the ArrayList.
    ///
    /// # Examples
    /// ```
    /// # use list_lib::collections::contiguous::ArrayList;
    /// let list = ArrayList::from([0, 1, 2, 3, 4]);
    /// let mut sub = list.sub_list(1..3);
    /// sub.push(10);
    /// assert_eq!(sub, ArrayList::from([1, 2, 10]));
    /// assert_eq!(list.len(), 5);
    /// ```
    pub fn sub_list<R: RangeBounds<usize>>(&self, range: R) -> ArrayList<T>
    where
        T: Clone,
    {
        self.try_sub_list(range).throw()
    }

    pub fn try_sub_list<R: RangeBounds<usize>>(&self, range: R) -> Result<ArrayList<T>, InvalidRange>
    where
        T: Clone,
    {
        let (start, end) = self.check_range(range)?;
        Ok(Iter::new(&self.slots[start..end]).cloned().collect())
    }

    /// Returns a boxed slice holding clones of all elements.
    pub fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Converts the ArrayList into a boxed slice of its elements.
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.into_iter().collect()
    }

    /// Returns a cursor positioned before the first element.
    pub const fn cursor(&self) -> Cursor {
        Cursor::new(0, self.mod_count)
    }

    /// Returns a cursor positioned before the element at `index`, panicking if `index > len`.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the ArrayList.
    pub fn cursor_at(&self, index: usize) -> Cursor {
        self.try_cursor_at(index).throw()
    }

    pub fn try_cursor_at(&self, index: usize) -> Result<Cursor, IndexOutOfBounds> {
        self.check_position(index)?;
        Ok(Cursor::new(index, self.mod_count))
    }

    /// Returns a cursor which walks the ArrayList from back to front.
    pub const fn descending_cursor(&self) -> DescendingCursor<Cursor> {
        DescendingCursor::new(Cursor::new(self.len, self.mod_count))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots[..self.len])
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.slots[..self.len])
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Returns the index of the first element equal to `item`, scanning from the front.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    /// Returns the index of the last element equal to `item`, scanning from the back.
    ///
    /// # Examples
    /// ```
    /// # use list_lib::collections::contiguous::ArrayList;
    /// let list = ArrayList::from([Some(5), None, Some(5), None]);
    /// assert_eq!(list.index_of(&None), Some(1));
    /// assert_eq!(list.last_index_of(&Some(5)), Some(2));
    /// assert_eq!(list.last_index_of(&Some(6)), None);
    /// ```
    pub fn last_index_of(&self, item: &T) -> Option<usize> {
        self.iter().rposition(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Returns true if every element of `items` is contained in self.
    pub fn contains_all(&self, items: &[T]) -> bool {
        items.iter().all(|item| self.contains(item))
    }

    /// Removes every element that is also contained in `items`. Returns true if anything was
    /// removed.
    ///
    /// # Examples
    /// ```
    /// # use list_lib::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::from([1, 2, 3, 2, 1]);
    /// assert!(list.remove_all(&[2]));
    /// assert_eq!(list, ArrayList::from([1, 3, 1]));
    /// ```
    pub fn remove_all(&mut self, items: &[T]) -> bool {
        self.remove_where(|item| items.contains(item))
    }

    /// Removes every element that isn't contained in `items`. Returns true if anything was
    /// removed.
    pub fn retain_all(&mut self, items: &[T]) -> bool {
        self.retain_where(|item| items.contains(item))
    }
}

impl<T> ArrayList<T> {
    pub(crate) fn alloc_slots(cap: usize) -> Box<[Option<T>]> {
        iter::repeat_with(|| None).take(cap).collect()
    }

    /// Checks that a slot array with the provided capacity has a valid memory layout.
    pub(crate) const fn check_layout(cap: usize) -> Result<usize, CapacityOverflow> {
        match cap.checked_mul(mem::size_of::<Option<T>>()) {
            Some(size) if size <= MAX_SIZE => Ok(cap),
            _ => Err(CapacityOverflow),
        }
    }

    /// Moves all elements into a new slot array with the provided capacity, which must be at
    /// least `len`.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        let mut slots = Self::alloc_slots(new_cap);

        for (new_slot, old_slot) in slots.iter_mut().zip(&mut self.slots[..self.len]) {
            *new_slot = old_slot.take();
        }

        self.slots = slots;
    }

    /// Grows the slot array so that it can hold at least `min_cap` elements.
    pub(crate) fn grow(&mut self, min_cap: usize) -> Result<(), CapacityOverflow> {
        let old_cap = self.cap();

        let new_cap = if old_cap > 0 {
            // Grow by half of the current capacity, or by enough to reach min_cap if that isn't
            // sufficient.
            old_cap
                .checked_add(cmp::max(min_cap.saturating_sub(old_cap), old_cap >> 1))
                .ok_or(CapacityOverflow)?
        } else {
            cmp::max(DEFAULT_CAPACITY, min_cap)
        };

        self.realloc_with_cap(Self::check_layout(new_cap)?);
        Ok(())
    }

    /// Removes the element at `index` without a bounds check, shifting the tail down and leaving
    /// the vacated last slot empty.
    pub(crate) fn fast_remove(&mut self, index: usize) -> T {
        let value = self.slots[index].take();
        // The empty slot at index ends up at len - 1.
        self.slots[index..self.len].rotate_left(1);

        self.len -= 1;
        self.mod_count += 1;
        value.unreachable()
    }

    /// The single pass compaction behind all of the bulk removal methods. Elements for which
    /// `filter` returns `complement` are kept.
    pub(crate) fn batch_remove<E, F>(&mut self, mut filter: F, complement: bool) -> Result<bool, E>
    where
        F: FnMut(&T) -> Result<bool, E>,
    {
        let end = self.len;

        // Skip over the leading run of elements that stay where they are. If the filter fails
        // here, nothing has been touched yet.
        let mut read = 0;
        loop {
            if read == end {
                return Ok(false);
            }
            if filter(self.slots[read].as_ref().unreachable())? != complement {
                break;
            }
            read += 1;
        }

        // The first element to remove is left in its slot, to be dropped when overwritten.
        let mut write = read;
        read += 1;
        let mut result = Ok(true);

        while read < end {
            match filter(self.slots[read].as_ref().unreachable()) {
                Ok(matched) => if matched == complement {
                    self.slots[write] = self.slots[read].take();
                    write += 1;
                },
                Err(error) => {
                    result = Err(error);
                    break;
                },
            }
            read += 1;
        }

        if result.is_err() {
            // Keep everything that hasn't been tested, shifting it down after the survivors.
            while read < end {
                self.slots[write] = self.slots[read].take();
                write += 1;
                read += 1;
            }
        }

        // Anything left in write..end has been removed.
        for slot in &mut self.slots[write..end] {
            *slot = None;
        }

        self.len = write;
        self.mod_count += 1;
        result
    }

    /// Checks that the provided index refers to an element of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    /// Checks that the provided index is a valid position between elements, including the end.
    pub(crate) const fn check_position(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index <= self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    pub(crate) fn check_range<R: RangeBounds<usize>>(
        &self,
        range: R,
    ) -> Result<(usize, usize), InvalidRange> {
        let start = match range.start_bound() {
            Bound::Included(&start) => Some(start),
            Bound::Excluded(&start) => start.checked_add(1),
            Bound::Unbounded => Some(0),
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.checked_add(1),
            Bound::Excluded(&end) => Some(end),
            Bound::Unbounded => Some(self.len),
        };

        match (start, end) {
            (Some(start), Some(end)) if start <= end && end <= self.len => Ok((start, end)),
            (start, end) => Err(InvalidRange {
                start: start.unwrap_or(usize::MAX),
                end: end.unwrap_or(usize::MAX),
                len: self.len,
            }),
        }
    }

    /// Borrows the occupied slots, for collections built on top of this one.
    pub(crate) fn occupied_slots_mut(&mut self) -> &mut [Option<T>] {
        &mut self.slots[..self.len]
    }
}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = ArrayList::with_cap(iter.size_hint().0);

        for item in iter {
            list.push(item);
        }

        list
    }
}

impl<T, const N: usize> From<[T; N]> for ArrayList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        // Only the elements are copied, so the clone's capacity is its length.
        let mut list = Self::with_cap(self.len);

        for value in self.iter() {
            list.push(value.clone());
        }

        list
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        display_list(f, self.iter())
    }
}
