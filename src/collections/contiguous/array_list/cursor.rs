use super::ArrayList;
use crate::collections::traits::ListCursor;
use crate::util::error::{
    ConcurrentModification, CursorError, IllegalState, IndexOrCapOverflow, NoSuchElement,
};

/// A detached, fail-fast cursor over an [`ArrayList`]. See [`ListCursor`] for the protocol and
/// [`ArrayList::cursor`] or [`ArrayList::cursor_at`] to create one.
///
/// # Examples
/// ```
/// # use list_lib::collections::contiguous::ArrayList;
/// # use list_lib::collections::traits::ListCursor;
/// let mut list = ArrayList::from([1, 2, 3, 4]);
/// let mut cursor = list.cursor();
/// while cursor.has_next(&list) {
///     if cursor.next(&list)? % 2 == 0 {
///         cursor.remove(&mut list)?;
///     }
/// }
/// assert_eq!(list, ArrayList::from([1, 3]));
///
/// // Modifying the list directly invalidates the cursor.
/// let mut cursor = list.cursor();
/// list.push(5);
/// assert!(cursor.next(&list).unwrap_err().is_concurrent_modification());
/// # Ok::<(), list_lib::collections::error::CursorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    /// The index of the element returned by the next call to `next`.
    pub(crate) cursor: usize,
    pub(crate) last_returned: Option<usize>,
    pub(crate) expected_mod_count: usize,
}

impl Cursor {
    pub(crate) const fn new(index: usize, mod_count: usize) -> Cursor {
        Cursor {
            cursor: index,
            last_returned: None,
            expected_mod_count: mod_count,
        }
    }

    /// Returns the index of the element that `next` would return, which is the length of the
    /// list if the cursor is at the end.
    pub const fn next_index(&self) -> usize {
        self.cursor
    }

    /// Returns the index of the element that `previous` would return, or [`None`] if the cursor
    /// is at the start of the list.
    pub const fn previous_index(&self) -> Option<usize> {
        self.cursor.checked_sub(1)
    }

    const fn check_for_comodification<T>(
        &self,
        list: &ArrayList<T>,
    ) -> Result<(), ConcurrentModification> {
        if list.mod_count == self.expected_mod_count {
            Ok(())
        } else {
            Err(ConcurrentModification)
        }
    }
}

impl<T> ListCursor<ArrayList<T>> for Cursor {
    type Item = T;

    fn has_next(&self, list: &ArrayList<T>) -> bool {
        self.cursor < list.len
    }

    fn next<'a>(&mut self, list: &'a ArrayList<T>) -> Result<&'a T, CursorError> {
        self.check_for_comodification(list)?;

        let index = self.cursor;
        let value = list.try_get(index).map_err(|_| NoSuchElement)?;

        self.cursor = index + 1;
        self.last_returned = Some(index);
        Ok(value)
    }

    fn has_previous(&self, _list: &ArrayList<T>) -> bool {
        self.cursor != 0
    }

    fn previous<'a>(&mut self, list: &'a ArrayList<T>) -> Result<&'a T, CursorError> {
        self.check_for_comodification(list)?;

        let index = self.cursor.checked_sub(1).ok_or(NoSuchElement)?;
        let value = list.try_get(index).map_err(|_| NoSuchElement)?;

        self.cursor = index;
        self.last_returned = Some(index);
        Ok(value)
    }

    fn set(&mut self, list: &mut ArrayList<T>, value: T) -> Result<T, CursorError> {
        let index = self.last_returned.ok_or(IllegalState)?;
        self.check_for_comodification(list)?;

        Ok(list.try_set(index, value).map_err(|_| ConcurrentModification)?)
    }

    fn insert(&mut self, list: &mut ArrayList<T>, value: T) -> Result<(), CursorError> {
        self.check_for_comodification(list)?;

        list.try_insert(self.cursor, value).map_err(|error| match error {
            // The list must have shrunk without this cursor noticing.
            IndexOrCapOverflow::IndexOutOfBounds(_) => CursorError::from(ConcurrentModification),
            IndexOrCapOverflow::CapacityOverflow(overflow) => CursorError::from(overflow),
        })?;

        self.cursor += 1;
        self.last_returned = None;
        self.expected_mod_count = list.mod_count;
        Ok(())
    }

    fn remove(&mut self, list: &mut ArrayList<T>) -> Result<T, CursorError> {
        let index = self.last_returned.ok_or(IllegalState)?;
        self.check_for_comodification(list)?;

        let value = list.try_remove_at(index).map_err(|_| ConcurrentModification)?;

        // Whichever direction the element was returned in, the element after it now sits at its
        // old index.
        self.cursor = index;
        self.last_returned = None;
        self.expected_mod_count = list.mod_count;
        Ok(value)
    }
}
