use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::contiguous::ArrayList;
use crate::collections::contiguous::array_list::Iter;
#[doc(inline)]
pub use crate::util::error::EmptyStack;

/// A last-in first-out stack, composed over an [`ArrayList`] and restricted to operating on its
/// tail. The bottom of the stack is the start of the list.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`* |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `search` | `O(n)` |
///
/// \* Amortized, see [`ArrayList::push`].
///
/// # Examples
/// ```
/// # use list_lib::collections::contiguous::Stack;
/// let mut stack = Stack::new();
/// for i in 1..=4 {
///     stack.push(i);
/// }
/// assert_eq!(stack.pop(), Ok(4));
/// assert_eq!(stack.to_string(), "[1, 2, 3]");
/// assert_eq!(stack.search(&1), Some(3));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    pub(crate) list: ArrayList<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack {
            list: ArrayList::new(),
        }
    }

    /// Creates an empty Stack with room for `cap` elements before it needs to grow.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Stack<T> {
        Stack {
            list: ArrayList::with_cap(cap),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Pushes `value` onto the top of the Stack and returns a reference to it.
    ///
    /// # Panics
    /// Panics if the underlying list can't grow to hold another element.
    pub fn push(&mut self, value: T) -> &T {
        self.list.push(value);
        self.list.get(self.list.len() - 1)
    }

    /// Removes the top element of the Stack and returns it.
    pub fn pop(&mut self) -> Result<T, EmptyStack> {
        self.list.pop().ok_or(EmptyStack)
    }

    /// Returns a reference to the top element of the Stack without removing it.
    pub fn peek(&self) -> Result<&T, EmptyStack> {
        match self.list.len().checked_sub(1) {
            Some(top) => Ok(self.list.get(top)),
            None => Err(EmptyStack),
        }
    }

    pub fn peek_mut(&mut self) -> Result<&mut T, EmptyStack> {
        match self.list.len().checked_sub(1) {
            Some(top) => Ok(self.list.get_mut(top)),
            None => Err(EmptyStack),
        }
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator over the Stack from bottom to top.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }

    /// Borrows the underlying list.
    pub const fn as_list(&self) -> &ArrayList<T> {
        &self.list
    }

    /// Converts the Stack back into the underlying list, with the top of the Stack at the end.
    pub fn into_list(self) -> ArrayList<T> {
        self.list
    }
}

impl<T: PartialEq> Stack<T> {
    /// Returns the 1-based distance from the top of the Stack to the nearest element equal to
    /// `item`, so that the top element itself is at distance 1. Returns [`None`] if no element is
    /// equal to `item`.
    pub fn search(&self, item: &T) -> Option<usize> {
        self.list
            .last_index_of(item)
            .map(|index| self.list.len() - index)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.list.contains(item)
    }
}

impl<T> From<ArrayList<T>> for Stack<T> {
    fn from(list: ArrayList<T>) -> Self {
        Stack { list }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            list: ArrayList::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;

    type IntoIter = crate::collections::contiguous::array_list::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Stack").field(&self.list).finish()
    }
}

impl<T: Display> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.list, f)
    }
}
