use std::fmt::{self, Debug, Formatter};

/// Formats the items of a cloneable iterator as a debug list, so that collections can nest their
/// contents inside [`debug_struct`](Formatter::debug_struct) output.
pub struct DebugEntries<I>(pub I);

impl<I> Debug for DebugEntries<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

/// Writes the items of an iterator as `[a, b, c]`, using their [`Display`](fmt::Display)
/// implementations.
pub fn display_list<I>(f: &mut Formatter<'_>, iter: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    write!(f, "[")?;
    for (index, item) in iter.into_iter().enumerate() {
        if index != 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}
