pub(crate) trait OptionExtension<T> {
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts similarly to [`Option::unwrap`] but with [`unreachable!`] in the none branch, marking
    /// the call site as one where the structure of the collection rules `None` out entirely.
    ///
    /// No panics section is used, because a panic here means the collection itself is broken
    /// rather than the caller having used it incorrectly.
    #[track_caller]
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("collection invariant violated"),
        }
    }
}
