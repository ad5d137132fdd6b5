/// Asserts that the given block panics. The block is run behind
/// [`AssertUnwindSafe`](std::panic::AssertUnwindSafe), so it may borrow collections from the
/// enclosing test; don't rely on their contents after the panic.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
        println!("^ panic caught");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
