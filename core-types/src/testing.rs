//! Helpers for tests across the workspace.

use std::fmt::Debug;

/// `unwrap` that points at the test line instead of this module on failure.
pub trait UnwrapTesting<T> {
    fn unwrap_test(self) -> T;
}

impl<T, E: Debug> UnwrapTesting<T> for Result<T, E> {
    #[track_caller]
    fn unwrap_test(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => panic!("unwrap_test on Err: {err:?}"),
        }
    }
}

impl<T> UnwrapTesting<T> for Option<T> {
    #[track_caller]
    fn unwrap_test(self) -> T {
        match self {
            Some(value) => value,
            None => panic!("unwrap_test on None"),
        }
    }
}
