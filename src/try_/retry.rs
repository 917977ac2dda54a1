//! Bounded re-attempts of a fallible operation on the success value.

use crate::traits::IntoCaptured;

use super::Try;

impl<T> Try<T> {
    /// Runs a fallible operation on the success value, re-attempting it up to
    /// `max_retries` times.
    ///
    /// At most `max_retries + 1` attempts are made; `max_retries == 0` means
    /// a single attempt. The first `Ok` wins immediately and later attempts
    /// are skipped. If every attempt fails, the error of the last attempt
    /// becomes the `Failure`; earlier errors are discarded.
    ///
    /// All attempts run synchronously on the calling thread with no delay
    /// between them. On a `Failure` input the operation is never invoked.
    ///
    /// # Arguments
    ///
    /// * `operation` - Fallible operation, re-run on the borrowed success value
    /// * `max_retries` - How many times to retry after the first attempt
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::Cell;
    ///
    /// use try_rail::Try;
    ///
    /// let calls = Cell::new(0u32);
    /// let t = Try::success(2).retry(
    ///     |n| {
    ///         calls.set(calls.get() + 1);
    ///         if calls.get() < 3 {
    ///             Err("flaky backend")
    ///         } else {
    ///             Ok(n * 10)
    ///         }
    ///     },
    ///     5,
    /// );
    ///
    /// assert_eq!(t.into_value(), Some(20));
    /// assert_eq!(calls.get(), 3);
    /// ```
    pub fn retry<U, E, F>(self, mut operation: F, max_retries: u32) -> Try<U>
    where
        F: FnMut(&T) -> Result<U, E>,
        E: IntoCaptured,
    {
        match self {
            Try::Success(value) => {
                let mut attempt = 0;
                loop {
                    match operation(&value) {
                        Ok(output) => return Try::Success(output),
                        Err(error) if attempt == max_retries => {
                            return Try::Failure(error.into_captured());
                        }
                        Err(_) => attempt += 1,
                    }
                }
            }
            Try::Failure(error) => Try::Failure(error),
        }
    }
}
