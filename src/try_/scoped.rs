//! Resource-scoped computations: acquire, use, release.

use crate::traits::IntoCaptured;

use super::Try;

impl<T> Try<T> {
    /// Acquires a resource, uses it together with the success value, and
    /// releases it before returning.
    ///
    /// The resource is released by [`Drop`], exactly once, on every exit
    /// path: after `use_fn` returns `Ok`, after it returns `Err`, and during
    /// unwinding if it panics. Errors from `acquire` and `use_fn` are both
    /// captured. On a `Failure` input nothing is acquired.
    ///
    /// Use [`bracket`](Self::bracket) when releasing takes more than
    /// dropping.
    ///
    /// # Arguments
    ///
    /// * `acquire` - Produces the resource; runs only on a `Success` input
    /// * `use_fn` - Computation over the resource and the success value
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let written = Try::success("hello").using(
    ///     || Ok::<_, &str>(Vec::new()),
    ///     |buffer, text| {
    ///         buffer.extend_from_slice(text.as_bytes());
    ///         Ok::<_, &str>(buffer.len())
    ///     },
    /// );
    /// assert_eq!(written.into_value(), Some(5));
    /// ```
    pub fn using<R, U, E1, E2, A, F>(self, acquire: A, use_fn: F) -> Try<U>
    where
        A: FnOnce() -> Result<R, E1>,
        F: FnOnce(&mut R, T) -> Result<U, E2>,
        E1: IntoCaptured,
        E2: IntoCaptured,
    {
        match self {
            Try::Success(value) => match acquire() {
                Ok(mut resource) => {
                    let outcome = use_fn(&mut resource, value);
                    drop(resource);
                    Try::from_result(outcome)
                }
                Err(error) => Try::Failure(error.into_captured()),
            },
            Try::Failure(error) => Try::Failure(error),
        }
    }

    /// Acquires a resource and hands it to an explicit finalizer after use.
    ///
    /// `release` receives the resource by value once `use_fn` has returned,
    /// whether it returned `Ok` or `Err`. If `use_fn` panics the finalizer is
    /// skipped and the resource's own [`Drop`] runs during unwinding instead.
    ///
    /// # Arguments
    ///
    /// * `acquire` - Produces the resource; runs only on a `Success` input
    /// * `use_fn` - Computation over the resource and the success value
    /// * `release` - Finalizer run after `use_fn`, on both outcomes
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::Cell;
    ///
    /// use try_rail::Try;
    ///
    /// let released = Cell::new(false);
    /// let t = Try::success(21).bracket(
    ///     || Ok::<_, &str>(2),
    ///     |factor, n| Ok::<_, &str>(*factor * n),
    ///     |_| released.set(true),
    /// );
    ///
    /// assert_eq!(t.into_value(), Some(42));
    /// assert!(released.get());
    /// ```
    pub fn bracket<R, U, E1, E2, A, F, Rel>(self, acquire: A, use_fn: F, release: Rel) -> Try<U>
    where
        A: FnOnce() -> Result<R, E1>,
        F: FnOnce(&mut R, T) -> Result<U, E2>,
        Rel: FnOnce(R),
        E1: IntoCaptured,
        E2: IntoCaptured,
    {
        match self {
            Try::Success(value) => match acquire() {
                Ok(mut resource) => {
                    let outcome = use_fn(&mut resource, value);
                    release(resource);
                    Try::from_result(outcome)
                }
                Err(error) => Try::Failure(error.into_captured()),
            },
            Try::Failure(error) => Try::Failure(error),
        }
    }
}
