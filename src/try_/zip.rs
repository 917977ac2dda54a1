//! Pairwise combination of independent [`Try`] values.

use crate::traits::IntoCaptured;

use super::Try;

impl<T> Try<T> {
    /// Pairs two successes into a tuple.
    ///
    /// If either side is a `Failure` the result is a `Failure`, and when both
    /// sides fail the left (`self`) error wins; the right error is discarded
    /// rather than merged.
    ///
    /// # Arguments
    ///
    /// * `other` - The right-hand `Try`
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let pair = Try::success(1).zip(Try::success("one"));
    /// assert_eq!(pair.into_value(), Some((1, "one")));
    ///
    /// let both_failed = Try::<i32>::failure("left").zip(Try::<i32>::failure("right"));
    /// assert_eq!(both_failed.unwrap_failure().message(), "left");
    /// ```
    pub fn zip<U>(self, other: Try<U>) -> Try<(T, U)> {
        match (self, other) {
            (Try::Success(left), Try::Success(right)) => Try::Success((left, right)),
            (Try::Failure(error), _) => Try::Failure(error),
            (_, Try::Failure(error)) => Try::Failure(error),
        }
    }

    /// Combines two successes with a pure function.
    ///
    /// Failure precedence follows [`zip`](Self::zip); the function runs only
    /// when both sides succeeded.
    ///
    /// # Arguments
    ///
    /// * `other` - The right-hand `Try`
    /// * `f` - Combines the two success values
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let sum = Try::success(2).zip_with(Try::success(3), |a, b| a + b);
    /// assert_eq!(sum.into_value(), Some(5));
    /// ```
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Try<U>, f: F) -> Try<R>
    where
        F: FnOnce(T, U) -> R,
    {
        self.zip(other).map(|(left, right)| f(left, right))
    }

    /// Combines two successes with a fallible function, capturing its error.
    ///
    /// # Arguments
    ///
    /// * `other` - The right-hand `Try`
    /// * `f` - Fallible combination of the two success values
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let ratio = Try::success(10).try_zip_with(Try::success(0), |a: i32, b: i32| {
    ///     a.checked_div(b).ok_or("division by zero")
    /// });
    /// assert!(ratio.is_failure());
    /// ```
    #[inline]
    pub fn try_zip_with<U, R, E, F>(self, other: Try<U>, f: F) -> Try<R>
    where
        F: FnOnce(T, U) -> Result<R, E>,
        E: IntoCaptured,
    {
        self.zip(other).try_map(|(left, right)| f(left, right))
    }

    /// Chains a `Try`-returning computation over two successes.
    ///
    /// The closure is trusted: its `Try` is returned as-is.
    ///
    /// # Arguments
    ///
    /// * `other` - The right-hand `Try`
    /// * `f` - The next step, fed both success values
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let t = Try::success(6).zip_and_then(Try::success(7), |a, b| Try::success(a * b));
    /// assert_eq!(t.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn zip_and_then<U, R, F>(self, other: Try<U>, f: F) -> Try<R>
    where
        F: FnOnce(T, U) -> Try<R>,
    {
        self.zip(other).and_then(|(left, right)| f(left, right))
    }
}
