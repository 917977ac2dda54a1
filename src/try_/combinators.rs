//! Transformation, chaining and recovery combinators for [`Try`].

use crate::traits::IntoCaptured;
use crate::types::{Captured, TryUnit};

use super::Try;

impl<T> Try<T> {
    /// Transforms the success value with a pure function.
    ///
    /// The function is trusted: it cannot fail, its result is wrapped in
    /// `Success` as-is, and a panic inside it propagates to the caller. Use
    /// [`try_map`](Self::try_map) for transformations that can fail.
    ///
    /// # Arguments
    ///
    /// * `f` - Transformation applied to the success value
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let doubled = Try::success(21).map(|n| n * 2);
    /// assert_eq!(doubled.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Try::Success(value) => Try::Success(f(value)),
            Try::Failure(error) => Try::Failure(error),
        }
    }

    /// Transforms the success value with a fallible function, capturing its
    /// error.
    ///
    /// An `Err` return becomes a `Failure`, exactly as in [`Try::of`]. On a
    /// `Failure` input the function is never invoked.
    ///
    /// # Arguments
    ///
    /// * `f` - Fallible transformation applied to the success value
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let port = Try::success("8080").try_map(|s| s.parse::<u16>());
    /// assert_eq!(port.into_value(), Some(8080));
    ///
    /// let bad = Try::success("80xx").try_map(|s| s.parse::<u16>());
    /// assert!(bad.is_failure());
    /// ```
    #[inline]
    pub fn try_map<U, E, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: IntoCaptured,
    {
        match self {
            Try::Success(value) => Try::from_result(f(value)),
            Try::Failure(error) => Try::Failure(error),
        }
    }

    /// Chains a computation that itself returns a `Try`.
    ///
    /// The returned `Try` is taken as-is and never re-wrapped, so a `Failure`
    /// produced by `f` keeps its own error. On a `Failure` input the function
    /// is never invoked and the error passes through unchanged.
    ///
    /// # Arguments
    ///
    /// * `f` - The next step of the chain
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// fn reciprocal(n: i32) -> Try<i32> {
    ///     if n == 0 {
    ///         Try::failure("division by zero")
    ///     } else {
    ///         Try::success(100 / n)
    ///     }
    /// }
    ///
    /// assert_eq!(Try::success(4).and_then(reciprocal).into_value(), Some(25));
    /// assert!(Try::success(0).and_then(reciprocal).is_failure());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Try::Success(value) => f(value),
            Try::Failure(error) => Try::Failure(error),
        }
    }

    /// Keeps the success value only if it satisfies a predicate.
    ///
    /// A value that fails the predicate becomes a `Failure` of kind
    /// [`CauseKind::Predicate`](crate::CauseKind::Predicate). A `Failure`
    /// input passes through unchanged and the predicate is never invoked.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Condition the success value must satisfy
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// assert!(Try::success(10).filter(|n| *n > 5).is_success());
    /// assert!(Try::success(3).filter(|n| *n > 5).is_failure());
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Try::Success(value) if predicate(&value) => Try::Success(value),
            Try::Success(_) => Try::Failure(Captured::predicate()),
            Try::Failure(error) => Try::Failure(error),
        }
    }

    /// Rejects the success value if it satisfies a predicate.
    ///
    /// The mirror of [`filter`](Self::filter): a value matching the
    /// predicate becomes a `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// assert!(Try::success("").reject(|s| s.is_empty()).is_failure());
    /// assert!(Try::success("ok").reject(|s| s.is_empty()).is_success());
    /// ```
    #[inline]
    pub fn reject<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(|value| !predicate(value))
    }

    /// Returns `self` on success, otherwise the given alternative.
    ///
    /// The alternative is evaluated eagerly; use [`or_else`](Self::or_else)
    /// when building it is costly.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let t = Try::<i32>::failure("boom").or(Try::success(7));
    /// assert_eq!(t.into_value(), Some(7));
    /// ```
    #[inline]
    pub fn or(self, alternative: Try<T>) -> Try<T> {
        match self {
            Try::Success(value) => Try::Success(value),
            Try::Failure(_) => alternative,
        }
    }

    /// Returns `self` on success, otherwise computes an alternative.
    ///
    /// The alternative is trusted: its `Try` is returned as-is, so it may
    /// itself be a `Failure`. On a `Success` input the closure is never
    /// invoked.
    ///
    /// # Arguments
    ///
    /// * `f` - Produces the alternative `Try`
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let divided = Try::of(|| 10i32.checked_div(0).ok_or("division by zero"))
    ///     .or_else(|| Try::success(4));
    /// assert_eq!(divided.into_value(), Some(4));
    /// ```
    #[inline]
    pub fn or_else<F>(self, f: F) -> Try<T>
    where
        F: FnOnce() -> Try<T>,
    {
        match self {
            Try::Success(value) => Try::Success(value),
            Try::Failure(_) => f(),
        }
    }

    /// Replaces a failure with a value computed from the captured error.
    ///
    /// The result is always a `Success`. On a `Success` input the closure is
    /// never invoked.
    ///
    /// # Arguments
    ///
    /// * `f` - Maps the captured error to a fallback value
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let t = Try::<i32>::failure("boom").recover(|_| -1);
    /// assert_eq!(t.into_value(), Some(-1));
    /// ```
    #[inline]
    pub fn recover<F>(self, f: F) -> Try<T>
    where
        F: FnOnce(Captured) -> T,
    {
        match self {
            Try::Success(value) => Try::Success(value),
            Try::Failure(error) => Try::Success(f(error)),
        }
    }

    /// Attempts to replace a failure with a fallible recovery computation.
    ///
    /// On `Ok` the chain continues with the recovered value. On `Err` the new
    /// error is captured and the original failure is attached to it as a
    /// cause, so neither error is lost.
    ///
    /// # Arguments
    ///
    /// * `f` - Fallible recovery receiving the captured error by reference
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let t = Try::<i32>::failure("primary down")
    ///     .try_recover(|_| Err::<i32, _>("replica down"));
    ///
    /// let error = t.unwrap_failure();
    /// assert_eq!(error.message(), "replica down");
    /// assert_eq!(error.causes()[0].message(), "primary down");
    /// ```
    pub fn try_recover<E, F>(self, f: F) -> Try<T>
    where
        F: FnOnce(&Captured) -> Result<T, E>,
        E: IntoCaptured,
    {
        match self {
            Try::Success(value) => Try::Success(value),
            Try::Failure(error) => match f(&error) {
                Ok(value) => Try::Success(value),
                Err(next) => Try::Failure(next.into_captured().with_cause(error)),
            },
        }
    }

    /// Replaces a failure with a whole new `Try` built from the error.
    ///
    /// The closure is trusted: its `Try` is returned as-is. This is the
    /// failure-side dual of [`and_then`](Self::and_then).
    ///
    /// # Arguments
    ///
    /// * `f` - Maps the captured error to the replacement `Try`
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::{CauseKind, Try};
    ///
    /// let t = Try::<i32>::failure("boom").recover_with(|e| {
    ///     if e.kind() == CauseKind::Predicate {
    ///         Try::success(0)
    ///     } else {
    ///         Try::Failure(e)
    ///     }
    /// });
    /// assert!(t.is_failure());
    /// ```
    #[inline]
    pub fn recover_with<F>(self, f: F) -> Try<T>
    where
        F: FnOnce(Captured) -> Try<T>,
    {
        match self {
            Try::Success(value) => Try::Success(value),
            Try::Failure(error) => f(error),
        }
    }

    /// Maps both variants to a new `Try` in a single step.
    ///
    /// Exactly one of the two closures runs. Both are trusted: their results
    /// are returned as-is.
    ///
    /// # Arguments
    ///
    /// * `on_success` - Maps the success value to the next `Try`
    /// * `on_failure` - Maps the captured error to the next `Try`
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let t = Try::success(2).transform(
    ///     |n| Try::success(n * 10),
    ///     |_| Try::success(0),
    /// );
    /// assert_eq!(t.into_value(), Some(20));
    /// ```
    #[inline]
    pub fn transform<U, S, F>(self, on_success: S, on_failure: F) -> Try<U>
    where
        S: FnOnce(T) -> Try<U>,
        F: FnOnce(Captured) -> Try<U>,
    {
        match self {
            Try::Success(value) => on_success(value),
            Try::Failure(error) => on_failure(error),
        }
    }

    /// Consumes the success value with a fallible side effect.
    ///
    /// The value is handed to `f` and discarded; the outcome of the effect is
    /// all that remains. An `Err` return is captured, and a `Failure` input
    /// passes through without invoking `f`.
    ///
    /// # Arguments
    ///
    /// * `f` - Side effect run on the success value
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let mut log = Vec::new();
    /// let outcome = Try::success(5).apply(|n| {
    ///     log.push(n);
    ///     Ok::<_, &str>(())
    /// });
    /// assert!(outcome.is_success());
    /// assert_eq!(log, [5]);
    /// ```
    pub fn apply<E, F>(self, f: F) -> TryUnit
    where
        F: FnOnce(T) -> Result<(), E>,
        E: IntoCaptured,
    {
        match self {
            Try::Success(value) => Try::from_result(f(value)),
            Try::Failure(error) => Try::Failure(error),
        }
    }

    /// Peeks at the success value without consuming it.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let mut seen = None;
    /// let t = Try::success(3).on_success(|n| seen = Some(*n));
    /// assert_eq!(seen, Some(3));
    /// assert!(t.is_success());
    /// ```
    #[inline]
    pub fn on_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Try::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Peeks at the captured error without consuming it.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let mut seen = None;
    /// let t = Try::<i32>::failure("boom").on_failure(|e| seen = Some(e.message().len()));
    /// assert_eq!(seen, Some(4));
    /// assert!(t.is_failure());
    /// ```
    #[inline]
    pub fn on_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&Captured),
    {
        if let Try::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Rewrites the captured error, leaving a success untouched.
    ///
    /// # Arguments
    ///
    /// * `f` - Maps the captured error to its replacement
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::{Captured, Try};
    ///
    /// let t = Try::<i32>::failure("boom")
    ///     .map_failure(|e| Captured::new(format!("stage two: {}", e.message())));
    /// assert_eq!(t.unwrap_failure().message(), "stage two: boom");
    /// ```
    #[inline]
    pub fn map_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(Captured) -> Captured,
    {
        match self {
            Try::Success(value) => Try::Success(value),
            Try::Failure(error) => Try::Failure(f(error)),
        }
    }

    /// Prefixes a failure with higher-level context.
    ///
    /// The note becomes the new top-level error and the original failure is
    /// attached as its cause. A success passes through unchanged.
    ///
    /// # Arguments
    ///
    /// * `note` - Context describing the operation that failed
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let t = Try::<i32>::failure("connection refused").annotate("loading profile");
    ///
    /// let error = t.unwrap_failure();
    /// assert_eq!(error.message(), "loading profile");
    /// assert_eq!(error.causes()[0].message(), "connection refused");
    /// ```
    pub fn annotate<E>(self, note: E) -> Self
    where
        E: IntoCaptured,
    {
        match self {
            Try::Success(value) => Try::Success(value),
            Try::Failure(error) => Try::Failure(note.into_captured().with_cause(error)),
        }
    }
}

impl<T> Try<Try<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let nested = Try::success(Try::success(1));
    /// assert_eq!(nested.flatten().into_value(), Some(1));
    /// ```
    #[inline]
    pub fn flatten(self) -> Try<T> {
        self.and_then(|inner| inner)
    }
}
