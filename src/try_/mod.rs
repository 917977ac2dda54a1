//! The [`Try`] type: a fallible computation captured as a value.
//!
//! This module provides the two-variant [`Try`] container and the factories
//! that build one. The combinator set lives in submodules and is exposed as
//! inherent methods:
//!
//! - Transformation and chaining: [`map`](Try::map), [`try_map`](Try::try_map),
//!   [`and_then`](Try::and_then), [`filter`](Try::filter)
//! - Recovery: [`or`](Try::or), [`or_else`](Try::or_else),
//!   [`recover`](Try::recover), [`recover_with`](Try::recover_with)
//! - Bounded re-attempts: [`retry`](Try::retry)
//! - Pairwise combination: [`zip`](Try::zip), [`zip_with`](Try::zip_with)
//! - Scoped resources: [`using`](Try::using), [`bracket`](Try::bracket)
//!
//! # Examples
//!
//! ```
//! use try_rail::Try;
//!
//! let port = Try::of(|| "8080".parse::<u16>())
//!     .filter(|port| *port >= 1024)
//!     .map(|port| port + 1);
//!
//! assert_eq!(port.into_value(), Some(8081));
//! ```

use crate::traits::IntoCaptured;
use crate::types::Captured;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod combinators;
mod iter;
mod retry;
mod scoped;
mod zip;

pub use iter::{IntoIter, Iter, IterMut};

/// The outcome of a computation that may fail, captured as a value.
///
/// `Try<T>` represents a computation that either succeeded with a value of
/// type `T` or failed with a [`Captured`] error. Exactly one variant is ever
/// populated, instances are immutable, and every combinator consumes `self`
/// and produces a fresh value; failures travel through chains as ordinary
/// data instead of unwinding the calling thread.
///
/// # Accessor Policy
///
/// Accessors are strict: [`unwrap`](Self::unwrap) and [`expect`](Self::expect)
/// panic on the wrong variant. Lenient access is always explicit, via
/// [`unwrap_or`](Self::unwrap_or), [`unwrap_or_else`](Self::unwrap_or_else)
/// or [`unwrap_or_default`](Self::unwrap_or_default).
///
/// # Serde Support
///
/// `Try` implements `Serialize` and `Deserialize` when `T` does and the
/// `serde` feature is enabled.
///
/// # Type Parameters
///
/// * `T` - The success value type
///
/// # Variants
///
/// * `Success(T)` - Contains the successful value
/// * `Failure(Captured)` - Contains the captured error
///
/// # Examples
///
/// ```
/// use try_rail::Try;
///
/// let ok = Try::of(|| "42".parse::<i32>());
/// assert!(ok.is_success());
///
/// let err = Try::of(|| "4x".parse::<i32>());
/// assert!(err.is_failure());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Try<T> {
    Success(T),
    Failure(Captured),
}

impl<T> Try<T> {
    /// Runs a fallible computation now, capturing its error as a value.
    ///
    /// This factory is the single conversion point from error values to
    /// `Failure`: an `Ok` return becomes `Success`, an `Err` return becomes
    /// `Failure` with the error captured. No error is filtered or rethrown.
    ///
    /// # Arguments
    ///
    /// * `computation` - The fallible computation to run
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let parsed = Try::of(|| "42".parse::<i32>());
    /// assert_eq!(parsed.into_value(), Some(42));
    ///
    /// let failed = Try::of(|| "4x".parse::<i32>());
    /// assert!(failed.is_failure());
    /// ```
    #[inline]
    pub fn of<E, F>(computation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: IntoCaptured,
    {
        Self::from_result(computation())
    }

    /// Runs an infallible-looking computation, capturing a panic as a value.
    ///
    /// The closure is executed under `std::panic::catch_unwind` with unwind
    /// safety asserted; the closure is consumed and this `Try` is the only
    /// observer of the outcome. A panic becomes a `Failure` whose kind is
    /// [`CauseKind::Panic`](crate::CauseKind::Panic) and whose message is the
    /// panic payload.
    ///
    /// Prefer [`Try::of`] for computations that already return `Result`; use
    /// `catch` at boundaries where panics are the failure mode.
    ///
    /// # Arguments
    ///
    /// * `computation` - The computation to run
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::{CauseKind, Try};
    ///
    /// let divided = Try::catch(|| {
    ///     let zero: i32 = "0".parse().unwrap();
    ///     5 / zero
    /// });
    ///
    /// assert_eq!(divided.error().map(|e| e.kind()), Some(CauseKind::Panic));
    /// ```
    #[cfg(feature = "std")]
    pub fn catch<F>(computation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(computation)) {
            Ok(value) => Try::Success(value),
            Err(payload) => Try::Failure(Captured::from_panic(payload.as_ref())),
        }
    }

    /// Creates a successful `Try` directly.
    ///
    /// # Arguments
    ///
    /// * `value` - The success value to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let t = Try::success(42);
    /// assert_eq!(t.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Try::Success(value)
    }

    /// Creates a failed `Try` directly.
    ///
    /// # Arguments
    ///
    /// * `error` - Anything convertible into a [`Captured`] error
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let t = Try::<i32>::failure("no such user");
    /// assert!(t.is_failure());
    /// ```
    #[inline]
    pub fn failure<E: IntoCaptured>(error: E) -> Self {
        Try::Failure(error.into_captured())
    }

    /// Converts a `Result` into a `Try`, capturing the error side.
    ///
    /// # Arguments
    ///
    /// * `result` - The result to convert
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let t = Try::from_result("7".parse::<i32>());
    /// assert_eq!(t.into_value(), Some(7));
    /// ```
    #[inline]
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: IntoCaptured,
    {
        match result {
            Ok(value) => Try::Success(value),
            Err(error) => Try::Failure(error.into_captured()),
        }
    }

    /// Returns `true` if this is a `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// assert!(Try::success(1).is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Try::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    ///
    /// `is_success` and `is_failure` are complements; exactly one of them is
    /// true for any `Try`.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// assert!(Try::<i32>::failure("boom").is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the success value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let t = Try::success(5);
    /// assert_eq!(t.value(), Some(&5));
    /// ```
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Try::Success(value) => Some(value),
            Try::Failure(_) => None,
        }
    }

    /// Borrows the captured error, if any.
    ///
    /// Returns `None` on `Success`; this accessor never panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let t = Try::<i32>::failure("boom");
    /// assert_eq!(t.error().map(|e| e.message()), Some("boom"));
    /// assert_eq!(Try::success(1).error(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&Captured> {
        match self {
            Try::Success(_) => None,
            Try::Failure(error) => Some(error),
        }
    }

    /// Extracts the success value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// assert_eq!(Try::success(42).into_value(), Some(42));
    /// assert_eq!(Try::<i32>::failure("boom").into_value(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Try::Success(value) => Some(value),
            Try::Failure(_) => None,
        }
    }

    /// Extracts the captured error, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let error = Try::<i32>::failure("boom").into_error().unwrap();
    /// assert_eq!(error.message(), "boom");
    /// ```
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<Captured> {
        match self {
            Try::Success(_) => None,
            Try::Failure(error) => Some(error),
        }
    }

    /// Converts into a `Result`, mapping `Success` to `Ok` and `Failure` to
    /// `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// assert_eq!(Try::success(3).into_result().ok(), Some(3));
    /// assert!(Try::<i32>::failure("boom").into_result().is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, Captured> {
        match self {
            Try::Success(value) => Ok(value),
            Try::Failure(error) => Err(error),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`, with the captured error's message.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// assert_eq!(Try::success(2).unwrap(), 2);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Try::Success(value) => value,
            Try::Failure(error) => panic!("called `Try::unwrap()` on a `Failure`: {error}"),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`, with the provided message followed by
    /// the captured error.
    ///
    /// # Arguments
    ///
    /// * `msg` - The panic message prefix
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// assert_eq!(Try::success("ok").expect("must parse"), "ok");
    /// ```
    #[inline]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Try::Success(value) => value,
            Try::Failure(error) => panic!("{msg}: {error}"),
        }
    }

    /// Returns the captured error.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let error = Try::<i32>::failure("boom").unwrap_failure();
    /// assert_eq!(error.message(), "boom");
    /// ```
    pub fn unwrap_failure(self) -> Captured {
        match self {
            Try::Success(_) => panic!("called `Try::unwrap_failure()` on a `Success` value"),
            Try::Failure(error) => error,
        }
    }

    /// Returns the success value or the provided default.
    ///
    /// # Arguments
    ///
    /// * `default` - The value to use on `Failure`
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// assert_eq!(Try::<i32>::failure("boom").unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Try::Success(value) => value,
            Try::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the captured error.
    ///
    /// # Arguments
    ///
    /// * `op` - Fallback computation receiving the captured error
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let len = Try::<usize>::failure("boom").unwrap_or_else(|e| e.message().len());
    /// assert_eq!(len, 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(Captured) -> T,
    {
        match self {
            Try::Success(value) => value,
            Try::Failure(error) => op(error),
        }
    }

    /// Returns the success value or the type's default.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// assert_eq!(Try::<i32>::failure("boom").unwrap_or_default(), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Applies exactly one of two callbacks, depending on the variant.
    ///
    /// Runs synchronously on the calling thread. The callbacks are trusted:
    /// a panic inside either one propagates to the caller rather than being
    /// captured.
    ///
    /// # Arguments
    ///
    /// * `on_success` - Invoked with the value if this is a `Success`
    /// * `on_failure` - Invoked with the error if this is a `Failure`
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let text = Try::success(5).fold(
    ///     |n| format!("got {n}"),
    ///     |e| format!("failed: {e}"),
    /// );
    /// assert_eq!(text, "got 5");
    /// ```
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Captured) -> R,
    {
        match self {
            Try::Success(value) => on_success(value),
            Try::Failure(error) => on_failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Try<T>
where
    E: IntoCaptured,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}
