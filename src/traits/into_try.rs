//! Extension traits for moving `Result` and `Option` values onto the
//! [`Try`](crate::Try) rail.
//!
//! These traits let existing fallible code enter a combinator chain without
//! an intermediate `match` or `Try::from_result` call.
//!
//! # Examples
//!
//! ```
//! use try_rail::{IntoTry, OptionTryExt};
//!
//! let parsed = "42".parse::<i32>().into_try();
//! assert_eq!(parsed.into_value(), Some(42));
//!
//! let found = [1, 2, 3].iter().find(|n| **n > 2).into_try_or("no match");
//! assert!(found.is_success());
//! ```

use crate::traits::IntoCaptured;
use crate::try_::Try;

/// Converts a `Result` into a [`Try`], capturing the error side.
///
/// This is the postfix form of [`Try::from_result`]: useful at the end of a
/// `Result` chain, where a constructor call would read inside-out.
///
/// # Examples
///
/// ```
/// use try_rail::IntoTry;
///
/// let port = "8080"
///     .parse::<u16>()
///     .map_err(|e| e.to_string())
///     .into_try()
///     .filter(|port| *port >= 1024);
/// assert!(port.is_success());
/// ```
pub trait IntoTry<T> {
    /// Converts `self` into a [`Try`].
    fn into_try(self) -> Try<T>;
}

impl<T, E> IntoTry<T> for Result<T, E>
where
    E: IntoCaptured,
{
    #[inline]
    fn into_try(self) -> Try<T> {
        Try::from_result(self)
    }
}

/// Converts an `Option` into a [`Try`], supplying the error for `None`.
///
/// # Examples
///
/// ```
/// use try_rail::OptionTryExt;
///
/// let missing: Option<i32> = None;
/// let t = missing.into_try_or("value was never set");
/// assert_eq!(t.unwrap_failure().message(), "value was never set");
/// ```
pub trait OptionTryExt<T> {
    /// Converts `Some` into `Success` and `None` into a `Failure` carrying
    /// the given error.
    ///
    /// # Arguments
    ///
    /// * `error` - The error to capture when `self` is `None`
    fn into_try_or<E: IntoCaptured>(self, error: E) -> Try<T>;

    /// Converts `Some` into `Success` and `None` into a `Failure`, building
    /// the error lazily.
    ///
    /// The closure runs only on `None`, so a costly message is never built on
    /// the success path.
    ///
    /// # Arguments
    ///
    /// * `f` - Produces the error to capture when `self` is `None`
    fn into_try_or_else<E, F>(self, f: F) -> Try<T>
    where
        E: IntoCaptured,
        F: FnOnce() -> E;
}

impl<T> OptionTryExt<T> for Option<T> {
    #[inline]
    fn into_try_or<E: IntoCaptured>(self, error: E) -> Try<T> {
        match self {
            Some(value) => Try::Success(value),
            None => Try::Failure(error.into_captured()),
        }
    }

    #[inline]
    fn into_try_or_else<E, F>(self, f: F) -> Try<T>
    where
        E: IntoCaptured,
        F: FnOnce() -> E,
    {
        match self {
            Some(value) => Try::Success(value),
            None => Try::Failure(f().into_captured()),
        }
    }
}
