//! Conversion helpers between `Result`, `Option`, and [`Try`].
//!
//! These adapters make it straightforward to adopt `try-rail` incrementally
//! by lifting legacy results onto the rail, or by lowering a [`Try`] back
//! into core types when talking to external APIs.
//!
//! # Examples
//!
//! ```
//! use try_rail::convert::*;
//! use try_rail::Try;
//!
//! // Lift a Result onto the rail
//! let t = result_to_try("42".parse::<i32>());
//! assert!(t.is_success());
//!
//! // Keep only the values that parsed
//! let parsed = ["1", "x", "3"].map(|s| Try::of(|| s.parse::<i32>()));
//! let values: Vec<i32> = successes(parsed).collect();
//! assert_eq!(values, [1, 3]);
//! ```

use core::iter::FusedIterator;

use crate::traits::IntoCaptured;
use crate::try_::Try;
use crate::types::Captured;

/// Converts a `Result` to a [`Try`], capturing the error side.
///
/// # Arguments
///
/// * `result` - The result to convert
///
/// # Returns
///
/// * `Try::Success(value)` if the result is `Ok`
/// * `Try::Failure(captured)` if the result is `Err`
///
/// # Examples
///
/// ```
/// use try_rail::convert::result_to_try;
///
/// let t = result_to_try("42".parse::<i32>());
/// assert_eq!(t.into_value(), Some(42));
/// ```
#[inline]
pub fn result_to_try<T, E>(result: Result<T, E>) -> Try<T>
where
    E: IntoCaptured,
{
    Try::from_result(result)
}

/// Converts a [`Try`] to a `Result` over the captured error.
///
/// # Arguments
///
/// * `t` - The `Try` to convert
///
/// # Returns
///
/// * `Ok(value)` if the `Try` is a `Success`
/// * `Err(captured)` if the `Try` is a `Failure`
///
/// # Examples
///
/// ```
/// use try_rail::convert::try_to_result;
/// use try_rail::Try;
///
/// assert_eq!(try_to_result(Try::success(7)).ok(), Some(7));
/// assert!(try_to_result(Try::<i32>::failure("boom")).is_err());
/// ```
#[inline]
pub fn try_to_result<T>(t: Try<T>) -> Result<T, Captured> {
    t.into_result()
}

/// Converts an `Option` to a [`Try`], supplying the error for `None`.
///
/// # Arguments
///
/// * `option` - The option to convert
/// * `error` - The error captured when the option is `None`
///
/// # Returns
///
/// * `Try::Success(value)` if the option is `Some`
/// * `Try::Failure(captured)` if the option is `None`
///
/// # Examples
///
/// ```
/// use try_rail::convert::option_to_try;
///
/// let t = option_to_try(Some(3), "missing");
/// assert_eq!(t.into_value(), Some(3));
///
/// let t = option_to_try(None::<i32>, "missing");
/// assert_eq!(t.unwrap_failure().message(), "missing");
/// ```
#[inline]
pub fn option_to_try<T, E>(option: Option<T>, error: E) -> Try<T>
where
    E: IntoCaptured,
{
    match option {
        Some(value) => Try::Success(value),
        None => Try::Failure(error.into_captured()),
    }
}

/// Converts a [`Try`] to an `Option`, discarding the captured error.
///
/// # Arguments
///
/// * `t` - The `Try` to convert
///
/// # Returns
///
/// * `Some(value)` if the `Try` is a `Success`
/// * `None` if the `Try` is a `Failure`
///
/// # Examples
///
/// ```
/// use try_rail::convert::try_to_option;
/// use try_rail::Try;
///
/// assert_eq!(try_to_option(Try::success(7)), Some(7));
/// assert_eq!(try_to_option(Try::<i32>::failure("boom")), None);
/// ```
#[inline]
pub fn try_to_option<T>(t: Try<T>) -> Option<T> {
    t.into_value()
}

/// Iterator returned by [`successes`].
pub struct Successes<I> {
    inner: I,
}

impl<T, I> Iterator for Successes<I>
where
    I: Iterator<Item = Try<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(Try::into_value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<T, I> FusedIterator for Successes<I> where I: Iterator<Item = Try<T>> + FusedIterator {}

/// Keeps only the success values of a sequence of [`Try`]s.
///
/// Failures are skipped silently; use [`failures`] to inspect them instead.
///
/// # Arguments
///
/// * `tries` - An iterable of `Try` values
///
/// # Returns
///
/// An iterator over the values of the `Success` elements, in order
///
/// # Examples
///
/// ```
/// use try_rail::convert::successes;
/// use try_rail::Try;
///
/// let tries = [Try::success(1), Try::failure("skip"), Try::success(3)];
/// let values: Vec<i32> = successes(tries).collect();
/// assert_eq!(values, [1, 3]);
/// ```
#[inline]
pub fn successes<T, I>(tries: I) -> Successes<I::IntoIter>
where
    I: IntoIterator<Item = Try<T>>,
{
    Successes {
        inner: tries.into_iter(),
    }
}

/// Iterator returned by [`failures`].
pub struct Failures<I> {
    inner: I,
}

impl<T, I> Iterator for Failures<I>
where
    I: Iterator<Item = Try<T>>,
{
    type Item = Captured;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(Try::into_error)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<T, I> FusedIterator for Failures<I> where I: Iterator<Item = Try<T>> + FusedIterator {}

/// Keeps only the captured errors of a sequence of [`Try`]s.
///
/// # Arguments
///
/// * `tries` - An iterable of `Try` values
///
/// # Returns
///
/// An iterator over the errors of the `Failure` elements, in order
///
/// # Examples
///
/// ```
/// use try_rail::convert::failures;
/// use try_rail::Try;
///
/// let tries = [Try::success(1), Try::failure("bad row"), Try::success(3)];
/// let messages: Vec<String> = failures(tries).map(|e| e.message().to_string()).collect();
/// assert_eq!(messages, ["bad row"]);
/// ```
#[inline]
pub fn failures<T, I>(tries: I) -> Failures<I::IntoIter>
where
    I: IntoIterator<Item = Try<T>>,
{
    Failures {
        inner: tries.into_iter(),
    }
}
