//! Ergonomic macros for building [`Try`](crate::Try) values and
//! [`Captured`](crate::types::Captured) errors.
//!
//! These macros provide convenient shorthands for the most common entry
//! points:
//!
//! - [`macro@crate::attempt`] - Wraps a `Result`-producing block into a
//!   [`Try`](crate::Try) via [`Try::of`](crate::Try::of), so `?` works inside.
//! - [`macro@crate::captured`] - Builds a [`Captured`](crate::types::Captured)
//!   message error with `format!` syntax.
//! - [`macro@crate::catch`] - Wraps a block into a panic-capturing
//!   [`Try`](crate::Try) via [`Try::catch`](crate::Try::catch) (requires the
//!   `std` feature).
//! - [`macro@crate::impl_into_captured`] - Derives
//!   [`IntoCaptured`](crate::traits::IntoCaptured) for types implementing
//!   `core::error::Error`.
//!
//! # Examples
//!
//! ```
//! use try_rail::{attempt, captured};
//!
//! let t = attempt! {
//!     let n: i32 = "21".parse()?;
//!     Ok::<_, core::num::ParseIntError>(n * 2)
//! };
//! assert_eq!(t.into_value(), Some(42));
//!
//! let error = captured!("user {} not found", 7);
//! assert_eq!(error.message(), "user 7 not found");
//! ```

/// Wraps a `Result`-producing expression or block into a [`Try`](crate::Try).
///
/// The body becomes the closure handed to [`Try::of`](crate::Try::of), so the
/// `?` operator works inside it and any captured variables are moved in.
///
/// # Syntax
///
/// - `attempt!(expr)` - Wraps a single `Result`-producing expression
/// - `attempt!({ ... })` - Wraps a block that produces a `Result`
///
/// # Examples
///
/// ```
/// use try_rail::attempt;
///
/// // Single expression
/// let parsed = attempt!("42".parse::<i32>());
/// assert_eq!(parsed.into_value(), Some(42));
///
/// // Block syntax with `?`
/// let total = attempt! {
///     let a: i32 = "20".parse()?;
///     let b: i32 = "22".parse()?;
///     Ok::<_, core::num::ParseIntError>(a + b)
/// };
/// assert_eq!(total.into_value(), Some(42));
/// ```
#[macro_export]
macro_rules! attempt {
    ($($body:tt)*) => {
        $crate::Try::of(move || { $($body)* })
    };
}

/// Builds a [`Captured`](crate::types::Captured) message error with `format!`
/// syntax.
///
/// # Arguments
///
/// Accepts the same arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use try_rail::{captured, Try};
///
/// let t = Try::<i32>::Failure(captured!("row {} is malformed", 12));
/// assert_eq!(t.unwrap_failure().message(), "row 12 is malformed");
/// ```
#[macro_export]
macro_rules! captured {
    ($($arg:tt)*) => {
        $crate::types::Captured::new(format!($($arg)*))
    };
}

/// Wraps an expression or block into a panic-capturing [`Try`](crate::Try).
///
/// The body becomes the closure handed to [`Try::catch`](crate::Try::catch);
/// a panic inside it is captured as a `Failure` instead of unwinding the
/// caller.
///
/// # Examples
///
/// ```
/// use try_rail::catch;
///
/// let first = catch! {
///     let values: Vec<i32> = Vec::new();
///     values[0]
/// };
/// assert!(first.is_failure());
/// ```
#[cfg(feature = "std")]
#[macro_export]
macro_rules! catch {
    ($($body:tt)*) => {
        $crate::Try::catch(move || { $($body)* })
    };
}

/// Implements [`IntoCaptured`](crate::traits::IntoCaptured) for one or more
/// error types.
///
/// The generated impl captures the value through
/// [`Captured::from_error`](crate::types::Captured::from_error), so the
/// type's `source()` chain is preserved as causes. Each listed type must
/// implement `core::error::Error`.
///
/// # Examples
///
/// ```
/// use std::fmt;
///
/// use try_rail::{impl_into_captured, CauseKind, IntoCaptured};
///
/// #[derive(Debug)]
/// struct QuotaExceeded {
///     limit: u32,
/// }
///
/// impl fmt::Display for QuotaExceeded {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "quota of {} exceeded", self.limit)
///     }
/// }
///
/// impl std::error::Error for QuotaExceeded {}
///
/// impl_into_captured!(QuotaExceeded);
///
/// let error = QuotaExceeded { limit: 100 }.into_captured();
/// assert_eq!(error.kind(), CauseKind::Error);
/// assert_eq!(error.message(), "quota of 100 exceeded");
/// ```
#[macro_export]
macro_rules! impl_into_captured {
    ($($type:ty),+ $(,)?) => {
        $(
            impl $crate::traits::IntoCaptured for $type {
                #[inline]
                fn into_captured(self) -> $crate::types::Captured {
                    $crate::types::Captured::from_error(&self)
                }
            }
        )+
    };
}
