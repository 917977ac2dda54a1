//! Trait for converting error values into a [`Captured`] failure.
//!
//! This trait is the single doorway through which error values enter a
//! [`Try`](crate::Try): everything a fallible closure can return as `Err`
//! must implement it.
//!
//! # Implementations
//!
//! The trait is implemented for common types:
//! - `String`, `&'static str`, `Cow<'static, str>` - become message errors
//! - `Captured` - identity conversion (no-op)
//! - The parse and conversion errors of `core` and `alloc` - become error-kind
//!   failures with their source chain preserved
//! - `std::io::Error` (requires the `std` feature)
//! - `Infallible` - can never be converted, since no value of it exists
//!
//! # Examples
//!
//! ```
//! use try_rail::{CauseKind, IntoCaptured};
//!
//! let from_text = "disk full".into_captured();
//! assert_eq!(from_text.kind(), CauseKind::Message);
//!
//! let from_error = "4x".parse::<i32>().unwrap_err().into_captured();
//! assert_eq!(from_error.kind(), CauseKind::Error);
//! ```

#[cfg(not(feature = "std"))]
use alloc::borrow::Cow;
#[cfg(not(feature = "std"))]
use alloc::string::{FromUtf8Error, String};
#[cfg(feature = "std")]
use std::borrow::Cow;
#[cfg(feature = "std")]
use std::string::{FromUtf8Error, String};

use crate::types::Captured;

/// Converts a value into a [`Captured`] error.
///
/// Fallible closures handed to [`Try::of`](crate::Try::of),
/// [`try_map`](crate::Try::try_map) and friends may use any `Err` type that
/// implements this trait; the conversion runs once, at the moment the error
/// crosses into a `Failure`.
///
/// # Implementing for Custom Types
///
/// If your error type implements `core::error::Error`, derive the impl with
/// the [`impl_into_captured!`](crate::impl_into_captured) macro:
///
/// ```ignore
/// impl_into_captured!(MyError);
/// ```
///
/// Otherwise implement the trait manually:
///
/// ```
/// use try_rail::{Captured, IntoCaptured};
///
/// struct Denied { user_id: u64 }
///
/// impl IntoCaptured for Denied {
///     fn into_captured(self) -> Captured {
///         Captured::new(format!("access denied for user {}", self.user_id))
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be captured as a failure",
    label = "this type does not implement `IntoCaptured`",
    note = "implement `IntoCaptured` manually or use `impl_into_captured!({Self})` for error types",
    note = "see: https://docs.rs/try-rail/latest/try_rail/macro.impl_into_captured.html"
)]
pub trait IntoCaptured {
    /// Converts `self` into a [`Captured`] error.
    fn into_captured(self) -> Captured;
}

impl IntoCaptured for Captured {
    /// Identity conversion for `Captured` (no-op).
    #[inline]
    fn into_captured(self) -> Captured {
        self
    }
}

impl IntoCaptured for String {
    /// Converts an owned `String` into a message error.
    #[inline]
    fn into_captured(self) -> Captured {
        Captured::new(self)
    }
}

impl IntoCaptured for &'static str {
    /// Converts a static string slice into a message error.
    #[inline]
    fn into_captured(self) -> Captured {
        Captured::new(self)
    }
}

impl IntoCaptured for Cow<'static, str> {
    /// Converts a Cow string into a message error.
    #[inline]
    fn into_captured(self) -> Captured {
        Captured::new(self)
    }
}

impl IntoCaptured for core::convert::Infallible {
    /// A value of `Infallible` cannot exist, so this can never run.
    #[inline]
    fn into_captured(self) -> Captured {
        match self {}
    }
}

crate::impl_into_captured!(
    core::num::ParseIntError,
    core::num::ParseFloatError,
    core::num::TryFromIntError,
    core::str::ParseBoolError,
    core::str::Utf8Error,
    core::char::CharTryFromError,
    FromUtf8Error,
);

#[cfg(feature = "std")]
crate::impl_into_captured!(std::io::Error);
