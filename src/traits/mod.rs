//! Core traits for entering the [`Try`](crate::Try) rail.
//!
//! This module defines the conversion seams between ordinary fallible Rust
//! and the combinator chain:
//!
//! - [`IntoCaptured`]: Conversion trait turning error values into a
//!   [`Captured`](crate::types::Captured) failure
//! - [`IntoTry`]: Postfix conversion from `Result` into a `Try`
//! - [`OptionTryExt`]: Conversion from `Option` into a `Try` with an explicit
//!   error for `None`
//!
//! # Examples
//!
//! ```
//! use try_rail::traits::{IntoCaptured, IntoTry};
//!
//! let error = "missing header".into_captured();
//! assert_eq!(error.message(), "missing header");
//!
//! let parsed = "42".parse::<i32>().into_try();
//! assert!(parsed.is_success());
//! ```

pub mod into_captured;
pub mod into_try;

pub use into_captured::IntoCaptured;
pub use into_try::{IntoTry, OptionTryExt};
