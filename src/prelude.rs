//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use try_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`attempt!`], [`captured!`]
//! - **Types**: [`Try`], [`TryUnit`], [`Captured`], [`CauseKind`]
//! - **Traits**: [`IntoCaptured`], [`IntoTry`], [`OptionTryExt`]
//!
//! # Examples
//!
//! ## 30-Second Quick Start
//!
//! ```
//! use try_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> Try<u16> {
//!     attempt!(raw.parse::<u16>()).filter(|port| *port >= 1024)
//! }
//!
//! assert!(parse_port("8080").is_success());
//! assert!(parse_port("80").is_failure());
//! assert!(parse_port("eighty").is_failure());
//! ```
//!
//! ## Lifting Existing Results
//!
//! ```
//! use try_rail::prelude::*;
//!
//! fn halve(raw: &str) -> Try<i32> {
//!     raw.parse::<i32>()
//!         .into_try()
//!         .try_map(|n| n.checked_div(2).ok_or(captured!("cannot halve {n}")))
//! }
//!
//! assert_eq!(halve("42").into_value(), Some(21));
//! ```

// Macros
pub use crate::{attempt, captured};

#[cfg(feature = "std")]
pub use crate::catch;

// Core types
pub use crate::try_::Try;
pub use crate::types::{Captured, CauseKind, TryUnit};

// Traits
pub use crate::traits::{IntoCaptured, IntoTry, OptionTryExt};
