//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `try_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Capturing a Fallible Computation
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
//!
//! ## Recovery and Retry
//!
//! ```
//! use std::cell::Cell;
//!
//! use try_rail::Try;
//!
//! let calls = Cell::new(0);
//! let answer = Try::success("6*7")
//!     .retry(
//!         |_| {
//!             calls.set(calls.get() + 1);
//!             if calls.get() < 2 {
//!                 Err("warming up")
//!             } else {
//!                 Ok(42)
//!             }
//!         },
//!         3,
//!     )
//!     .recover(|_| 0);
//!
//! assert_eq!(answer.into_value(), Some(42));
//! assert_eq!(calls.get(), 2);
//! ```
//!
//! ## Scoped Resources
//!
//! ```
//! use try_rail::Try;
//!
//! let report = Try::success(vec![3, 1, 2]).using(
//!     || Ok::<_, &str>(String::new()),
//!     |out, mut values| {
//!         values.sort_unstable();
//!         for v in &values {
//!             out.push_str(&v.to_string());
//!         }
//!         Ok::<_, &str>(out.len())
//!     },
//! );
//!
//! assert_eq!(report.into_value(), Some(3));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversion helpers between Result, Option, and Try
pub mod convert;
/// Macros for building Try values and Captured errors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for entering the Try rail
pub mod traits;
/// The Try type and its combinator algebra
pub mod try_;
/// Captured error structures
pub mod types;

/// Advanced API level for library authors
pub mod advanced;
/// Intermediate API level for service developers
pub mod intermediate;
/// Simple API level for getting started
pub mod simple;

/// Tracing integration - span annotation and failure events (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod trace;

// Re-export common types that might be needed at root,
// but encourage using prelude/intermediate/advanced modules.
pub use convert::*;
pub use traits::*;
pub use try_::{IntoIter, Iter, IterMut, Try};
pub use types::{Captured, Cause, CauseKind, CauseVec, TryUnit};
