//! Error payload types carried by the `Failure` variant of [`Try`](crate::Try).
//!
//! This module provides [`Captured`], the structured error value, together
//! with its [`Cause`] frames and the aliases used across the crate.
//!
//! # Examples
//!
//! ```
//! use try_rail::{Captured, CauseKind};
//!
//! let err = Captured::new("database connection failed")
//!     .with_cause(Captured::new("connection refused"));
//!
//! println!("{}", err.chain());
//! // Output: database connection failed -> connection refused
//! ```
use smallvec::SmallVec;

pub mod captured;

pub use captured::{Captured, Cause, CauseKind};

/// SmallVec-backed collection used for cause chains.
///
/// Uses inline storage for a single element to avoid heap allocations in
/// the common case where a captured error has at most one cause.
pub type CauseVec = SmallVec<[Cause; 1]>;

/// A `Try` that carries no value, only success or failure.
///
/// Used by operations whose purpose is a side effect, such as
/// [`Try::apply`](crate::Try::apply).
pub type TryUnit = crate::try_::Try<()>;
