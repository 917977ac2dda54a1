//! Intermediate API level for service developers.
//!
//! This module provides the batch and boundary tooling suitable for service
//! layer development: bulk conversions, success/failure sifting, and the
//! panic-capturing entry point.

// Bulk Conversion and Sifting
pub use crate::convert::{
    failures, option_to_try, result_to_try, successes, try_to_option, try_to_result, Failures,
    Successes,
};

// Deriving IntoCaptured for Error Types
pub use crate::impl_into_captured;

// Panic Capture
#[cfg(feature = "std")]
pub use crate::catch;

// Span Annotation
#[cfg(feature = "tracing")]
pub use crate::trace::SpanTryExt;
