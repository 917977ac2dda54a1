//! Tracing integration for try-rail.
//!
//! This module provides utilities for integrating try-rail with the
//! `tracing` ecosystem: annotating failures with the span they occurred in
//! and emitting events for failures that pass through a chain.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! try-rail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::try_::Try;
use crate::types::Captured;

/// Extension trait for [`Try`] that ties failures to tracing spans.
///
/// # Example
///
/// ```
/// use tracing::info_span;
/// use try_rail::trace::SpanTryExt;
/// use try_rail::Try;
///
/// let span = info_span!("load_profile");
/// let t = Try::<i32>::failure("connection refused").with_span(&span);
///
/// let error = t.unwrap_failure();
/// assert!(error.message().starts_with("in span"));
/// assert_eq!(error.causes()[0].message(), "connection refused");
/// ```
pub trait SpanTryExt<T> {
    /// Annotates a failure with the current span's name.
    ///
    /// The span note becomes the top-level error and the original failure is
    /// attached as its cause. A success passes through unchanged.
    fn with_current_span(self) -> Try<T>;

    /// Annotates a failure with the given span's name.
    ///
    /// Unlike [`with_current_span`](Self::with_current_span), this method
    /// uses the provided span instead of the current one.
    fn with_span(self, span: &Span) -> Try<T>;

    /// Emits a `warn` event carrying the error chain of a failure, then
    /// returns `self` unchanged.
    ///
    /// On a success nothing is emitted.
    fn trace_failure(self) -> Try<T>;
}

impl<T> SpanTryExt<T> for Try<T> {
    fn with_current_span(self) -> Try<T> {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Try<T> {
        match self {
            Try::Success(value) => Try::Success(value),
            Try::Failure(error) => Try::Failure(span_note(span).with_cause(error)),
        }
    }

    fn trace_failure(self) -> Try<T> {
        self.on_failure(|error| {
            tracing::warn!(error = %error.chain(), "try failed");
        })
    }
}

/// Converts a tracing span to a failure annotation.
///
/// Extracts the span name and formats it as a message error. Spans without
/// metadata, such as `Span::none()`, are reported as `unknown`.
fn span_note(span: &Span) -> Captured {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    Captured::new(format!("in span '{name}'"))
}
