//! Captured error value with a kind, a message, and a flattened cause chain.
//!
//! This module provides [`Captured`], the error payload carried by the
//! `Failure` variant of [`Try`](crate::Try). A `Captured` records:
//! - A [`CauseKind`] describing where the error came from
//! - A human-readable message
//! - Zero or more [`Cause`] frames for errors that wrap other errors
//!
//! # Examples
//!
//! ```
//! use try_rail::{Captured, CauseKind};
//!
//! let err = Captured::new("database connection failed")
//!     .with_cause(Captured::new("connection refused"));
//!
//! assert_eq!(err.kind(), CauseKind::Message);
//! assert_eq!(err.chain(), "database connection failed -> connection refused");
//! ```

use crate::types::CauseVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(feature = "std")]
use std::string::{String, ToString};

mod traits;

/// Classification of a captured error by origin.
///
/// Callers pattern-match on the kind to decide how to react without
/// re-raising the error.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum CauseKind {
    /// An ad-hoc failure built from message text.
    Message,
    /// An error value returned by a fallible computation.
    Error,
    /// A `filter` or `reject` predicate that did not hold.
    Predicate,
    /// A panic that unwound out of a computation.
    ///
    /// Only the std-gated [`Try::catch`](crate::Try::catch) factory produces
    /// this kind; the variant itself exists on every build so that captured
    /// errors can cross a `no_std` boundary unchanged.
    Panic,
}

/// A single flattened frame in a [`Captured`] cause chain.
///
/// Unlike `Captured`, a `Cause` carries no nested causes of its own; chains
/// are always flattened into the owning `Captured` when errors are combined
/// with [`Captured::with_cause`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Cause {
    pub(crate) kind: CauseKind,
    pub(crate) message: String,
}

impl Cause {
    /// Returns the kind of this cause frame.
    #[inline]
    pub fn kind(&self) -> CauseKind {
        self.kind
    }

    /// Returns the message of this cause frame.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error value captured by the `Failure` variant of [`Try`](crate::Try).
///
/// A `Captured` is an immutable value: builders like [`with_cause`](Self::with_cause)
/// consume `self` and return a new value, the same way `Try` combinators do.
///
/// # Serde Support
///
/// `Captured` implements `Serialize` and `Deserialize` when the `serde`
/// feature is enabled, so failures can be stored or sent over the wire.
///
/// # Examples
///
/// ```
/// use try_rail::{Captured, CauseKind};
///
/// let err = Captured::from_error(&"4x".parse::<i32>().unwrap_err());
///
/// assert_eq!(err.kind(), CauseKind::Error);
/// assert!(err.message().contains("invalid digit"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Captured {
    pub(crate) kind: CauseKind,
    pub(crate) message: String,
    pub(crate) causes: CauseVec,
}

impl Captured {
    /// Creates a captured error from message text.
    ///
    /// # Arguments
    ///
    /// * `message` - The failure description
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::{Captured, CauseKind};
    ///
    /// let err = Captured::new("no such user");
    /// assert_eq!(err.kind(), CauseKind::Message);
    /// assert_eq!(err.message(), "no such user");
    /// ```
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { kind: CauseKind::Message, message: message.into(), causes: CauseVec::new() }
    }

    /// Creates a captured error from an error value, walking its `source()`
    /// chain into cause frames.
    ///
    /// The message is taken from the error's `Display` implementation; each
    /// transitive source becomes one [`Cause`].
    ///
    /// # Arguments
    ///
    /// * `error` - The error to capture
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::{Captured, CauseKind};
    ///
    /// let parse_err = "not a number".parse::<u32>().unwrap_err();
    /// let err = Captured::from_error(&parse_err);
    ///
    /// assert_eq!(err.kind(), CauseKind::Error);
    /// ```
    pub fn from_error<E>(error: &E) -> Self
    where
        E: core::error::Error + ?Sized,
    {
        let mut causes = CauseVec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(Cause { kind: CauseKind::Error, message: cause.to_string() });
            source = cause.source();
        }
        Self { kind: CauseKind::Error, message: error.to_string(), causes }
    }

    /// Creates the captured error used when a `filter` predicate does not
    /// hold (or a `reject` predicate does).
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::{Captured, CauseKind};
    ///
    /// let err = Captured::predicate();
    /// assert_eq!(err.kind(), CauseKind::Predicate);
    /// ```
    #[inline]
    pub fn predicate() -> Self {
        Self {
            kind: CauseKind::Predicate,
            message: String::from("the given predicate does not hold"),
            causes: CauseVec::new(),
        }
    }

    /// Creates a captured error from a panic payload.
    ///
    /// Recovers the panic message for `&str` and `String` payloads, the two
    /// shapes produced by the `panic!` macro family. Other payload types are
    /// recorded as opaque.
    ///
    /// # Arguments
    ///
    /// * `payload` - The payload returned by `std::panic::catch_unwind`
    #[cfg(feature = "std")]
    pub fn from_panic(payload: &(dyn core::any::Any + Send)) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            String::from(*text)
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            String::from("opaque panic payload")
        };
        Self { kind: CauseKind::Panic, message, causes: CauseVec::new() }
    }

    /// Records another captured error as the cause of this one.
    ///
    /// The other error's own causes are flattened into this error's chain,
    /// most recent first, so the result is always a single flat chain.
    ///
    /// # Arguments
    ///
    /// * `cause` - The earlier error that led to this one
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Captured;
    ///
    /// let root = Captured::new("disk full").with_cause(Captured::new("write failed"));
    /// let err = Captured::new("checkpoint lost").with_cause(root);
    ///
    /// assert_eq!(err.causes().len(), 2);
    /// assert_eq!(err.chain(), "checkpoint lost -> disk full -> write failed");
    /// ```
    pub fn with_cause(mut self, cause: Captured) -> Self {
        let Captured { kind, message, causes } = cause;
        self.causes.push(Cause { kind, message });
        self.causes.extend(causes);
        self
    }

    /// Returns the kind of this captured error.
    #[inline]
    pub fn kind(&self) -> CauseKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the flattened cause chain, most recent cause first.
    #[inline]
    pub fn causes(&self) -> &[Cause] {
        &self.causes
    }

    /// Returns the complete error chain as a `" -> "` joined string.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Captured;
    ///
    /// let err = Captured::new("load failed").with_cause(Captured::new("timeout"));
    /// assert_eq!(err.chain(), "load failed -> timeout");
    /// ```
    #[must_use]
    pub fn chain(&self) -> String {
        let mut out = String::from(self.message.as_str());
        for cause in &self.causes {
            out.push_str(" -> ");
            out.push_str(cause.message());
        }
        out
    }
}
