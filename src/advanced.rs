//! Advanced API level for library authors and power users.
//!
//! This module exposes the raw building blocks behind [`Try`](crate::Try).
//! Use these types when you need to construct or inspect failures
//! programmatically, or to build custom adapters.

// Error Internals
pub use crate::types::captured::{Captured, Cause, CauseKind};
pub use crate::types::CauseVec;

// Iterator Internals
pub use crate::try_::{IntoIter, Iter, IterMut};
