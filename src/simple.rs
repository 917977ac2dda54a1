//! # Simple API - Beginner-Friendly Fallible Chains
//!
//! This module provides the **minimal surface area** for getting started with try-rail.
//! If you're new to the library, start here.
//!
//! # Golden Path (3 Rules)
//!
//! 1. **Enter the rail once**, with [`attempt!`] or [`Try::of`]
//! 2. **Stay on it** with [`map`](Try::map), [`and_then`](Try::and_then), [`filter`](Try::filter)
//! 3. **Leave it once**, with [`fold`](Try::fold), [`unwrap_or`](Try::unwrap_or), or [`into_result`](Try::into_result)
//!
//! # Quick Start
//!
//! ```rust
//! use try_rail::simple::*;
//!
//! fn discount_percent(raw: &str) -> u32 {
//!     attempt!(raw.parse::<u32>())
//!         .filter(|pct| *pct <= 100)
//!         .unwrap_or(0)
//! }
//!
//! assert_eq!(discount_percent("25"), 25);
//! assert_eq!(discount_percent("125"), 0);
//! assert_eq!(discount_percent("a quarter"), 0);
//! ```
//!
//! # What's Included
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Try`] | The success-or-failure container |
//! | [`attempt!`] | Wrap any `Result`-producing block |
//! | [`.into_try()`](IntoTry::into_try) | Lift an existing `Result` onto the rail |
//! | [`.unwrap_or()`](Try::unwrap_or) | Leave the rail with a fallback value |
//!
//! # What's NOT Included (Intentionally)
//!
//! These are available in [`crate::prelude`] or specialized modules:
//!
//! - `retry` / `zip` / `using` - Inherent methods on [`Try`], no import needed
//! - `Captured` / `CauseKind` - For inspecting errors (see [`crate::prelude`])
//! - Bulk conversions and sifting - See [`crate::intermediate`]
//! - Span annotation - See the `trace` module (requires the `tracing` feature)
//!
//! # Anti-Patterns
//!
//! ```rust
//! # use try_rail::simple::*;
//! // ❌ DON'T: unwrap mid-chain; it turns failures back into panics
//! fn brittle(raw: &str) -> u32 {
//!     attempt!(raw.parse::<u32>()).unwrap() * 2
//! }
//! ```
//!
//! ```rust
//! # use try_rail::simple::*;
//! // ✅ DO: stay on the rail, leave it once and explicitly
//! fn sturdy(raw: &str) -> u32 {
//!     attempt!(raw.parse::<u32>()).map(|n| n * 2).unwrap_or(0)
//! }
//! ```
//!
//! # When NOT to Use try-rail
//!
//! - Functions where plain `Result` and `?` already read well
//! - Simple scripts where you just print errors and exit
//! - When the failure needs a caller-visible error *type*, not a message
//!
//! # Relationship to std::result
//!
//! > **`Result` defines the outcome. try-rail defines how outcomes flow.**
//!
//! try-rail wraps your existing error types and adds capture, recovery, and
//! resource discipline, without requiring you to change your signatures below
//! the boundary.

// Minimal macro - just attempt! for beginners
pub use crate::attempt;

// Core type for method access (map, unwrap_or, etc.)
pub use crate::try_::Try;

// Essential trait for .into_try() method
pub use crate::traits::IntoTry;
