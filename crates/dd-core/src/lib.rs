//! # dd-core
//!
//! Core error definitions shared across the datedim workspace.
//!
//! Every fallible operation in the library crates returns
//! [`Result<T>`](errors::Result), whose error side is the single
//! [`Error`](errors::Error) enum defined here.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
