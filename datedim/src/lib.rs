//! # datedim
//!
//! Date and time dimension tables for analytical warehouses.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! CSV export.  The `datedim` binary drives it from the command line.
//!
//! ```rust
//! use datedim::dimension::DateDimension;
//! use datedim::time::DateKey;
//!
//! let start = DateKey::new(20231120).unwrap();
//! let end = DateKey::new(20231126).unwrap();
//! let rows = DateDimension::new(start, end).unwrap().rows().unwrap();
//!
//! let mut out = Vec::new();
//! datedim::export::write_csv(&mut out, &rows).unwrap();
//! let csv = String::from_utf8(out).unwrap();
//! assert!(csv.starts_with("date_key,full_date,day,"));
//! assert_eq!(csv.lines().count(), 8);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions.
pub use dd_core as core;

/// Date, date key, time key, and holiday calendar types.
pub use dd_time as time;

/// Derivation engine, holiday classifier, and dimension rows.
pub use dd_dimension as dimension;

/// CSV export of dimension rows.
pub mod export;
