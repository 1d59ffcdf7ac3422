//! # reftab-extract
//!
//! Command-line extractor for Reftab inventory data.
//!
//! Authenticates against the Reftab REST API with a static key pair, pages
//! through the `assets` or `locations` collection until exhaustion, and
//! writes the flattened records to CSV and/or standard output.
//!
//! ```text
//! CLI -> Settings (env) -> Resource -> Pager (offset loop) -> CSV / stdout
//! ```
//!
//! Configuration comes from `REFTAB_BASE_URL`, `REFTAB_PUBLIC_KEY`,
//! `REFTAB_SECRET_KEY` and the optional `REFTAB_HEADERS` JSON object; see
//! [`config::Settings`]. The process exits 0 on success, 1 on a
//! configuration error and 2 on any fetch or output failure, always leaving
//! exactly one line of JSON on stdout.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Settings resolved from the environment
pub mod config;

/// HTTP client with retry on server errors
pub mod http;

/// Offset pagination loop
pub mod pager;

/// API resources (assets, locations)
pub mod resource;

/// CSV output
pub mod output;

/// Command-line interface
pub mod cli;

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
