//! Command-line interface
//!
//! Argument parsing and the runner that wires settings, client, pager and
//! output together for one invocation.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
