//! # CLI Layer
//!
//! One possible client of the library. It is the **only** place that:
//! - Parses arguments
//! - Reads stdin and files named on the command line
//! - Writes to stdout/stderr
//! - Installs the tracing subscriber
//!
//! ## Commands
//!
//! - `custattr filter --catalog catalog.json [--input attributes.json]`: reads an
//!   attribute set (stdin when `--input` is omitted), prints the decorated set.
//! - `custattr config [KEY]`: prints the effective configuration.

mod commands;
mod setup;

pub use commands::run;
