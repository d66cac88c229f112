//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose | Persists |
//! |---------|---------|----------|
//! | `add` | Append a `{name, product, price}` record | yes |
//! | `display` | Print all records as a table | no |
//! | `select` | Print the products of one shop | no |
//!
//! ## Data File
//!
//! Resolved from `--data`, then `$SHOPS_DATA`, then `SHOPS_DATA` in `.env`
//! (see [`crate::storage::Config`]). A missing file starts an empty store.
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! Use `--verbose` (or `-v`) for debug output on stderr.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod shop;
mod table;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
