//! # Storage Layer
//!
//! Persistence for shop records and resolution of the data file path.
//!
//! ## Storage Format
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Records | JSON array, 4-space indent | `--data` / `SHOPS_DATA` |
//!
//! ## Write Safety
//!
//! - Saves are full rewrites through a temp file + rename
//! - Nothing is written unless the store is dirty
//! - No file locking: concurrent writers race, last one wins
//!
//! ## Key Types
//!
//! - [`RecordStore`] - Load, append, query and save shop records
//! - [`Config`] - Data file path resolved from flag, environment or `.env`

mod json;
mod config;

pub use json::{RecordStore, StoreError};
pub use config::{Config, ConfigError, DataFileSource, DATA_ENV_VAR, DEFAULT_ENV_FILE};
