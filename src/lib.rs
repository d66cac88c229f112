//! Shops CLI - a small shop and product inventory backed by a JSON file
//!
//! Records are `{name, product, price}` entries kept in insertion order.
//! Each invocation loads and validates the data file, optionally appends
//! one record, and rewrites the file only when something changed.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{ShopRecord, ValidationError};
pub use storage::{Config, RecordStore, StoreError};
