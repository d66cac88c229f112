//! Domain models for the shops CLI
//!
//! Contains the record type and its schema, without any I/O concerns.

mod shop;
mod schema;

pub use shop::ShopRecord;
pub use schema::{validate_records, ValidationError};
