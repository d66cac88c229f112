//! Shop record domain model
//!
//! A shop record pairs a shop name with one product and its price.
//! Several records may share the same shop name.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A single `{name, product, price}` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopRecord {
    /// Shop name (not unique)
    pub name: String,

    /// Product offered by the shop
    pub product: String,

    /// Price as a JSON number, so integers and floats survive a round trip
    pub price: Number,

    /// Any other properties, written back unchanged on save
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ShopRecord {
    /// Creates a record with an integer price
    pub fn new(name: impl Into<String>, product: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            product: product.into(),
            price: Number::from(price),
            extra: Map::new(),
        }
    }

    /// Returns true if this record belongs to the given shop
    pub fn is_shop(&self, name: &str) -> bool {
        self.name == name
    }
}
