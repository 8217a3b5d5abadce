//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    /// Placeholder meaning "nothing selected for this slot" (e.g. no side dish)
    #[serde(default)]
    pub is_null_product: bool,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, category_id: i64) -> Self {
        Self {
            id,
            name: name.into(),
            category_id,
            is_null_product: false,
            active: true,
        }
    }

    pub fn null_product(mut self) -> Self {
        self.is_null_product = true;
        self
    }
}

/// Price list entry (unit price in cents)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceListLine {
    pub price_list_id: i64,
    pub product_id: i64,
    pub unit_price: i64,
    #[serde(default = "default_true")]
    pub active: bool,
}
