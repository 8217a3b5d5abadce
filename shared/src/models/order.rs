//! Order Model
//!
//! Orders reach the gate as snapshots: each line carries its product and the
//! product's category (with subcategories and dispatch lines) already loaded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::product::Product;

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Processed,
    PartiallyScheduled,
    Canceled,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub status: OrderStatus,
    pub dispatch_date: NaiveDate,
    /// Order total in cents
    pub total: i64,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
}

impl Order {
    pub fn new(id: i64, user_id: i64, dispatch_date: NaiveDate) -> Self {
        Self {
            id,
            user_id,
            status: OrderStatus::Pending,
            dispatch_date,
            total: 0,
            lines: Vec::new(),
        }
    }

    /// Append a line and keep `total` in sync
    pub fn push_line(&mut self, line: OrderLine) {
        self.total += line.subtotal();
        self.lines.push(line);
    }

    pub fn has_category(&self, category_id: i64) -> bool {
        self.lines.iter().any(|l| l.category.id == category_id)
    }

    pub fn has_subcategory(&self, name: &str) -> bool {
        self.lines.iter().any(|l| l.category.has_subcategory(name))
    }
}

/// Order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: i64,
    pub product: Product,
    pub category: Category,
    pub quantity: u32,
    /// Unit price in cents, recorded when the line was written
    pub unit_price: i64,
    #[serde(default)]
    pub partially_scheduled: bool,
}

impl OrderLine {
    pub fn subtotal(&self) -> i64 {
        self.unit_price * i64::from(self.quantity)
    }
}
