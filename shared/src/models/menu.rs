//! Menu Model

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::user::{PermissionName, RoleName};

/// Menu published for a role (and optionally a permission) on a date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: i64,
    pub title: String,
    pub publication_date: NaiveDate,
    pub role: RoleName,
    pub permission: Option<PermissionName>,
    #[serde(default = "default_true")]
    pub active: bool,
    /// Last moment late-order users may still order from this menu
    pub max_order_date: NaiveDateTime,
}

fn default_true() -> bool {
    true
}

/// Placement of a category in a menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMenu {
    pub id: i64,
    pub menu_id: i64,
    pub category: Category,
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub mandatory_category: bool,
    /// Every priced product of the category counts as available, not only pinned ones
    #[serde(default)]
    pub show_all_products: bool,
    /// Products pinned to this placement
    #[serde(default)]
    pub product_ids: Vec<i64>,
}
