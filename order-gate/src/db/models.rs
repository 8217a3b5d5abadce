//! Database row types
//!
//! Rows are stored under integer record keys (`table:42`). Reads project the key
//! back with `record::id(id) AS id`; writes never serialize `id`, the key is
//! passed to `type::thing` instead.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use shared::models::{
    CategoryLine, OrderRuleType, PermissionName, RoleName, TargetKind,
};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubcategoryRow {
    #[serde(default, skip_serializing)]
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRow {
    #[serde(default, skip_serializing)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub subcategory_ids: Vec<i64>,
    #[serde(default)]
    pub category_lines: Vec<CategoryLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRow {
    #[serde(default, skip_serializing)]
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    #[serde(default)]
    pub is_null_product: bool,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceListLineRow {
    #[serde(default, skip_serializing)]
    pub id: i64,
    pub price_list_id: i64,
    pub product_id: i64,
    pub unit_price: i64,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuRow {
    #[serde(default, skip_serializing)]
    pub id: i64,
    pub title: String,
    pub publication_date: NaiveDate,
    pub role: RoleName,
    pub permission: Option<PermissionName>,
    #[serde(default = "default_true")]
    pub active: bool,
    pub max_order_date: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryMenuRow {
    #[serde(default, skip_serializing)]
    pub id: i64,
    pub menu_id: i64,
    pub category_id: i64,
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub mandatory_category: bool,
    #[serde(default)]
    pub show_all_products: bool,
    #[serde(default)]
    pub product_ids: Vec<i64>,
}

/// Exclusion side reference; names are resolved on read
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetRef {
    pub kind: TargetKind,
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExclusionRow {
    pub id: i64,
    pub source: TargetRef,
    pub excluded: TargetRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubcategoryLimitRow {
    pub id: i64,
    pub subcategory_id: i64,
    pub max_products: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRuleRow {
    #[serde(default, skip_serializing)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub rule_type: OrderRuleType,
    pub role: RoleName,
    pub permission: PermissionName,
    pub priority: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub company_ids: Vec<i64>,
    #[serde(default)]
    pub exclusions: Vec<ExclusionRow>,
    #[serde(default)]
    pub subcategory_limits: Vec<SubcategoryLimitRow>,
}
