//! Catalog snapshot import
//!
//! A snapshot is the slice of the catalog an order is validated against:
//! categories, menus and their placements, products, price lines and rules.
//! Importing upserts every record, so replaying the same snapshot is a no-op.

use serde::{Deserialize, Serialize};
use shared::models::{Category, CategoryMenu, Menu, OrderRule, PriceListLine, Product};

use super::SurrealCatalog;
use super::repository::RepoResult;

/// Price line with its record key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyedPriceLine {
    pub id: i64,
    #[serde(flatten)]
    pub line: PriceListLine,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSnapshot {
    pub categories: Vec<Category>,
    pub menus: Vec<Menu>,
    pub placements: Vec<CategoryMenu>,
    pub products: Vec<Product>,
    pub price_lines: Vec<KeyedPriceLine>,
    pub rules: Vec<OrderRule>,
}

impl CatalogSnapshot {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.menus.is_empty()
            && self.placements.is_empty()
            && self.products.is_empty()
            && self.price_lines.is_empty()
            && self.rules.is_empty()
    }

    /// Upsert every record into the store
    ///
    /// Categories referenced by placements are written as well, so a
    /// placement never points at a category the store does not know.
    pub async fn import(&self, store: &SurrealCatalog) -> RepoResult<()> {
        let placement_categories = self.placements.iter().map(|p| &p.category);
        for category in self.categories.iter().chain(placement_categories) {
            for subcategory in &category.subcategories {
                store.catalog().save_subcategory(subcategory).await?;
            }
            store.catalog().save_category(category).await?;
        }
        for product in &self.products {
            store.catalog().save_product(product).await?;
        }
        for keyed in &self.price_lines {
            store.catalog().save_price_line(keyed.id, &keyed.line).await?;
        }
        for menu in &self.menus {
            store.menus().save_menu(menu).await?;
        }
        for placement in &self.placements {
            store.menus().save_category_menu(placement).await?;
        }
        for rule in &self.rules {
            store.rules().save(rule).await?;
        }

        tracing::info!(
            categories = self.categories.len(),
            menus = self.menus.len(),
            placements = self.placements.len(),
            products = self.products.len(),
            price_lines = self.price_lines.len(),
            rules = self.rules.len(),
            "Catalog snapshot imported"
        );
        Ok(())
    }
}
