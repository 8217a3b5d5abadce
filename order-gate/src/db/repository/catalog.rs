//! Catalog Repository (subcategories, categories, products, price lists)

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use shared::models::{Category, PriceListLine, Product, Subcategory};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::db::models::{CategoryRow, PriceListLineRow, ProductRow, SubcategoryRow};

const SUBCATEGORY_TABLE: &str = "subcategory";
const CATEGORY_TABLE: &str = "category";
const PRODUCT_TABLE: &str = "product";
const PRICE_LIST_LINE_TABLE: &str = "price_list_line";

#[derive(Debug, Deserialize)]
struct PricedProduct {
    product_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct NamedRow {
    pub id: i64,
    pub name: String,
}

#[derive(Clone)]
pub struct CatalogRepository {
    base: BaseRepository,
}

impl CatalogRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn save_subcategory(&self, subcategory: &Subcategory) -> RepoResult<()> {
        let row = SubcategoryRow {
            id: subcategory.id,
            name: subcategory.name.clone(),
        };
        self.base.upsert(SUBCATEGORY_TABLE, subcategory.id, row).await
    }

    /// Save a category; its subcategories are stored as references
    pub async fn save_category(&self, category: &Category) -> RepoResult<()> {
        let row = CategoryRow {
            id: category.id,
            name: category.name.clone(),
            subcategory_ids: category.subcategories.iter().map(|s| s.id).collect(),
            category_lines: category.category_lines.clone(),
        };
        self.base.upsert(CATEGORY_TABLE, category.id, row).await
    }

    pub async fn save_product(&self, product: &Product) -> RepoResult<()> {
        let row = ProductRow {
            id: product.id,
            name: product.name.clone(),
            category_id: product.category_id,
            is_null_product: product.is_null_product,
            active: product.active,
        };
        self.base.upsert(PRODUCT_TABLE, product.id, row).await
    }

    pub async fn save_price_line(&self, id: i64, line: &PriceListLine) -> RepoResult<()> {
        let row = PriceListLineRow {
            id,
            price_list_id: line.price_list_id,
            product_id: line.product_id,
            unit_price: line.unit_price,
            active: line.active,
        };
        self.base.upsert(PRICE_LIST_LINE_TABLE, id, row).await
    }

    /// All subcategories keyed by id
    pub async fn subcategories(&self) -> RepoResult<HashMap<i64, Subcategory>> {
        let rows: Vec<SubcategoryRow> = self
            .base
            .db()
            .query("SELECT record::id(id) AS id, name FROM subcategory")
            .await?
            .take(0)?;
        Ok(rows
            .into_iter()
            .map(|r| (r.id, Subcategory::new(r.id, r.name)))
            .collect())
    }

    /// Category names keyed by id
    pub async fn category_names(&self) -> RepoResult<HashMap<i64, String>> {
        let rows: Vec<NamedRow> = self
            .base
            .db()
            .query("SELECT record::id(id) AS id, name FROM category")
            .await?
            .take(0)?;
        Ok(rows.into_iter().map(|r| (r.id, r.name)).collect())
    }

    /// Categories with their subcategories loaded
    pub async fn categories_by_ids(&self, ids: &[i64]) -> RepoResult<HashMap<i64, Category>> {
        let rows: Vec<CategoryRow> = self
            .base
            .db()
            .query(
                "SELECT record::id(id) AS id, name, subcategory_ids, category_lines \
                 FROM category WHERE record::id(id) IN $ids",
            )
            .bind(("ids", ids.to_vec()))
            .await?
            .take(0)?;

        let subcategories = self.subcategories().await?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let category = Category {
                    id: row.id,
                    name: row.name,
                    subcategories: row
                        .subcategory_ids
                        .iter()
                        .filter_map(|id| subcategories.get(id).cloned())
                        .collect(),
                    category_lines: row.category_lines,
                };
                (category.id, category)
            })
            .collect())
    }

    /// Products belonging to any of the categories
    pub async fn products_in_categories(&self, category_ids: &[i64]) -> RepoResult<Vec<Product>> {
        let rows: Vec<ProductRow> = self
            .base
            .db()
            .query(
                "SELECT record::id(id) AS id, name, category_id, is_null_product, active \
                 FROM product WHERE category_id IN $ids",
            )
            .bind(("ids", category_ids.to_vec()))
            .await?
            .take(0)?;
        Ok(rows
            .into_iter()
            .map(|r| Product {
                id: r.id,
                name: r.name,
                category_id: r.category_id,
                is_null_product: r.is_null_product,
                active: r.active,
            })
            .collect())
    }

    /// Ids of products with an active line in the price list
    pub async fn priced_product_ids(&self, price_list_id: i64) -> RepoResult<HashSet<i64>> {
        let rows: Vec<PricedProduct> = self
            .base
            .db()
            .query(
                "SELECT product_id FROM price_list_line \
                 WHERE price_list_id = $price_list_id AND active = true",
            )
            .bind(("price_list_id", price_list_id))
            .await?
            .take(0)?;
        Ok(rows.into_iter().map(|r| r.product_id).collect())
    }
}
