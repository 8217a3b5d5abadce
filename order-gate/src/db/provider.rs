//! SurrealDB-backed snapshot providers

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use shared::models::{CategoryMenu, Menu, OrderRule, OrderRuleType, User};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::repository::{CatalogRepository, MenuRepository, OrderRuleRepository, RepoResult};
use crate::catalog::{MenuSnapshotProvider, category_menus_for_validation, select_current_menu};
use crate::rules::OrderRuleProvider;

/// Menu and rule snapshots read from the embedded store
#[derive(Clone)]
pub struct SurrealCatalog {
    catalog: CatalogRepository,
    menus: MenuRepository,
    rules: OrderRuleRepository,
}

impl SurrealCatalog {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            catalog: CatalogRepository::new(db.clone()),
            menus: MenuRepository::new(db.clone()),
            rules: OrderRuleRepository::new(db),
        }
    }

    pub fn catalog(&self) -> &CatalogRepository {
        &self.catalog
    }

    pub fn menus(&self) -> &MenuRepository {
        &self.menus
    }

    pub fn rules(&self) -> &OrderRuleRepository {
        &self.rules
    }

    async fn load_placements(&self, menu_id: i64) -> RepoResult<Vec<CategoryMenu>> {
        let rows = self.menus.placements(menu_id).await?;
        let category_ids: Vec<i64> = rows.iter().map(|r| r.category_id).collect();
        let categories = self.catalog.categories_by_ids(&category_ids).await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let Some(category) = categories.get(&row.category_id) else {
                    tracing::warn!(
                        menu_id,
                        placement_id = row.id,
                        category_id = row.category_id,
                        "Placement references unknown category, skipped"
                    );
                    return None;
                };
                Some(CategoryMenu {
                    id: row.id,
                    menu_id: row.menu_id,
                    category: category.clone(),
                    display_order: row.display_order,
                    is_active: row.is_active,
                    mandatory_category: row.mandatory_category,
                    show_all_products: row.show_all_products,
                    product_ids: row.product_ids,
                })
            })
            .collect())
    }
}

#[async_trait]
impl MenuSnapshotProvider for SurrealCatalog {
    async fn current_menu(
        &self,
        date: NaiveDate,
        user: &User,
        now: NaiveDateTime,
    ) -> RepoResult<Option<Menu>> {
        let candidates = self.menus.find_by_publication_date(date).await?;
        Ok(select_current_menu(&candidates, date, user, now).cloned())
    }

    async fn category_menus_for_validation(
        &self,
        menu: &Menu,
        user: &User,
    ) -> RepoResult<Vec<CategoryMenu>> {
        let placements = self.load_placements(menu.id).await?;
        if placements.is_empty() {
            return Ok(placements);
        }

        let category_ids: Vec<i64> = placements.iter().map(|cm| cm.category.id).collect();
        let products = self.catalog.products_in_categories(&category_ids).await?;
        let priced = match user.price_list_id() {
            Some(id) => self.catalog.priced_product_ids(id).await?,
            None => HashSet::new(),
        };

        Ok(category_menus_for_validation(placements, &products, &priced))
    }
}

#[async_trait]
impl OrderRuleProvider for SurrealCatalog {
    async fn rules_of_type(&self, rule_type: OrderRuleType) -> RepoResult<Vec<OrderRule>> {
        self.rules.find_by_type(rule_type).await
    }
}
