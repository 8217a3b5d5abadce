//! In-memory snapshot store
//!
//! Holds menus, placements, products, price lines and order rules in plain
//! vectors. Used by tests and by callers that already have a snapshot loaded.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use shared::models::{CategoryMenu, Menu, OrderRule, OrderRuleType, PriceListLine, Product, User};

use super::{
    MenuSnapshotProvider, category_menus_for_validation, priced_product_ids, select_current_menu,
};
use crate::db::repository::RepoResult;
use crate::rules::OrderRuleProvider;

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    menus: Vec<Menu>,
    placements: Vec<CategoryMenu>,
    products: Vec<Product>,
    price_lines: Vec<PriceListLine>,
    rules: Vec<OrderRule>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_menu(mut self, menu: Menu) -> Self {
        self.menus.push(menu);
        self
    }

    pub fn with_placement(mut self, placement: CategoryMenu) -> Self {
        self.placements.push(placement);
        self
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    pub fn with_price(mut self, line: PriceListLine) -> Self {
        self.price_lines.push(line);
        self
    }

    pub fn with_rule(mut self, rule: OrderRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    pub fn placements(&self) -> &[CategoryMenu] {
        &self.placements
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn price_lines(&self) -> &[PriceListLine] {
        &self.price_lines
    }

    pub fn rules(&self) -> &[OrderRule] {
        &self.rules
    }
}

#[async_trait]
impl MenuSnapshotProvider for InMemoryCatalog {
    async fn current_menu(
        &self,
        date: NaiveDate,
        user: &User,
        now: NaiveDateTime,
    ) -> RepoResult<Option<Menu>> {
        Ok(select_current_menu(&self.menus, date, user, now).cloned())
    }

    async fn category_menus_for_validation(
        &self,
        menu: &Menu,
        user: &User,
    ) -> RepoResult<Vec<CategoryMenu>> {
        let priced = match user.price_list_id() {
            Some(id) => priced_product_ids(&self.price_lines, id),
            None => Default::default(),
        };
        let placements = self
            .placements
            .iter()
            .filter(|cm| cm.menu_id == menu.id)
            .cloned()
            .collect();
        Ok(category_menus_for_validation(placements, &self.products, &priced))
    }
}

#[async_trait]
impl OrderRuleProvider for InMemoryCatalog {
    async fn rules_of_type(&self, rule_type: OrderRuleType) -> RepoResult<Vec<OrderRule>> {
        Ok(self
            .rules
            .iter()
            .filter(|r| r.rule_type == rule_type)
            .cloned()
            .collect())
    }
}
