//! Menu/Category Snapshot Accessor
//!
//! Read-only access to the menu published for a dispatch date and the
//! category placements that count for validation. The filters are pure
//! functions so every store answers the same way.

pub mod memory;

pub use memory::InMemoryCatalog;

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use shared::models::{CategoryMenu, Menu, PriceListLine, Product, User};

use crate::db::repository::RepoResult;

/// Source of menu snapshots
#[async_trait]
pub trait MenuSnapshotProvider: Send + Sync {
    /// Menu the user orders from on `date`, if any
    async fn current_menu(
        &self,
        date: NaiveDate,
        user: &User,
        now: NaiveDateTime,
    ) -> RepoResult<Option<Menu>>;

    /// Placements of the menu that count for validation, by display order
    async fn category_menus_for_validation(
        &self,
        menu: &Menu,
        user: &User,
    ) -> RepoResult<Vec<CategoryMenu>>;
}

/// Whether `menu` is the one the user orders from for `date`
pub fn is_current_menu(menu: &Menu, date: NaiveDate, user: &User, now: NaiveDateTime) -> bool {
    if menu.publication_date != date || !menu.active {
        return false;
    }
    if Some(menu.role) != user.role {
        return false;
    }
    if menu.publication_date < now.date() {
        return false;
    }
    if let Some(permission) = user.permission
        && menu.permission != Some(permission)
    {
        return false;
    }
    if user.allow_late_orders && menu.max_order_date <= now {
        return false;
    }
    true
}

/// Pick the current menu among candidates; the lowest id wins
pub fn select_current_menu<'a>(
    menus: impl IntoIterator<Item = &'a Menu>,
    date: NaiveDate,
    user: &User,
    now: NaiveDateTime,
) -> Option<&'a Menu> {
    menus
        .into_iter()
        .filter(|m| is_current_menu(m, date, user, now))
        .min_by_key(|m| m.id)
}

/// Ids of products with an active line in the price list
pub fn priced_product_ids<'a>(
    lines: impl IntoIterator<Item = &'a PriceListLine>,
    price_list_id: i64,
) -> HashSet<i64> {
    lines
        .into_iter()
        .filter(|l| l.active && l.price_list_id == price_list_id)
        .map(|l| l.product_id)
        .collect()
}

/// Keep active placements with at least one orderable product, sorted by display order
///
/// `show_all_products` placements look at every product of the category;
/// the others only at their pinned products.
pub fn category_menus_for_validation(
    placements: Vec<CategoryMenu>,
    products: &[Product],
    priced: &HashSet<i64>,
) -> Vec<CategoryMenu> {
    let orderable = |p: &Product| p.active && priced.contains(&p.id);

    let mut kept: Vec<CategoryMenu> = placements
        .into_iter()
        .filter(|cm| cm.is_active)
        .filter(|cm| {
            if cm.show_all_products {
                products
                    .iter()
                    .any(|p| p.category_id == cm.category.id && orderable(p))
            } else {
                products
                    .iter()
                    .any(|p| cm.product_ids.contains(&p.id) && orderable(p))
            }
        })
        .collect();

    kept.sort_by_key(|cm| cm.display_order);
    kept
}

/// Union of the subcategory names of the placements, first appearance order
pub fn available_subcategories(placements: &[CategoryMenu]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in placements.iter().flat_map(|cm| cm.category.subcategory_names()) {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}
