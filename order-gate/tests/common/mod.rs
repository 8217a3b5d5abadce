//! Shared builders for integration tests
#![allow(dead_code)]

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use shared::models::{
    ALL_KNOWN_SUBCATEGORIES, Category, CategoryLine, CategoryMenu, Company, Menu, Order, OrderLine,
    PermissionName, PriceListLine, Product, RoleName, Subcategory, User,
};

use order_gate::InMemoryCatalog;
use order_gate::db::snapshot::{CatalogSnapshot, KeyedPriceLine};

pub const PRICE_LIST: i64 = 7;
pub const UNIT_PRICE: i64 = 4_500_00;

/// Wednesday
pub fn dispatch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
}

/// Monday 10:30
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 10)
        .unwrap()
        .and_time(NaiveTime::from_hms_opt(10, 30, 0).unwrap())
}

/// Subcategory with the id the seed gives it
pub fn subcategory(name: &str) -> Subcategory {
    let id = ALL_KNOWN_SUBCATEGORIES
        .iter()
        .position(|k| k.as_str() == name)
        .map_or(99, |p| p as i64 + 1);
    Subcategory::new(id, name)
}

/// Category served on Wednesdays, one day of notice, cutoff 12:00
pub fn category(id: i64, name: &str, subcategories: &[&str]) -> Category {
    let mut category = Category::new(id, name).with_line(CategoryLine {
        weekday: dispatch_date().weekday(),
        preparation_days: 1,
        maximum_order_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        active: true,
    });
    for name in subcategories {
        category = category.with_subcategory(subcategory(name));
    }
    category
}

pub fn user(role: RoleName, permission: PermissionName) -> User {
    let company = Company {
        id: 10,
        name: "Constructora Andes".into(),
        price_list_id: Some(PRICE_LIST),
    };
    User::new(42, "mrojas", company).with_access(role, permission)
}

pub fn individual() -> User {
    let mut u = user(RoleName::Agreement, PermissionName::Individual);
    u.validate_subcategory_rules = true;
    u
}

pub fn consolidated() -> User {
    user(RoleName::Agreement, PermissionName::Consolidated)
}

pub fn super_master() -> User {
    let mut u = user(RoleName::Admin, PermissionName::Individual);
    u.super_master_user = true;
    u
}

/// Product `n` of a category; ids are `category * 100 + n`
pub fn product(category: &Category, n: i64) -> Product {
    Product::new(category.id * 100 + n, format!("{} {n}", category.name), category.id)
}

/// Order for `dispatch_date()`; each item picks the next product of its category
pub fn order(items: &[(&Category, u32)]) -> Order {
    let mut order = Order::new(500, 42, dispatch_date());
    let mut picked: Vec<(i64, i64)> = Vec::new();
    for ((category, quantity), line_id) in items.iter().zip(1..) {
        let n = match picked.iter_mut().find(|(id, _)| *id == category.id) {
            Some((_, n)) => {
                *n += 1;
                *n
            }
            None => {
                picked.push((category.id, 1));
                1
            }
        };
        order.push_line(OrderLine {
            id: line_id,
            product: product(category, n),
            category: (*category).clone(),
            quantity: *quantity,
            unit_price: UNIT_PRICE,
            partially_scheduled: false,
        });
    }
    order
}

pub fn menu_for(user: &User) -> Menu {
    Menu {
        id: 3,
        title: "Menú miércoles".into(),
        publication_date: dispatch_date(),
        role: user.role.unwrap_or(RoleName::Agreement),
        permission: user.permission,
        active: true,
        max_order_date: now() + chrono::Duration::days(1),
    }
}

pub fn placement(id: i64, category: &Category) -> CategoryMenu {
    CategoryMenu {
        id,
        menu_id: 3,
        category: category.clone(),
        display_order: id as i32,
        is_active: true,
        mandatory_category: false,
        show_all_products: true,
        product_ids: vec![],
    }
}

/// Menu for `user` with each `(category, product count)` placed and priced
pub fn snapshot(user: &User, categories: &[(&Category, i64)]) -> CatalogSnapshot {
    let mut snapshot = CatalogSnapshot {
        menus: vec![menu_for(user)],
        ..CatalogSnapshot::default()
    };
    for ((category, products), id) in categories.iter().zip(1..) {
        for n in 1..=*products {
            let product = product(category, n);
            snapshot.price_lines.push(KeyedPriceLine {
                id: product.id,
                line: PriceListLine {
                    price_list_id: PRICE_LIST,
                    product_id: product.id,
                    unit_price: UNIT_PRICE,
                    active: true,
                },
            });
            snapshot.products.push(product);
        }
        snapshot.placements.push(placement(id, category));
    }
    snapshot
}

/// Same snapshot held in memory
pub fn in_memory(snapshot: &CatalogSnapshot) -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::new();
    for menu in &snapshot.menus {
        catalog = catalog.with_menu(menu.clone());
    }
    for placement in &snapshot.placements {
        catalog = catalog.with_placement(placement.clone());
    }
    for product in &snapshot.products {
        catalog = catalog.with_product(product.clone());
    }
    for keyed in &snapshot.price_lines {
        catalog = catalog.with_price(keyed.line.clone());
    }
    for rule in &snapshot.rules {
        catalog = catalog.with_rule(rule.clone());
    }
    catalog
}
