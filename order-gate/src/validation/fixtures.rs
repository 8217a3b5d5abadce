//! Test fixtures for rule unit tests

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use shared::models::{
    ALL_KNOWN_SUBCATEGORIES, Category, CategoryLine, CategoryMenu, Company, Menu, Order,
    OrderLine, PermissionName, PriceListLine, Product, RoleName, Subcategory, User,
};

use super::context::{OrderValidation, ValidationContext};
use super::error::ValidationResult;
use crate::catalog::InMemoryCatalog;

pub const PRICE_LIST: i64 = 7;
pub const UNIT_PRICE: i64 = 5_000_00;

/// Wednesday
pub fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
}

/// Monday 09:00, two days before dispatch
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 10)
        .unwrap()
        .and_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
}

pub fn subcategory(name: &str) -> Subcategory {
    let id = ALL_KNOWN_SUBCATEGORIES
        .iter()
        .position(|k| k.as_str() == name)
        .map_or(99, |p| p as i64 + 1);
    Subcategory::new(id, name)
}

/// Category dispatchable on `date()` with one day of preparation, cutoff 15:00
pub fn category(id: i64, name: &str, subcategories: &[&str]) -> Category {
    let mut category = Category::new(id, name).with_line(CategoryLine {
        weekday: date().weekday(),
        preparation_days: 1,
        maximum_order_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        active: true,
    });
    for name in subcategories {
        category = category.with_subcategory(subcategory(name));
    }
    category
}

pub fn user(role: RoleName, permission: PermissionName) -> User {
    let company = Company {
        id: 1,
        name: "Acme".into(),
        price_list_id: Some(PRICE_LIST),
    };
    User::new(1, "ana", company).with_access(role, permission)
}

pub fn individual() -> User {
    let mut u = user(RoleName::Agreement, PermissionName::Individual);
    u.validate_subcategory_rules = true;
    u
}

pub fn consolidated() -> User {
    let mut u = user(RoleName::Agreement, PermissionName::Consolidated);
    u.validate_subcategory_rules = true;
    u
}

pub fn cafe_individual() -> User {
    user(RoleName::Cafe, PermissionName::Individual)
}

/// Order with one line per `(category, quantity)`; product ids are `category * 100 + n`
pub fn order(items: &[(&Category, u32)]) -> Order {
    let mut order = Order::new(1, 1, date());
    for (n, (category, quantity)) in items.iter().enumerate() {
        let n = n as i64 + 1;
        let product = Product::new(
            category.id * 100 + n,
            format!("{} {n}", category.name),
            category.id,
        );
        order.push_line(OrderLine {
            id: n,
            product,
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
        id: 1,
        title: "Menú del día".into(),
        publication_date: date(),
        role: user.role.unwrap_or(RoleName::Agreement),
        permission: user.permission,
        active: true,
        max_order_date: now() + chrono::Duration::days(1),
    }
}

pub fn placement(id: i64, category: &Category) -> CategoryMenu {
    CategoryMenu {
        id,
        menu_id: 1,
        category: category.clone(),
        display_order: id as i32,
        is_active: true,
        mandatory_category: false,
        show_all_products: true,
        product_ids: vec![],
    }
}

/// Menu for `user` offering every category, each with priced products
pub fn catalog(user: &User, categories: &[&Category]) -> InMemoryCatalog {
    let placements: Vec<CategoryMenu> = categories
        .iter()
        .zip(1..)
        .map(|(c, id)| placement(id, c))
        .collect();
    catalog_with(user, placements)
}

pub fn catalog_with(user: &User, placements: Vec<CategoryMenu>) -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::new().with_menu(menu_for(user));
    for cm in placements {
        for n in 1..=3 {
            let product_id = cm.category.id * 100 + n;
            catalog = catalog
                .with_product(Product::new(product_id, format!("{} {n}", cm.category.name), cm.category.id))
                .with_price(PriceListLine {
                    price_list_id: PRICE_LIST,
                    product_id,
                    unit_price: UNIT_PRICE,
                    active: true,
                });
        }
        catalog = catalog.with_placement(cm);
    }
    catalog
}

pub fn ctx(catalog: &InMemoryCatalog) -> ValidationContext<'_> {
    ValidationContext::new(catalog, catalog, now())
}

pub async fn run(
    rule: &dyn OrderValidation,
    catalog: &InMemoryCatalog,
    order: &Order,
    user: &User,
) -> ValidationResult<()> {
    rule.check(&ctx(catalog), order, user, date()).await
}

/// Rejection message of a failed run
pub fn rejection(result: ValidationResult<()>) -> String {
    match result {
        Err(e) if e.is_rejection() => e.to_string(),
        other => panic!("expected a rejection, got {other:?}"),
    }
}
