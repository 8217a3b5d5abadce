//! Helpers shared by the menu composition rules

use shared::models::{CategoryMenu, Order, REQUIRED_SUBCATEGORIES};

use super::error::ValidationError;
use crate::catalog::available_subcategories;

const INCOMPLETE_MENU: &str = "🍽️ Tu menú necesita algunos elementos para estar completo: ";

/// "PAN DE ACOMPAÑAMIENTO" -> "Pan de acompañamiento"
pub fn display_name(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Rejection listing every missing menu item
pub fn incomplete_menu<S: AsRef<str>>(missing: &[S]) -> ValidationError {
    let items: Vec<String> = missing.iter().map(|m| display_name(m.as_ref())).collect();
    ValidationError::rejected(format!("{INCOMPLETE_MENU}{}.", items.join(", ")))
}

pub fn too_many_in_category(category: &str) -> ValidationError {
    ValidationError::rejected(format!("🚫 Solo puedes elegir un producto de {category}."))
}

pub fn menu_has_subcategories(placements: &[CategoryMenu]) -> bool {
    placements.iter().any(|cm| cm.category.has_subcategories())
}

/// Required subcategories offered by the menu, in canonical order
pub fn required_in_menu(placements: &[CategoryMenu]) -> Vec<&'static str> {
    let available = available_subcategories(placements);
    REQUIRED_SUBCATEGORIES
        .iter()
        .map(|s| s.as_str())
        .filter(|name| available.iter().any(|a| a == name))
        .collect()
}

/// Placements whose category has no subcategories, in display order
pub fn plain_placements(placements: &[CategoryMenu]) -> impl Iterator<Item = &CategoryMenu> {
    placements.iter().filter(|cm| !cm.category.has_subcategories())
}

pub fn lines_in_category(order: &Order, category_id: i64) -> usize {
    order
        .lines
        .iter()
        .filter(|l| l.category.id == category_id)
        .count()
}

/// First category without subcategories holding more than one line
pub fn check_one_line_per_category<'a>(
    placements: impl IntoIterator<Item = &'a CategoryMenu>,
    order: &Order,
) -> Result<(), ValidationError> {
    for cm in placements {
        if lines_in_category(order, cm.category.id) > 1 {
            return Err(too_many_in_category(&cm.category.name));
        }
    }
    Ok(())
}
