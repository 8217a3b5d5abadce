use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{Order, User};

use crate::permissions::{is_agreement, is_agreement_individual};
use crate::validation::support::check_one_line_per_category;
use crate::validation::{OrderValidation, ValidationContext, ValidationError, ValidationResult};

/// Agreement users pick one distinct product per category
#[derive(Debug, Clone, Copy, Default)]
pub struct OneProductPerCategory;

#[async_trait]
impl OrderValidation for OneProductPerCategory {
    fn name(&self) -> &'static str {
        "one_product_per_category"
    }

    async fn check(
        &self,
        _ctx: &ValidationContext<'_>,
        order: &Order,
        user: &User,
        _date: NaiveDate,
    ) -> ValidationResult<()> {
        if !is_agreement(user) {
            return Ok(());
        }

        // category id -> (category name, distinct products)
        let mut groups: Vec<(i64, &str, Vec<(i64, &str)>)> = Vec::new();
        for line in &order.lines {
            let product = (line.product.id, line.product.name.as_str());
            match groups.iter_mut().find(|(id, _, _)| *id == line.category.id) {
                Some((_, _, products)) => {
                    if !products.iter().any(|(id, _)| *id == product.0) {
                        products.push(product);
                    }
                }
                None => groups.push((line.category.id, line.category.name.as_str(), vec![product])),
            }
        }

        if let Some((_, category, products)) = groups.iter().find(|(_, _, p)| p.len() > 1) {
            let names: Vec<&str> = products.iter().map(|(_, name)| *name).collect();
            return Err(ValidationError::rejected(format!(
                "Solo se permite un producto por categoría. Categoría: {category}. Productos: {}",
                names.join(", ")
            )));
        }
        Ok(())
    }
}

/// Individual agreement users take at most one line per plain menu category
///
/// With subcategory rules on, categories that carry subcategories are left to
/// the subcategory quotas.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneProductPerCategorySimple;

#[async_trait]
impl OrderValidation for OneProductPerCategorySimple {
    fn name(&self) -> &'static str {
        "one_product_per_category_simple"
    }

    async fn check(
        &self,
        ctx: &ValidationContext<'_>,
        order: &Order,
        user: &User,
        date: NaiveDate,
    ) -> ValidationResult<()> {
        if !is_agreement_individual(user) {
            return Ok(());
        }

        let menu = ctx.require_current_menu(date, user).await?;
        let placements = ctx.placements(&menu, user).await?;

        check_one_line_per_category(
            placements
                .iter()
                .filter(|cm| !user.validate_subcategory_rules || !cm.category.has_subcategories()),
            order,
        )
    }
}
