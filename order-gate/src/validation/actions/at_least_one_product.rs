//! Menu coverage and equal quantities for agreement users
//!
//! Consolidated orders feed a whole team, so every menu category has to be
//! covered and every category (or required subcategory group) must carry the
//! same number of portions. Individual orders only need equal line quantities.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{CategoryMenu, Order, OrderLine, REQUIRED_SUBCATEGORIES, User};

use crate::permissions::{is_agreement_consolidated, is_agreement_individual};
use crate::validation::support::{
    incomplete_menu, menu_has_subcategories, plain_placements, required_in_menu,
};
use crate::validation::{OrderValidation, ValidationContext, ValidationError, ValidationResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct AtLeastOneProductByCategory;

#[async_trait]
impl OrderValidation for AtLeastOneProductByCategory {
    fn name(&self) -> &'static str {
        "at_least_one_product_by_category"
    }

    async fn check(
        &self,
        ctx: &ValidationContext<'_>,
        order: &Order,
        user: &User,
        date: NaiveDate,
    ) -> ValidationResult<()> {
        if is_agreement_consolidated(user) {
            check_consolidated(ctx, order, user, date).await?;
        }

        if is_agreement_individual(user) {
            let quantities: HashSet<u32> = order.lines.iter().map(|l| l.quantity).collect();
            if quantities.len() > 1 {
                return Err(ValidationError::rejected(
                    "Todos los productos en la orden deben tener la misma cantidad.",
                ));
            }
        }

        Ok(())
    }
}

async fn check_consolidated(
    ctx: &ValidationContext<'_>,
    order: &Order,
    user: &User,
    date: NaiveDate,
) -> ValidationResult<()> {
    let menu = ctx.require_current_menu(date, user).await?;
    let placements = ctx.placements(&menu, user).await?;
    let by_subcategory = user.validate_subcategory_rules && menu_has_subcategories(&placements);

    let sums = if by_subcategory {
        check_subcategory_coverage(ctx, order, user, &placements).await?;
        subcategory_group_sums(order)
    } else {
        if let Some(missing) = placements.iter().find(|cm| !order.has_category(cm.category.id)) {
            return Err(ValidationError::rejected(format!(
                "La orden debe incluir al menos un producto de la categoría: {}",
                missing.category.name
            )));
        }
        category_sums(order, |_| true)
    };

    let distinct: HashSet<u32> = sums.into_iter().collect();
    if distinct.len() > 1 {
        return Err(ValidationError::rejected(
            "Cada categoría debe tener la misma cantidad de productos.",
        ));
    }
    Ok(())
}

/// Required subcategories first, then categories without subcategories.
/// Items paired by the exclusion rule with something already ordered are not missing.
async fn check_subcategory_coverage(
    ctx: &ValidationContext<'_>,
    order: &Order,
    user: &User,
    placements: &[CategoryMenu],
) -> ValidationResult<()> {
    let exclusions = ctx.rules.polymorphic_exclusions(user).await?;

    let missing: Vec<&str> = required_in_menu(placements)
        .into_iter()
        .filter(|name| !order.has_subcategory(name))
        .filter(|name| !exclusions.blocks_subcategory(name, order))
        .collect();
    if !missing.is_empty() {
        return Err(incomplete_menu(&missing));
    }

    let missing: Vec<&str> = plain_placements(placements)
        .filter(|cm| !order.has_category(cm.category.id))
        .filter(|cm| !exclusions.blocks_category(cm.category.id, order))
        .map(|cm| cm.category.name.as_str())
        .collect();
    if !missing.is_empty() {
        return Err(incomplete_menu(&missing));
    }

    Ok(())
}

/// Per required subcategory (every line carrying it), plus per category without subcategories
fn subcategory_group_sums(order: &Order) -> Vec<u32> {
    let mut sums: Vec<u32> = REQUIRED_SUBCATEGORIES
        .iter()
        .map(|required| {
            order
                .lines
                .iter()
                .filter(|l| l.category.has_subcategory(required.as_str()))
                .map(|l| l.quantity)
                .sum::<u32>()
        })
        .filter(|sum| *sum > 0)
        .collect();

    sums.extend(category_sums(order, |l| !l.category.has_subcategories()));
    sums
}

fn category_sums(order: &Order, include: impl Fn(&OrderLine) -> bool) -> Vec<u32> {
    let mut groups: Vec<(i64, u32)> = Vec::new();
    for line in order.lines.iter().filter(|&l| include(l)) {
        match groups.iter_mut().find(|(id, _)| *id == line.category.id) {
            Some((_, sum)) => *sum += line.quantity,
            None => groups.push((line.category.id, line.quantity)),
        }
    }
    groups.into_iter().map(|(_, sum)| sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::fixtures::{
        catalog, category, consolidated, individual, order, rejection, run,
    };
    use shared::models::{OrderRule, OrderRuleExclusion, OrderRuleType, RuleTarget};

    #[tokio::test]
    async fn test_equal_category_sums() {
        let mut user = consolidated();
        user.validate_subcategory_rules = false;
        let a = category(1, "Almuerzo", &[]);
        let b = category(2, "Ensaladas", &[]);
        let c = category(3, "Postres", &[]);
        let catalog = catalog(&user, &[&a, &b, &c]);

        let even = order(&[(&a, 3), (&b, 3), (&c, 3)]);
        assert!(run(&AtLeastOneProductByCategory, &catalog, &even, &user).await.is_ok());

        let uneven = order(&[(&a, 3), (&b, 3), (&c, 4)]);
        let msg = rejection(run(&AtLeastOneProductByCategory, &catalog, &uneven, &user).await);
        assert_eq!(msg, "Cada categoría debe tener la misma cantidad de productos.");

        // sums, not line quantities
        let split = order(&[(&a, 1), (&a, 2), (&b, 3), (&c, 3)]);
        assert!(run(&AtLeastOneProductByCategory, &catalog, &split, &user).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_category_first_in_display_order() {
        let mut user = consolidated();
        user.validate_subcategory_rules = false;
        let a = category(1, "Almuerzo", &[]);
        let b = category(2, "Ensaladas", &[]);
        let c = category(3, "Postres", &[]);
        let catalog = catalog(&user, &[&a, &b, &c]);

        let msg = rejection(run(&AtLeastOneProductByCategory, &catalog, &order(&[(&a, 1)]), &user).await);
        assert_eq!(msg, "La orden debe incluir al menos un producto de la categoría: Ensaladas");
    }

    #[tokio::test]
    async fn test_subcategory_coverage() {
        let user = consolidated();
        let main = category(1, "Platos", &["PLATO DE FONDO"]);
        let starter = category(2, "Entradas", &["ENTRADA"]);
        let dessert = category(3, "Postres", &[]);
        let catalog = catalog(&user, &[&main, &starter, &dessert]);

        let msg = rejection(run(&AtLeastOneProductByCategory, &catalog, &order(&[(&dessert, 2)]), &user).await);
        assert_eq!(
            msg,
            "🍽️ Tu menú necesita algunos elementos para estar completo: Plato de fondo, Entrada."
        );

        let msg = rejection(
            run(&AtLeastOneProductByCategory, &catalog, &order(&[(&main, 2), (&starter, 2)]), &user).await,
        );
        assert_eq!(msg, "🍽️ Tu menú necesita algunos elementos para estar completo: Postres.");

        let full = order(&[(&main, 2), (&starter, 2), (&dessert, 2)]);
        assert!(run(&AtLeastOneProductByCategory, &catalog, &full, &user).await.is_ok());

        let uneven = order(&[(&main, 2), (&starter, 2), (&dessert, 3)]);
        assert!(run(&AtLeastOneProductByCategory, &catalog, &uneven, &user).await.is_err());
    }

    #[tokio::test]
    async fn test_blocked_items_not_missing() {
        let user = consolidated();
        let main = category(1, "Platos", &["PLATO DE FONDO"]);
        let sandwich = category(2, "Sándwich", &[]);
        let rule = OrderRule {
            id: 1,
            name: "Plato o sándwich".into(),
            description: None,
            rule_type: OrderRuleType::SubcategoryExclusion,
            role: user.role.unwrap(),
            permission: user.permission.unwrap(),
            priority: 1,
            is_active: true,
            company_ids: vec![],
            exclusions: vec![OrderRuleExclusion {
                id: 1,
                source: RuleTarget::subcategory(1, "PLATO DE FONDO"),
                excluded: RuleTarget::category(2, "Sándwich"),
            }],
            subcategory_limits: vec![],
        };
        let catalog = catalog(&user, &[&main, &sandwich]).with_rule(rule);

        // the sandwich blocks the main course, and the other way round
        assert!(run(&AtLeastOneProductByCategory, &catalog, &order(&[(&sandwich, 2)]), &user).await.is_ok());
        assert!(run(&AtLeastOneProductByCategory, &catalog, &order(&[(&main, 2)]), &user).await.is_ok());
    }

    #[tokio::test]
    async fn test_individual_equal_quantities() {
        let user = individual();
        let a = category(1, "Almuerzo", &[]);
        let b = category(2, "Postres", &[]);
        let catalog = catalog(&user, &[&a, &b]);

        assert!(run(&AtLeastOneProductByCategory, &catalog, &order(&[(&a, 1), (&b, 1)]), &user).await.is_ok());

        let msg = rejection(run(&AtLeastOneProductByCategory, &catalog, &order(&[(&a, 1), (&b, 2)]), &user).await);
        assert_eq!(msg, "Todos los productos en la orden deben tener la misma cantidad.");
    }
}
