//! Subcategory quotas for individual agreement users
//!
//! Two distinct checks over the same limits: while the order is edited a
//! subcategory may not exceed its quota; when it is processed every offered
//! subcategory with a quota must be met exactly.

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{Order, User};

use crate::catalog::available_subcategories;
use crate::permissions::is_agreement_individual;
use crate::validation::{OrderValidation, ValidationContext, ValidationError, ValidationResult};

const DEFAULT_QUOTA: u32 = 1;

fn applies(user: &User) -> bool {
    is_agreement_individual(user) && user.validate_subcategory_rules
}

/// Subcategory name -> number of lines carrying it, first appearance order
fn lines_per_subcategory(order: &Order) -> Vec<(&str, u32)> {
    let mut counts: Vec<(&str, u32)> = Vec::new();
    for name in order.lines.iter().flat_map(|l| l.category.subcategory_names()) {
        match counts.iter_mut().find(|(n, _)| *n == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name, 1)),
        }
    }
    counts
}

/// No subcategory above its quota (one when none is configured)
#[derive(Debug, Clone, Copy, Default)]
pub struct OneProductPerSubcategory;

#[async_trait]
impl OrderValidation for OneProductPerSubcategory {
    fn name(&self) -> &'static str {
        "one_product_per_subcategory"
    }

    async fn check(
        &self,
        ctx: &ValidationContext<'_>,
        order: &Order,
        user: &User,
        date: NaiveDate,
    ) -> ValidationResult<()> {
        if !applies(user) {
            return Ok(());
        }

        ctx.require_current_menu(date, user).await?;
        let limits = ctx.rules.subcategory_limits(user).await?;

        for (subcategory, count) in lines_per_subcategory(order) {
            let max = limits.get(subcategory).unwrap_or(DEFAULT_QUOTA);
            if count <= max {
                continue;
            }
            let message = if max == 1 {
                format!("Solo puedes elegir un {subcategory} por pedido.")
            } else {
                format!("Solo puedes elegir un máximo de {max} productos de {subcategory} por pedido.")
            };
            return Err(ValidationError::rejected(message));
        }
        Ok(())
    }
}

/// Every offered subcategory with a quota has exactly that many lines
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactProductCountPerSubcategory;

#[async_trait]
impl OrderValidation for ExactProductCountPerSubcategory {
    fn name(&self) -> &'static str {
        "exact_product_count_per_subcategory"
    }

    async fn check(
        &self,
        ctx: &ValidationContext<'_>,
        order: &Order,
        user: &User,
        date: NaiveDate,
    ) -> ValidationResult<()> {
        if !applies(user) {
            return Ok(());
        }

        let menu = ctx.require_current_menu(date, user).await?;
        let limits = ctx.rules.subcategory_limits(user).await?;
        let placements = ctx.placements(&menu, user).await?;
        let available = available_subcategories(&placements);
        let counts = lines_per_subcategory(order);

        for (subcategory, required) in limits.iter() {
            if !available.iter().any(|a| a == subcategory) {
                continue;
            }
            let actual = counts
                .iter()
                .find(|(name, _)| *name == subcategory)
                .map_or(0, |(_, count)| *count);
            if actual != required {
                return Err(ValidationError::rejected(count_message(subcategory, required, actual)));
            }
        }
        Ok(())
    }
}

fn count_message(subcategory: &str, required: u32, actual: u32) -> String {
    match (required, actual) {
        (1, 0) => format!("Tu pedido debe incluir 1 producto de tipo {subcategory}."),
        (1, _) => format!(
            "Tu pedido debe incluir exactamente 1 producto de tipo {subcategory}, pero tiene {actual}."
        ),
        (_, 0) => format!("Tu pedido debe incluir {required} productos de tipo {subcategory}."),
        _ => format!(
            "Tu pedido debe incluir exactamente {required} productos de tipo {subcategory}, pero tiene {actual}."
        ),
    }
}
