//! Exclusion checks
//!
//! Pairs from the winning exclusion rule may not appear together in one
//! order. Null products stand for "nothing chosen" and never take part in a
//! conflict.

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{Order, OrderLine, RuleTarget, User};

use crate::permissions::{is_agreement_consolidated, is_agreement_individual};
use crate::validation::{OrderValidation, ValidationContext, ValidationError, ValidationResult};

fn is_real(line: &OrderLine) -> bool {
    !line.product.is_null_product
}

/// Subcategory to subcategory exclusions for individual agreement users
#[derive(Debug, Clone, Copy, Default)]
pub struct SubcategoryExclusion;

#[async_trait]
impl OrderValidation for SubcategoryExclusion {
    fn name(&self) -> &'static str {
        "subcategory_exclusion"
    }

    async fn check(
        &self,
        ctx: &ValidationContext<'_>,
        order: &Order,
        user: &User,
        _date: NaiveDate,
    ) -> ValidationResult<()> {
        if !user.validate_subcategory_rules || !is_agreement_individual(user) {
            return Ok(());
        }

        let exclusions = ctx.rules.subcategory_exclusions(user).await?;
        if exclusions.is_empty() {
            return Ok(());
        }

        let lines: Vec<&OrderLine> = order
            .lines
            .iter()
            .filter(|l| l.category.has_subcategories())
            .collect();

        for (i, line) in lines.iter().enumerate() {
            for (source, excluded) in exclusions.iter() {
                if !line.category.has_subcategory(source) {
                    continue;
                }
                for (j, other) in lines.iter().enumerate() {
                    if i == j || !is_real(line) || !is_real(other) {
                        continue;
                    }
                    if let Some(hit) = excluded.iter().find(|e| other.category.has_subcategory(e)) {
                        return Err(ValidationError::rejected(format!(
                            "No puedes combinar las subcategorías: {source} con {hit}."
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Category/subcategory exclusions of any kind for consolidated agreement users
#[derive(Debug, Clone, Copy, Default)]
pub struct PolymorphicExclusion;

fn line_matches(line: &OrderLine, target: &RuleTarget) -> bool {
    match target {
        RuleTarget::Category { id, .. } => line.category.id == *id,
        RuleTarget::Subcategory { name, .. } => line.category.has_subcategory(name),
    }
}

#[async_trait]
impl OrderValidation for PolymorphicExclusion {
    fn name(&self) -> &'static str {
        "polymorphic_exclusion"
    }

    async fn check(
        &self,
        ctx: &ValidationContext<'_>,
        order: &Order,
        user: &User,
        _date: NaiveDate,
    ) -> ValidationResult<()> {
        if !user.validate_subcategory_rules || !is_agreement_consolidated(user) {
            return Ok(());
        }

        let exclusions = ctx.rules.polymorphic_exclusions(user).await?;
        if exclusions.is_empty() {
            return Ok(());
        }

        for (i, line) in order.lines.iter().enumerate() {
            if !is_real(line) {
                continue;
            }
            for exclusion in exclusions.iter() {
                if !line_matches(line, &exclusion.source) {
                    continue;
                }
                let conflict = order
                    .lines
                    .iter()
                    .enumerate()
                    .any(|(j, other)| i != j && is_real(other) && line_matches(other, &exclusion.excluded));
                if conflict {
                    let (source, excluded) = (&exclusion.source, &exclusion.excluded);
                    return Err(ValidationError::rejected(format!(
                        "No puedes combinar la {} '{}' con la {} '{}'.",
                        source.kind().label(),
                        source.name(),
                        excluded.kind().label(),
                        excluded.name()
                    )));
                }
            }
        }
        Ok(())
    }
}
