//! Dispatch timing per category and weekday
//!
//! Each category carries one dispatch line per weekday. An order for that
//! weekday needs `preparation_days` of notice; on the last possible day it
//! must be placed before `maximum_order_time`.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use shared::models::{Order, User};

use crate::utils::time::weekday_es;
use crate::validation::{OrderValidation, ValidationContext, ValidationError, ValidationResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchRulesCategoriesValidation;

#[async_trait]
impl OrderValidation for DispatchRulesCategoriesValidation {
    fn name(&self) -> &'static str {
        "dispatch_rules_categories"
    }

    async fn check(
        &self,
        ctx: &ValidationContext<'_>,
        order: &Order,
        user: &User,
        date: NaiveDate,
    ) -> ValidationResult<()> {
        if user.allow_late_orders {
            return Ok(());
        }

        let weekday = date.weekday();
        let days_ahead = (date - ctx.now.date()).num_days();

        for line in &order.lines {
            let product = &line.product.name;
            let Some(rule) = line.category.line_for(weekday) else {
                return Err(ValidationError::rejected(format!(
                    "El producto '{product}' no está disponible para el día {}.",
                    weekday_es(weekday)
                )));
            };

            let preparation = i64::from(rule.preparation_days);
            if days_ahead > preparation {
                continue;
            }

            if days_ahead == preparation {
                if ctx.now.time() > rule.maximum_order_time {
                    return Err(ValidationError::rejected(format!(
                        "El producto '{product}' no se puede pedir después de las {} hrs.",
                        rule.maximum_order_time.format("%H:%M")
                    )));
                }
                continue;
            }

            let noun = if rule.preparation_days == 1 { "día" } else { "días" };
            return Err(ValidationError::rejected(format!(
                "El producto '{product}' no puede ser pedido para este día. Debe ser pedido con {} {noun} de anticipación.",
                rule.preparation_days
            )));
        }

        Ok(())
    }
}
