use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{Order, User};

use crate::utils::money::format_price;
use crate::validation::{OrderValidation, ValidationContext, ValidationError, ValidationResult};

/// Order total must reach the branch minimum
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxOrderAmountValidation;

#[async_trait]
impl OrderValidation for MaxOrderAmountValidation {
    fn name(&self) -> &'static str {
        "max_order_amount"
    }

    async fn check(
        &self,
        _ctx: &ValidationContext<'_>,
        order: &Order,
        user: &User,
        _date: NaiveDate,
    ) -> ValidationResult<()> {
        let minimum = user.min_price_order();
        if !user.validate_min_price || minimum <= 0 {
            return Ok(());
        }

        if order.total < minimum {
            return Err(ValidationError::rejected(format!(
                "El monto del pedido mínimo es {}",
                format_price(minimum)
            )));
        }
        Ok(())
    }
}
