use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{Order, User};

use crate::permissions::is_cafe_individual;
use crate::validation::{OrderValidation, ValidationContext, ValidationError, ValidationResult};

/// Café individual users must order from every mandatory category of the menu
#[derive(Debug, Clone, Copy, Default)]
pub struct MandatoryCategoryValidation;

#[async_trait]
impl OrderValidation for MandatoryCategoryValidation {
    fn name(&self) -> &'static str {
        "mandatory_category"
    }

    async fn check(
        &self,
        ctx: &ValidationContext<'_>,
        order: &Order,
        user: &User,
        date: NaiveDate,
    ) -> ValidationResult<()> {
        if !is_cafe_individual(user) {
            return Ok(());
        }

        let menu = ctx.require_current_menu(date, user).await?;
        let placements = ctx.placements(&menu, user).await?;

        if let Some(missing) = placements
            .iter()
            .filter(|cm| cm.mandatory_category)
            .find(|cm| !order.has_category(cm.category.id))
        {
            return Err(ValidationError::rejected(format!(
                "Debe seleccionar un producto de la categoría: {}",
                missing.category.name
            )));
        }
        Ok(())
    }
}
