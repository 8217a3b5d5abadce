//! Menu completeness for individual agreement users
//!
//! With subcategory rules the menu is complete when every required
//! subcategory it offers is ordered and every plain category has exactly one
//! line. Without them every menu category needs exactly one line.

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{Order, User};

use crate::permissions::is_agreement_individual;
use crate::validation::support::{
    check_one_line_per_category, incomplete_menu, plain_placements, required_in_menu,
};
use crate::validation::{OrderValidation, ValidationContext, ValidationResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct MenuCompositionValidation;

#[async_trait]
impl OrderValidation for MenuCompositionValidation {
    fn name(&self) -> &'static str {
        "menu_composition"
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

        if user.validate_subcategory_rules {
            let missing: Vec<&str> = required_in_menu(&placements)
                .into_iter()
                .filter(|name| !order.has_subcategory(name))
                .collect();
            if !missing.is_empty() {
                return Err(incomplete_menu(&missing));
            }

            let missing: Vec<&str> = plain_placements(&placements)
                .filter(|cm| !order.has_category(cm.category.id))
                .map(|cm| cm.category.name.as_str())
                .collect();
            if !missing.is_empty() {
                return Err(incomplete_menu(&missing));
            }

            return check_one_line_per_category(plain_placements(&placements), order);
        }

        let missing: Vec<&str> = placements
            .iter()
            .filter(|cm| !order.has_category(cm.category.id))
            .map(|cm| cm.category.name.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(incomplete_menu(&missing));
        }

        check_one_line_per_category(&placements, order)
    }
}
