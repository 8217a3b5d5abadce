use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{Order, User};

use crate::validation::{OrderValidation, ValidationContext, ValidationResult};

/// Placeholder for per-user ordering permissions; always passes
///
/// Not linked into any preset chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserPermissionValidation;

#[async_trait]
impl OrderValidation for UserPermissionValidation {
    fn name(&self) -> &'static str {
        "user_permission"
    }

    async fn check(
        &self,
        _ctx: &ValidationContext<'_>,
        _order: &Order,
        _user: &User,
        _date: NaiveDate,
    ) -> ValidationResult<()> {
        Ok(())
    }
}
