//! Validation context and the rule trait

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use shared::models::{CategoryMenu, Menu, Order, User};

use super::error::{ValidationError, ValidationResult};
use crate::catalog::MenuSnapshotProvider;
use crate::rules::OrderRuleProvider;

pub const NO_ACTIVE_MENU: &str = "No se encontró un menú activo para la fecha";

/// Collaborators shared by every rule of a run
///
/// `now` is business-local time; rules never read the system clock.
#[derive(Clone, Copy)]
pub struct ValidationContext<'a> {
    pub menus: &'a dyn MenuSnapshotProvider,
    pub rules: &'a dyn OrderRuleProvider,
    pub now: NaiveDateTime,
}

impl<'a> ValidationContext<'a> {
    pub fn new(
        menus: &'a dyn MenuSnapshotProvider,
        rules: &'a dyn OrderRuleProvider,
        now: NaiveDateTime,
    ) -> Self {
        Self { menus, rules, now }
    }

    pub async fn current_menu(&self, date: NaiveDate, user: &User) -> ValidationResult<Option<Menu>> {
        Ok(self.menus.current_menu(date, user, self.now).await?)
    }

    /// Current menu, or the generic "no active menu" rejection
    pub async fn require_current_menu(&self, date: NaiveDate, user: &User) -> ValidationResult<Menu> {
        self.current_menu(date, user)
            .await?
            .ok_or_else(|| ValidationError::rejected(NO_ACTIVE_MENU))
    }

    pub async fn placements(&self, menu: &Menu, user: &User) -> ValidationResult<Vec<CategoryMenu>> {
        Ok(self.menus.category_menus_for_validation(menu, user).await?)
    }
}

/// One order rule
///
/// Rules are stateless: the same instance may serve concurrent runs.
#[async_trait]
pub trait OrderValidation: Send + Sync {
    /// Stable name used in logs
    fn name(&self) -> &'static str;

    async fn check(
        &self,
        ctx: &ValidationContext<'_>,
        order: &Order,
        user: &User,
        date: NaiveDate,
    ) -> ValidationResult<()>;
}
