//! Order Rule Module
//!
//! Resolves operator-authored exclusion/limit rules for a user. Stores only
//! have to list rules by type; precedence is decided here so every store
//! resolves the same way.

pub mod resolver;
pub mod views;

pub use resolver::{RuleScope, matches_user, resolve_order_rule, scope_for};
pub use views::{ExclusionTable, SubcategoryExclusions, SubcategoryLimits, side_in_order};

use async_trait::async_trait;
use shared::models::{OrderRule, OrderRuleType, User};

use crate::db::repository::RepoResult;

/// Source of order rules
#[async_trait]
pub trait OrderRuleProvider: Send + Sync {
    /// All stored rules of a type (active or not)
    async fn rules_of_type(&self, rule_type: OrderRuleType) -> RepoResult<Vec<OrderRule>>;

    /// Winning rule of a type for the user
    async fn order_rule_for_user(
        &self,
        user: &User,
        rule_type: OrderRuleType,
    ) -> RepoResult<Option<OrderRule>> {
        let candidates = self.rules_of_type(rule_type).await?;
        let winner = resolve_order_rule(&candidates, user, rule_type).cloned();

        match &winner {
            Some(rule) => tracing::debug!(
                user_id = user.id,
                rule_type = rule_type.as_str(),
                rule_id = rule.id,
                priority = rule.priority,
                "Order rule resolved"
            ),
            None => tracing::debug!(
                user_id = user.id,
                rule_type = rule_type.as_str(),
                "No order rule configured"
            ),
        }

        Ok(winner)
    }

    /// Every exclusion of the winning exclusion rule
    async fn polymorphic_exclusions(&self, user: &User) -> RepoResult<ExclusionTable> {
        Ok(self
            .order_rule_for_user(user, OrderRuleType::SubcategoryExclusion)
            .await?
            .map(|rule| ExclusionTable::new(rule.exclusions))
            .unwrap_or_default())
    }

    /// Subcategory -> subcategory exclusions of the winning exclusion rule
    async fn subcategory_exclusions(&self, user: &User) -> RepoResult<SubcategoryExclusions> {
        Ok(self.polymorphic_exclusions(user).await?.subcategory_pairs())
    }

    /// Quotas of the winning limit rule
    ///
    /// Limits stored on other rule types are not quotas.
    async fn subcategory_limits(&self, user: &User) -> RepoResult<SubcategoryLimits> {
        Ok(self
            .order_rule_for_user(user, OrderRuleType::ProductLimitPerSubcategory)
            .await?
            .map(|rule| SubcategoryLimits::from_limits(&rule.subcategory_limits))
            .unwrap_or_default())
    }
}
