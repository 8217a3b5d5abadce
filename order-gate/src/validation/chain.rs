//! Validation chain
//!
//! Ordered list of rules; the first rejection stops the run.

use chrono::NaiveDate;
use shared::models::{Order, User};

use super::context::{OrderValidation, ValidationContext};
use super::error::ValidationResult;

#[derive(Default)]
pub struct ValidationChain {
    links: Vec<Box<dyn OrderValidation>>,
}

impl ValidationChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule; rules run in the order they are linked
    pub fn link(mut self, rule: impl OrderValidation + 'static) -> Self {
        self.links.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Rule names in run order
    pub fn names(&self) -> Vec<&'static str> {
        self.links.iter().map(|r| r.name()).collect()
    }

    /// Run the rules against `owner`'s order
    ///
    /// A super master `acting` user skips every rule.
    pub async fn validate(
        &self,
        ctx: &ValidationContext<'_>,
        order: &Order,
        acting: &User,
        owner: &User,
        date: NaiveDate,
    ) -> ValidationResult<()> {
        if acting.super_master_user {
            tracing::debug!(order_id = order.id, acting_user = acting.id, "Order rules bypassed");
            return Ok(());
        }

        for rule in &self.links {
            tracing::debug!(order_id = order.id, rule = rule.name(), "Checking order rule");
            if let Err(e) = rule.check(ctx, order, owner, date).await {
                if e.is_rejection() {
                    tracing::warn!(order_id = order.id, rule = rule.name(), reason = %e, "Order rejected");
                } else {
                    tracing::error!(order_id = order.id, rule = rule.name(), error = %e, "Order rule lookup failed");
                }
                return Err(e);
            }
        }

        Ok(())
    }
}

/// Validate an order about to change state
pub async fn validate_order_transition(
    ctx: &ValidationContext<'_>,
    order: &Order,
    acting: &User,
    owner: &User,
    dispatch_date: NaiveDate,
    chain: &ValidationChain,
) -> ValidationResult<()> {
    chain.validate(ctx, order, acting, owner, dispatch_date).await
}
