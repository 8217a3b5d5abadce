//! Order status guards

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{Order, OrderStatus, User};

use crate::validation::{OrderValidation, ValidationContext, ValidationError, ValidationResult};

const ALREADY_PROCESSED: &str = "La orden ya ha sido procesada";

/// Rejects canceled orders
#[derive(Debug, Clone)]
pub struct OrderNotCanceledValidation {
    message: String,
}

impl OrderNotCanceledValidation {
    pub const DEFAULT_MESSAGE: &'static str = "No se puede modificar una orden cancelada";

    pub fn new() -> Self {
        Self::with_message(Self::DEFAULT_MESSAGE)
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for OrderNotCanceledValidation {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderValidation for OrderNotCanceledValidation {
    fn name(&self) -> &'static str {
        "order_not_canceled"
    }

    async fn check(
        &self,
        _ctx: &ValidationContext<'_>,
        order: &Order,
        _user: &User,
        _date: NaiveDate,
    ) -> ValidationResult<()> {
        if order.status == OrderStatus::Canceled {
            return Err(ValidationError::rejected(self.message.clone()));
        }
        Ok(())
    }
}

/// Rejects orders already processed
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderNotProcessedValidation;

#[async_trait]
impl OrderValidation for OrderNotProcessedValidation {
    fn name(&self) -> &'static str {
        "order_not_processed"
    }

    async fn check(
        &self,
        _ctx: &ValidationContext<'_>,
        order: &Order,
        _user: &User,
        _date: NaiveDate,
    ) -> ValidationResult<()> {
        if order.status == OrderStatus::Processed {
            return Err(ValidationError::rejected(ALREADY_PROCESSED));
        }
        Ok(())
    }
}

/// Rejects orders already partially scheduled
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderNotPartiallyScheduledValidation;

#[async_trait]
impl OrderValidation for OrderNotPartiallyScheduledValidation {
    fn name(&self) -> &'static str {
        "order_not_partially_scheduled"
    }

    async fn check(
        &self,
        _ctx: &ValidationContext<'_>,
        order: &Order,
        _user: &User,
        _date: NaiveDate,
    ) -> ValidationResult<()> {
        if order.status == OrderStatus::PartiallyScheduled {
            return Err(ValidationError::rejected(ALREADY_PROCESSED));
        }
        Ok(())
    }
}
