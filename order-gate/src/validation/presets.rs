//! Preset chains used by the ordering workflow

use serde::{Deserialize, Serialize};

use super::actions::*;
use super::chain::ValidationChain;

/// Lines of an order changed
pub fn order_update_chain() -> ValidationChain {
    ValidationChain::new()
        .link(DispatchRulesCategoriesValidation)
        .link(OneProductPerCategorySimple)
        .link(OneProductPerSubcategory)
        .link(SubcategoryExclusion)
        .link(PolymorphicExclusion)
}

/// Order moves to PROCESSED
pub fn status_update_chain() -> ValidationChain {
    ValidationChain::new()
        .link(OrderNotProcessedValidation)
        .link(OrderNotCanceledValidation::with_message(
            "No se puede procesar una orden cancelada",
        ))
        .link(MenuExistsValidation)
        .link(DispatchRulesCategoriesValidation)
        .link(AtLeastOneProductByCategory)
        .link(MaxOrderAmountValidation)
        .link(SubcategoryExclusion)
        .link(MenuCompositionValidation)
        .link(MandatoryCategoryValidation)
        .link(ExactProductCountPerSubcategory)
}

/// Order moves to PARTIALLY_SCHEDULED
pub fn partially_schedule_chain() -> ValidationChain {
    ValidationChain::new()
        .link(OrderNotPartiallyScheduledValidation)
        .link(MenuExistsValidation)
        .link(DispatchRulesCategoriesValidation)
        .link(MandatoryCategoryValidation)
}

/// Orders created by bulk import
pub fn import_chain() -> ValidationChain {
    ValidationChain::new().link(MaxOrderAmountValidation)
}

/// Named preset, as written in request files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    OrderUpdate,
    StatusUpdate,
    PartiallySchedule,
    Import,
}

impl Preset {
    pub fn chain(self) -> ValidationChain {
        match self {
            Self::OrderUpdate => order_update_chain(),
            Self::StatusUpdate => status_update_chain(),
            Self::PartiallySchedule => partially_schedule_chain(),
            Self::Import => import_chain(),
        }
    }
}
