//! Concrete order rules
//!
//! Each rule implements `OrderValidation` and is a no-op unless its guard
//! (permission tier plus the user's toggles) holds.

mod at_least_one_product;
mod dispatch_rules;
mod exclusion;
mod mandatory_category;
mod max_order_amount;
mod menu_composition;
mod menu_exists;
mod one_product_per_category;
mod order_status;
mod subcategory_quota;
mod user_permission;

pub use at_least_one_product::AtLeastOneProductByCategory;
pub use dispatch_rules::DispatchRulesCategoriesValidation;
pub use exclusion::{PolymorphicExclusion, SubcategoryExclusion};
pub use mandatory_category::MandatoryCategoryValidation;
pub use max_order_amount::MaxOrderAmountValidation;
pub use menu_composition::MenuCompositionValidation;
pub use menu_exists::MenuExistsValidation;
pub use one_product_per_category::{OneProductPerCategory, OneProductPerCategorySimple};
pub use order_status::{
    OrderNotCanceledValidation, OrderNotPartiallyScheduledValidation, OrderNotProcessedValidation,
};
pub use subcategory_quota::{ExactProductCountPerSubcategory, OneProductPerSubcategory};
pub use user_permission::UserPermissionValidation;
