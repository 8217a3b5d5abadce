//! Order Validation Module
//!
//! Decides whether an order may change state. A chain is an ordered list of
//! stateless rules; the first rejection wins and a super master acting user
//! skips the chain entirely.
//!
//! # 结构
//!
//! ```text
//! validation/
//! ├── error.rs     # ValidationError / ValidationResult
//! ├── context.rs   # ValidationContext + OrderValidation trait
//! ├── chain.rs     # ValidationChain + validate_order_transition
//! ├── support.rs   # 菜单组成规则共用的消息与分组
//! ├── presets.rs   # 各调用点使用的规则链
//! └── actions/     # 具体规则
//! ```

pub mod actions;
pub mod chain;
pub mod context;
pub mod error;
pub mod presets;
pub mod support;

#[cfg(test)]
pub(crate) mod fixtures;

pub use chain::{ValidationChain, validate_order_transition};
pub use context::{NO_ACTIVE_MENU, OrderValidation, ValidationContext};
pub use error::{ValidationError, ValidationResult};
pub use presets::{
    Preset, import_chain, order_update_chain, partially_schedule_chain, status_update_chain,
};
