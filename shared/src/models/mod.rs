//! Data models
//!
//! Read-only snapshots the order gate validates against.
//! All IDs are `i64`, money is `i64` cents.

pub mod category;
pub mod menu;
pub mod order;
pub mod order_rule;
pub mod product;
pub mod subcategory;
pub mod user;

// Re-exports
pub use category::*;
pub use menu::*;
pub use order::*;
pub use order_rule::*;
pub use product::*;
pub use subcategory::*;
pub use user::*;
