//! Shared types for the catering order gate
//!
//! Domain models (menus, orders, users, order rules) and the unified
//! error type used across crates.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
