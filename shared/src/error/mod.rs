//! Unified error system for the order gate
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`AppError`]: Error type carrying a code and a message
//!
//! # Error Code Ranges
//!
//! - 0xxx: Request errors (including order rejections)
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::validation("La orden ya ha sido procesada");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! assert_eq!(err.code.code(), 2);
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
