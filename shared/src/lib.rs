//! Shared types for the warung ordering system
//!
//! Domain models, the unified error type, and small utilities used by the
//! application crate.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
