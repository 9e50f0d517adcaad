//! Unified error type
//!
//! [`ErrorCode`] gives every failure a stable numeric identity, grouped by
//! domain:
//!
//! - 0xxx: general errors
//! - 4xxx: order errors
//! - 8xxx: admin errors
//! - 9xxx: system errors
//!
//! [`AppError`] pairs a code with a human-readable message. Stores return it
//! from operations that can be refused for business reasons; callers match on
//! `code` rather than parsing messages.

use crate::models::OrderStatus;
use thiserror::Error;

/// Standardized error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Validation failed (E0002)
    ValidationFailed,
    /// Resource not found (E0003)
    NotFound,
    /// Resource already exists (E0004)
    AlreadyExists,
    /// Order not found (E4001)
    OrderNotFound,
    /// Illegal order status transition (E4002)
    InvalidTransition,
    /// Deleting the last admin account is refused (E8001)
    LastAdmin,
    /// Internal error (E9001)
    InternalError,
    /// Storage error (E9002)
    StorageError,
}

impl ErrorCode {
    /// Error code string, stable across releases
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "E0002",
            Self::NotFound => "E0003",
            Self::AlreadyExists => "E0004",
            Self::OrderNotFound => "E4001",
            Self::InvalidTransition => "E4002",
            Self::LastAdmin => "E8001",
            Self::InternalError => "E9001",
            Self::StorageError => "E9002",
        }
    }

    /// Default message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::OrderNotFound => "Order not found",
            Self::InvalidTransition => "Illegal order status transition",
            Self::LastAdmin => "The last admin account cannot be deleted",
            Self::InternalError => "Internal error",
            Self::StorageError => "Storage error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Application error with a structured code
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    // ========== Convenience constructors ==========

    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, message)
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, format!("{} not found", resource.into()))
    }

    pub fn order_not_found(id: impl Into<String>) -> Self {
        Self::with_message(
            ErrorCode::OrderNotFound,
            format!("Order not found: {}", id.into()),
        )
    }

    pub fn invalid_transition(from: OrderStatus, to: OrderStatus) -> Self {
        Self::with_message(
            ErrorCode::InvalidTransition,
            format!("Illegal status transition: {:?} -> {:?}", from, to),
        )
    }

    pub fn last_admin() -> Self {
        Self::new(ErrorCode::LastAdmin)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, message)
    }
}

/// Result type for store operations
pub type AppResult<T> = Result<T, AppError>;
