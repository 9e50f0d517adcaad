//! Data models
//!
//! Persisted aggregates are plain serde structs; each one is written whole
//! into its storage slot as JSON.

pub mod admin_user;
pub mod menu_item;
pub mod order;
pub mod session;

// Re-exports
pub use admin_user::*;
pub use menu_item::*;
pub use order::*;
pub use session::*;
