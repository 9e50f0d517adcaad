//! Warung POS - ordering core for a single food stall
//!
//! All state lives in one embedded key/value database; there is no server
//! and no cross-device sync. Three independent persisted stores back the
//! application, each one a plain in-memory aggregate written whole to its
//! own storage slot after every mutation:
//!
//! - **Catalog** (`catalog`): the orderable menu
//! - **Ledger** (`ledger`): placed orders and their status lifecycle
//! - **Directory** (`directory`): admin credentials plus the login session
//!
//! The cart (`cart`) is ephemeral and never persisted. The chef client
//! (`chef`) is the one network call in the system and degrades to static
//! copy on any failure.
//!
//! # Module structure
//!
//! ```text
//! warung-pos/src/
//! ├── core/          # Configuration, logging
//! ├── storage.rs     # redb slot store (persistence primitive)
//! ├── catalog/       # Menu catalog store
//! ├── ledger/        # Order ledger store
//! ├── directory/     # Admin directory + session
//! ├── cart.rs        # Ephemeral cart + checkout
//! └── chef/          # AI dish description client
//! ```

pub mod cart;
pub mod catalog;
pub mod chef;
pub mod core;
pub mod directory;
pub mod ledger;
pub mod storage;

// Re-export public types
pub use crate::core::config::Config;
pub use cart::Cart;
pub use catalog::MenuCatalog;
pub use chef::{ChefClient, ChefSuggestion};
pub use directory::AdminDirectory;
pub use ledger::OrderLedger;
pub use storage::SlotStore;
