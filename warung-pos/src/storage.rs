//! redb-backed slot storage
//!
//! # Slots
//!
//! | Slot | Value |
//! |------|-------|
//! | `orders` | JSON array of `Order` |
//! | `menu` | JSON array of `MenuItem` |
//! | `admin_users` | JSON array of `AdminUser` |
//! | `session` | JSON `Session` object |
//!
//! Every slot holds one whole JSON-serialized aggregate in a single `slots`
//! table. Writes serialize the full value and commit synchronously; there is
//! no batching, no debounce, and no schema versioning. The slots are
//! independent: nothing coordinates a write to one slot with a write to
//! another, so a crash between two writes can leave them mutually
//! inconsistent (matching the single-tab, last-write-wins model this app
//! targets).
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate` by default: once `commit()`
//! returns the value is on disk, and copy-on-write keeps the file consistent
//! across power loss.

use redb::{Database, ReadableDatabase, TableDefinition};
use serde::{Serialize, de::DeserializeOwned};
use shared::error::AppError;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Single table holding every slot: key = slot name, value = JSON bytes
const SLOTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("slots");

/// Order ledger slot
pub const ORDERS_SLOT: &str = "orders";
/// Menu catalog slot
pub const MENU_SLOT: &str = "menu";
/// Admin directory slot
pub const ADMIN_USERS_SLOT: &str = "admin_users";
/// Login session slot
pub const SESSION_SLOT: &str = "session";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        AppError::storage(e.to_string())
    }
}

/// Slot store backed by redb
///
/// Cheap to clone; every store holds its own handle to the same database.
#[derive(Clone)]
pub struct SlotStore {
    db: Arc<Database>,
}

impl SlotStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SLOTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SLOTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Read and deserialize a slot. Missing slot is `None`.
    pub fn read_slot<T: DeserializeOwned>(&self, slot: &str) -> StorageResult<Option<T>> {
        match self.read_raw(slot)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Load a slot, substituting the supplied default when the slot is
    /// absent or its payload cannot be read or parsed.
    ///
    /// Failures are logged, never raised: a corrupt slot must not take the
    /// stall offline, worst case is a defaulted view.
    pub fn load_or_default<T, F>(&self, slot: &str, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.read_raw(slot) {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(slot, error = %e, "Corrupt slot payload, using default");
                    default()
                }
            },
            Ok(None) => default(),
            Err(e) => {
                tracing::warn!(slot, error = %e, "Failed to read slot, using default");
                default()
            }
        }
    }

    /// Serialize the full value and write it to the slot, committing
    /// synchronously.
    pub fn write_slot<T: Serialize>(&self, slot: &str, value: &T) -> StorageResult<()> {
        let bytes = serde_json::to_vec(value)?;
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(SLOTS_TABLE)?;
            table.insert(slot, bytes.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Delete the slot key entirely (not the same as writing an empty value)
    pub fn remove_slot(&self, slot: &str) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(SLOTS_TABLE)?;
            table.remove(slot)?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Whether the slot key exists at all
    pub fn contains_slot(&self, slot: &str) -> StorageResult<bool> {
        Ok(self.read_raw(slot)?.is_some())
    }

    fn read_raw(&self, slot: &str) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SLOTS_TABLE)?;
        Ok(table.get(slot)?.map(|guard| guard.value().to_vec()))
    }
}
