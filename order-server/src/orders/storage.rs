//! redb-based document store for orders and users
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `orders` | `order_id` | `Order` (JSON) | Order documents, days embedded |
//! | `users` | `user_id` | `User` (JSON) | Customer contact, worker active slots |
//!
//! # Concurrency
//!
//! redb serializes write transactions. [`OrderStorage::save_order`] reads the
//! stored `version` inside the write transaction and refuses the write when it
//! differs from the version the caller loaded, so two workers racing on the
//! same document cannot silently overwrite each other.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::models::{Order, User};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Orders: key = order_id, value = JSON-serialized Order
const ORDERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("orders");

/// Users: key = user_id, value = JSON-serialized User
const USERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("users");

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

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Order already exists: {0}")]
    OrderExists(String),

    #[error("Version conflict on {order_id}: expected {expected}, found {found}")]
    VersionConflict {
        order_id: String,
        expected: u64,
        found: u64,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Document storage backed by redb
#[derive(Clone)]
pub struct OrderStorage {
    db: Arc<Database>,
}

impl std::fmt::Debug for OrderStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderStorage").finish_non_exhaustive()
    }
}

impl OrderStorage {
    /// Open or create the database at the given path
    ///
    /// redb commits with `Durability::Immediate` by default: once `commit()`
    /// returns the document is on disk.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (tests and local tooling)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(ORDERS_TABLE)?;
            let _ = write_txn.open_table(USERS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    // ========== Orders ==========

    /// Insert a new order document (version starts where the caller set it)
    pub fn insert_order(&self, order: &Order) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(ORDERS_TABLE)?;
            if table.get(order.id.as_str())?.is_some() {
                return Err(StorageError::OrderExists(order.id.clone()));
            }
            let value = serde_json::to_vec(order)?;
            table.insert(order.id.as_str(), value.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn get_order(&self, order_id: &str) -> StorageResult<Option<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;

        match table.get(order_id)? {
            Some(value) => {
                let order: Order = serde_json::from_slice(value.value())?;
                Ok(Some(order))
            }
            None => Ok(None),
        }
    }

    /// Replace the whole document if nobody saved it since it was loaded.
    ///
    /// `order.version` must be the version that was read; the stored copy
    /// gets `version + 1`, which is returned.
    pub fn save_order(&self, order: &Order) -> StorageResult<Order> {
        let write_txn = self.db.begin_write()?;
        let saved = {
            let mut table = write_txn.open_table(ORDERS_TABLE)?;

            let found = match table.get(order.id.as_str())? {
                Some(value) => serde_json::from_slice::<Order>(value.value())?.version,
                None => return Err(StorageError::OrderNotFound(order.id.clone())),
            };
            if found != order.version {
                return Err(StorageError::VersionConflict {
                    order_id: order.id.clone(),
                    expected: order.version,
                    found,
                });
            }

            let mut next = order.clone();
            next.version = found + 1;
            let value = serde_json::to_vec(&next)?;
            table.insert(next.id.as_str(), value.as_slice())?;
            next
        };
        write_txn.commit()?;
        Ok(saved)
    }

    /// Every order document (full scan)
    pub fn list_orders(&self) -> StorageResult<Vec<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;

        let mut orders = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            orders.push(serde_json::from_slice(value.value())?);
        }

        Ok(orders)
    }

    // ========== Users ==========

    pub fn get_user(&self, user_id: &str) -> StorageResult<Option<User>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(USERS_TABLE)?;

        match table.get(user_id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Insert or replace a user document
    pub fn put_user(&self, user: &User) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(USERS_TABLE)?;
            let value = serde_json::to_vec(user)?;
            table.insert(user.id.as_str(), value.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
