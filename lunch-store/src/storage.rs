//! redb-based record storage
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `lunch_orders` | `id` | `LunchOrder` | One row per lunch order (append-only) |
//! | `office_tallies` | `id` | `OfficeTally` | One row per tally entry (append-only) |
//! | `sequence_counter` | record kind | `i64` | Last id handed out per table |
//!
//! Ids are allocated inside the same write transaction as the row, so a
//! failed insert never burns an id.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition, WriteTransaction};
use serde::de::DeserializeOwned;
use shared::models::{LunchOrder, LunchOrderCreate, OfficeTally, OfficeTallyCreate};

use crate::{RecordStore, StoreError, StoreResult};

/// Lunch orders: key = id, value = JSON-serialized LunchOrder
const LUNCH_ORDERS_TABLE: TableDefinition<i64, &[u8]> = TableDefinition::new("lunch_orders");

/// Office tallies: key = id, value = JSON-serialized OfficeTally
const OFFICE_TALLIES_TABLE: TableDefinition<i64, &[u8]> = TableDefinition::new("office_tallies");

/// Id counters: key = record kind, value = last assigned id
const SEQUENCE_TABLE: TableDefinition<&str, i64> = TableDefinition::new("sequence_counter");

const LUNCH_ORDER_SEQ: &str = "lunch_order";
const OFFICE_TALLY_SEQ: &str = "office_tally";

/// Record storage backed by redb
#[derive(Clone)]
pub struct RecordStorage {
    db: Arc<Database>,
}

impl RecordStorage {
    /// Open or create the database at the given path
    ///
    /// redb commits with `Durability::Immediate` by default, so a row is on
    /// disk as soon as its insert returns.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StoreResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LUNCH_ORDERS_TABLE)?;
            let _ = write_txn.open_table(OFFICE_TALLIES_TABLE)?;
            let _ = write_txn.open_table(SEQUENCE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Increment and return the id counter for `kind` (within transaction)
    fn next_id(txn: &WriteTransaction, kind: &str) -> StoreResult<i64> {
        let mut table = txn.open_table(SEQUENCE_TABLE)?;
        let current = table.get(kind)?.map(|guard| guard.value()).unwrap_or(0);
        let next = current + 1;
        table.insert(kind, next)?;
        Ok(next)
    }

    fn check_restaurant(restaurant: &str) -> StoreResult<()> {
        if restaurant.trim().is_empty() {
            return Err(StoreError::InvalidRecord("restaurant must not be empty"));
        }
        Ok(())
    }

    // ========== Lunch Orders ==========

    /// Append a lunch order and return its id
    pub fn insert_lunch_order(&self, order: &LunchOrderCreate) -> StoreResult<i64> {
        Self::check_restaurant(&order.restaurant)?;

        let txn = self.db.begin_write()?;
        let id = Self::next_id(&txn, LUNCH_ORDER_SEQ)?;
        let record = LunchOrder {
            id,
            restaurant: order.restaurant.clone(),
            metadata: order.metadata.clone(),
            created_at: Utc::now(),
            is_deleted: false,
        };
        {
            let mut table = txn.open_table(LUNCH_ORDERS_TABLE)?;
            let value = serde_json::to_vec(&record)?;
            table.insert(id, value.as_slice())?;
        }
        txn.commit()?;

        tracing::debug!(id, restaurant = %record.restaurant, "Lunch order stored");
        Ok(id)
    }

    /// All lunch orders, ordered by id
    pub fn lunch_orders(&self) -> StoreResult<Vec<LunchOrder>> {
        self.read_all(LUNCH_ORDERS_TABLE)
    }

    // ========== Office Tallies ==========

    /// Append an office tally entry and return its id
    pub fn insert_office_tally(&self, tally: &OfficeTallyCreate) -> StoreResult<i64> {
        Self::check_restaurant(&tally.restaurant)?;

        let txn = self.db.begin_write()?;
        let id = Self::next_id(&txn, OFFICE_TALLY_SEQ)?;
        let record = OfficeTally {
            id,
            restaurant: tally.restaurant.clone(),
            tally: tally.tally,
            created_at: Utc::now(),
            is_deleted: false,
        };
        {
            let mut table = txn.open_table(OFFICE_TALLIES_TABLE)?;
            let value = serde_json::to_vec(&record)?;
            table.insert(id, value.as_slice())?;
        }
        txn.commit()?;

        tracing::debug!(id, restaurant = %record.restaurant, tally = record.tally, "Office tally stored");
        Ok(id)
    }

    /// All office tallies, ordered by id
    pub fn office_tallies(&self) -> StoreResult<Vec<OfficeTally>> {
        self.read_all(OFFICE_TALLIES_TABLE)
    }

    fn read_all<T: DeserializeOwned>(
        &self,
        definition: TableDefinition<i64, &[u8]>,
    ) -> StoreResult<Vec<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(definition)?;

        let mut records = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            records.push(serde_json::from_slice(value.value())?);
        }
        Ok(records)
    }
}

impl RecordStore for RecordStorage {
    fn insert_lunch_order(&self, order: &LunchOrderCreate) -> StoreResult<i64> {
        RecordStorage::insert_lunch_order(self, order)
    }

    fn insert_office_tally(&self, tally: &OfficeTallyCreate) -> StoreResult<i64> {
        RecordStorage::insert_office_tally(self, tally)
    }
}
