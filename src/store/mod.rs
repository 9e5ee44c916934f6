//! Record store adapters.
//!
//! The dashboard reads and mutates employee records only through the
//! [`RecordStore`] trait. Two implementations are provided: [`MemoryStore`]
//! for tests and seeded demos, and [`SqliteStore`] for a persistent
//! `employees` table.

mod memory;
mod sqlite;

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;

use crate::config::StoreConfig;
use crate::error::DashboardResult;
use crate::models::EmployeeRecord;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Access to the employee table.
///
/// Implementations own no business logic and do not validate records; that
/// happens before a mutation reaches the store. A single handle is shared by
/// every request, so implementations guard their own state.
pub trait RecordStore: Send + Sync {
    /// Reads a full snapshot of every record.
    fn load_all(&self) -> DashboardResult<Vec<EmployeeRecord>>;

    /// Writes a new record.
    ///
    /// The uniqueness check and the write are a single atomic operation. If
    /// the employee number is already present this returns
    /// [`crate::error::DashboardError::DuplicateKey`] and writes nothing.
    fn insert(&self, record: EmployeeRecord) -> DashboardResult<()>;

    /// Overwrites the monthly income of the record with `employee_number`.
    ///
    /// Returns the number of rows changed; an unknown employee number is not
    /// an error and yields zero.
    fn update_income(&self, employee_number: i64, new_income: Decimal) -> DashboardResult<usize>;
}

/// Opens the store described by the configuration.
pub fn open_store(config: &StoreConfig) -> DashboardResult<Arc<dyn RecordStore>> {
    match config {
        StoreConfig::Sqlite { path } => {
            info!(path = %path.display(), "Opening SQLite record store");
            Ok(Arc::new(SqliteStore::open(path)?))
        }
        StoreConfig::Memory { seed } => {
            let records = match seed {
                Some(seed) => crate::config::ConfigLoader::load_seed(seed)?,
                None => Vec::new(),
            };
            info!(records = records.len(), "Opening in-memory record store");
            Ok(Arc::new(MemoryStore::from_records(records)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_empty_memory_store() {
        let store = open_store(&StoreConfig::Memory { seed: None }).unwrap();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_open_memory_store_with_missing_seed_fails() {
        let config = StoreConfig::Memory {
            seed: Some("/nonexistent/seed.yaml".into()),
        };
        assert!(open_store(&config).is_err());
    }

    #[test]
    fn test_stores_are_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn RecordStore>();
    }
}
