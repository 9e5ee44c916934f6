//! In-memory record store.

use std::sync::RwLock;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{DashboardError, DashboardResult};
use crate::models::EmployeeRecord;

use super::RecordStore;

/// A record store holding rows in a vector, in insertion order.
///
/// # Example
///
/// ```
/// use hr_dashboard::store::{MemoryStore, RecordStore};
/// use hr_dashboard::models::EmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let store = MemoryStore::new();
/// let record = EmployeeRecord {
///     employee_number: 1,
///     age: 30,
///     department: "Sales".to_string(),
///     job_role: "Manager".to_string(),
///     monthly_income: Decimal::new(12000, 0),
///     performance_rating: 3,
///     attrition: "No".to_string(),
/// };
///
/// store.insert(record.clone()).unwrap();
/// assert!(store.insert(record).is_err());
/// assert_eq!(store.update_income(1, Decimal::new(13000, 0)).unwrap(), 1);
/// assert_eq!(store.update_income(99, Decimal::new(13000, 0)).unwrap(), 0);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<EmployeeRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `records`.
    ///
    /// Fails with `DuplicateKey` if two records share an employee number.
    pub fn from_records(records: Vec<EmployeeRecord>) -> DashboardResult<Self> {
        let store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }
}

fn poisoned() -> DashboardError {
    DashboardError::store("in-memory store lock poisoned")
}

impl RecordStore for MemoryStore {
    fn load_all(&self) -> DashboardResult<Vec<EmployeeRecord>> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.clone())
    }

    fn insert(&self, record: EmployeeRecord) -> DashboardResult<()> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        if records
            .iter()
            .any(|existing| existing.employee_number == record.employee_number)
        {
            return Err(DashboardError::DuplicateKey {
                employee_number: record.employee_number,
            });
        }
        debug!(employee_number = record.employee_number, "Inserting record");
        records.push(record);
        Ok(())
    }

    fn update_income(&self, employee_number: i64, new_income: Decimal) -> DashboardResult<usize> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        let mut rows_affected = 0;
        for record in records
            .iter_mut()
            .filter(|record| record.employee_number == employee_number)
        {
            record.monthly_income = new_income;
            rows_affected += 1;
        }
        debug!(employee_number, rows_affected, "Updated income");
        Ok(rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(employee_number: i64, income: i64) -> EmployeeRecord {
        EmployeeRecord {
            employee_number,
            age: 35,
            department: "Sales".to_string(),
            job_role: "Manager".to_string(),
            monthly_income: Decimal::new(income, 0),
            performance_rating: 3,
            attrition: "No".to_string(),
        }
    }

    #[test]
    fn test_load_preserves_insertion_order() {
        let store = MemoryStore::new();
        store.insert(record(3, 5000)).unwrap();
        store.insert(record(1, 5000)).unwrap();
        store.insert(record(2, 5000)).unwrap();

        let numbers: Vec<i64> = store
            .load_all()
            .unwrap()
            .iter()
            .map(|r| r.employee_number)
            .collect();
        assert_eq!(numbers, vec![3, 1, 2]);
    }

    #[test]
    fn test_duplicate_insert_leaves_store_unchanged() {
        let store = MemoryStore::from_records(vec![record(1, 5000)]).unwrap();

        let result = store.insert(record(1, 9000));
        assert!(matches!(
            result,
            Err(DashboardError::DuplicateKey { employee_number: 1 })
        ));

        let records = store.load_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].monthly_income, Decimal::new(5000, 0));
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let result = MemoryStore::from_records(vec![record(1, 5000), record(1, 6000)]);
        assert!(matches!(
            result,
            Err(DashboardError::DuplicateKey { employee_number: 1 })
        ));
    }

    #[test]
    fn test_update_income_changes_only_target() {
        let store = MemoryStore::from_records(vec![record(1, 5000), record(2, 5000)]).unwrap();

        assert_eq!(store.update_income(2, Decimal::new(7500, 0)).unwrap(), 1);

        let records = store.load_all().unwrap();
        assert_eq!(records[0].monthly_income, Decimal::new(5000, 0));
        assert_eq!(records[1].monthly_income, Decimal::new(7500, 0));
    }

    #[test]
    fn test_update_missing_key_is_noop() {
        let store = MemoryStore::from_records(vec![record(1, 5000)]).unwrap();
        let before = store.load_all().unwrap();

        assert_eq!(store.update_income(42, Decimal::new(7500, 0)).unwrap(), 0);
        assert_eq!(store.load_all().unwrap(), before);
    }
}
