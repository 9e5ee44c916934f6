//! SQLite-backed record store.
//!
//! Uses the `employees` table layout of the existing dashboard database, so
//! an `employees.db` created elsewhere can be opened directly. The table is
//! created when missing.

use std::path::Path;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ValueRef};
use rusqlite::{Connection, ErrorCode, params};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{DashboardError, DashboardResult};
use crate::models::EmployeeRecord;

use super::RecordStore;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS employees (
    EmployeeNumber INTEGER PRIMARY KEY,
    Age INTEGER NOT NULL,
    Department TEXT NOT NULL,
    JobRole TEXT NOT NULL,
    MonthlyIncome NUMERIC NOT NULL,
    PerformanceRating INTEGER NOT NULL,
    Attrition TEXT NOT NULL
)";

const SELECT_ALL: &str = "SELECT EmployeeNumber, Age, Department, JobRole, MonthlyIncome, \
     PerformanceRating, Attrition FROM employees ORDER BY rowid";

// Uniqueness check and write in one statement; a table created elsewhere may
// lack the primary key constraint.
const INSERT_IF_ABSENT: &str = "INSERT INTO employees (EmployeeNumber, Age, Department, JobRole, \
     MonthlyIncome, PerformanceRating, Attrition) \
     SELECT ?1, ?2, ?3, ?4, ?5, ?6, ?7 \
     WHERE NOT EXISTS (SELECT 1 FROM employees WHERE EmployeeNumber = ?1)";

const UPDATE_INCOME: &str = "UPDATE employees SET MonthlyIncome = ?1 WHERE EmployeeNumber = ?2";

/// A record store over a SQLite `employees` table.
///
/// The connection is shared by all callers behind a mutex.
///
/// # Example
///
/// ```
/// use hr_dashboard::store::{RecordStore, SqliteStore};
///
/// let store = SqliteStore::open_in_memory().unwrap();
/// assert!(store.load_all().unwrap().is_empty());
/// ```
#[derive(Debug)]
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens (or creates) the database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| {
            DashboardError::store(format!("failed to open {}: {}", path.display(), e))
        })?;
        Self::with_connection(conn)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> DashboardResult<Self> {
        let conn = Connection::open_in_memory().map_err(store_error)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> DashboardResult<Self> {
        conn.execute(CREATE_TABLE, []).map_err(store_error)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> DashboardResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| DashboardError::store("SQLite connection lock poisoned"))
    }
}

fn store_error(error: rusqlite::Error) -> DashboardError {
    DashboardError::store(error.to_string())
}

fn is_key_violation(error: &rusqlite::Error) -> bool {
    match error {
        rusqlite::Error::SqliteFailure(err, _) => {
            err.code == ErrorCode::ConstraintViolation
                && matches!(
                    err.extended_code,
                    rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                        | rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                )
        }
        _ => false,
    }
}

/// `MonthlyIncome` as read back from SQLite. Depending on who wrote the row
/// the value may be stored as INTEGER, REAL or TEXT.
struct SqlIncome(Decimal);

impl FromSql for SqlIncome {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let income = match value {
            ValueRef::Integer(i) => Decimal::from(i),
            ValueRef::Real(f) => Decimal::try_from(f).map_err(|e| FromSqlError::Other(Box::new(e)))?,
            ValueRef::Text(text) => {
                let text = std::str::from_utf8(text).map_err(|e| FromSqlError::Other(Box::new(e)))?;
                Decimal::from_str(text.trim()).map_err(|e| FromSqlError::Other(Box::new(e)))?
            }
            _ => return Err(FromSqlError::InvalidType),
        };
        Ok(SqlIncome(income))
    }
}

impl RecordStore for SqliteStore {
    fn load_all(&self) -> DashboardResult<Vec<EmployeeRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(SELECT_ALL).map_err(store_error)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(EmployeeRecord {
                    employee_number: row.get(0)?,
                    age: row.get(1)?,
                    department: row.get(2)?,
                    job_role: row.get(3)?,
                    monthly_income: row.get::<_, SqlIncome>(4)?.0,
                    performance_rating: row.get(5)?,
                    attrition: row.get(6)?,
                })
            })
            .map_err(store_error)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(store_error)
    }

    fn insert(&self, record: EmployeeRecord) -> DashboardResult<()> {
        let conn = self.conn()?;
        let inserted = conn
            .execute(
                INSERT_IF_ABSENT,
                params![
                    record.employee_number,
                    record.age,
                    record.department,
                    record.job_role,
                    record.monthly_income.to_string(),
                    record.performance_rating,
                    record.attrition,
                ],
            )
            .map_err(|e| {
                if is_key_violation(&e) {
                    DashboardError::DuplicateKey {
                        employee_number: record.employee_number,
                    }
                } else {
                    store_error(e)
                }
            })?;

        if inserted == 0 {
            return Err(DashboardError::DuplicateKey {
                employee_number: record.employee_number,
            });
        }
        debug!(employee_number = record.employee_number, "Inserted record");
        Ok(())
    }

    fn update_income(&self, employee_number: i64, new_income: Decimal) -> DashboardResult<usize> {
        let conn = self.conn()?;
        let rows_affected = conn
            .execute(UPDATE_INCOME, params![new_income.to_string(), employee_number])
            .map_err(store_error)?;
        debug!(employee_number, rows_affected, "Updated income");
        Ok(rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(employee_number: i64, age: u32, income: Decimal) -> EmployeeRecord {
        EmployeeRecord {
            employee_number,
            age,
            department: "Research & Development".to_string(),
            job_role: "Laboratory Technician".to_string(),
            monthly_income: income,
            performance_rating: 3,
            attrition: "No".to_string(),
        }
    }

    #[test]
    fn test_insert_then_load() {
        let store = SqliteStore::open_in_memory().unwrap();
        let original = record(1, 29, Decimal::new(3200, 0));
        store.insert(original.clone()).unwrap();

        assert_eq!(store.load_all().unwrap(), vec![original]);
    }

    #[test]
    fn test_fractional_income_survives() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert(record(1, 29, Decimal::new(32005, 1))).unwrap(); // 3200.5

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded[0].monthly_income, Decimal::new(32005, 1));
    }

    #[test]
    fn test_duplicate_insert_is_rejected_without_write() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert(record(7, 29, Decimal::new(3200, 0))).unwrap();

        let result = store.insert(record(7, 50, Decimal::new(9000, 0)));
        assert!(matches!(
            result,
            Err(DashboardError::DuplicateKey { employee_number: 7 })
        ));

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].age, 29);
    }

    #[test]
    fn test_duplicate_rejected_on_table_without_primary_key() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute(
            "CREATE TABLE employees (EmployeeNumber INTEGER, Age INTEGER, Department TEXT, \
             JobRole TEXT, MonthlyIncome INTEGER, PerformanceRating INTEGER, Attrition TEXT)",
            [],
        )
        .unwrap();
        let store = SqliteStore::with_connection(conn).unwrap();

        store.insert(record(1, 30, Decimal::new(4000, 0))).unwrap();
        assert!(matches!(
            store.insert(record(1, 31, Decimal::new(4100, 0))),
            Err(DashboardError::DuplicateKey { employee_number: 1 })
        ));
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_update_income_reports_rows_affected() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert(record(1, 30, Decimal::new(4000, 0))).unwrap();

        assert_eq!(store.update_income(1, Decimal::new(4500, 0)).unwrap(), 1);
        assert_eq!(store.load_all().unwrap()[0].monthly_income, Decimal::new(4500, 0));
    }

    #[test]
    fn test_update_missing_key_is_noop() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert(record(1, 30, Decimal::new(4000, 0))).unwrap();

        assert_eq!(store.update_income(2, Decimal::new(4500, 0)).unwrap(), 0);
        assert_eq!(store.load_all().unwrap()[0].monthly_income, Decimal::new(4000, 0));
    }

    #[test]
    fn test_reads_income_stored_as_real_or_text() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute(
            "CREATE TABLE employees (EmployeeNumber INTEGER, Age INTEGER, Department TEXT, \
             JobRole TEXT, MonthlyIncome, PerformanceRating INTEGER, Attrition TEXT)",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO employees VALUES (1, 40, 'Sales', 'Manager', 5000.5, 4, 'No')",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO employees VALUES (2, 41, 'Sales', 'Manager', '6000', 2, 'Yes')",
            [],
        )
        .unwrap();
        let store = SqliteStore::with_connection(conn).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded[0].monthly_income, Decimal::new(50005, 1));
        assert_eq!(loaded[1].monthly_income, Decimal::new(6000, 0));
    }

    #[test]
    fn test_open_file_database_persists() {
        let dir = std::env::temp_dir().join(format!("hr-dashboard-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("employees.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.insert(record(5, 33, Decimal::new(3000, 0))).unwrap();
        }
        let reopened = SqliteStore::open(&path).unwrap();
        assert_eq!(reopened.load_all().unwrap().len(), 1);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
