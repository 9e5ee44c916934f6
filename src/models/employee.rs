//! Employee record model and its domain constraints.
//!
//! Records coming back from a store are trusted as-is; the constraints here
//! are enforced only at the mutation boundary, before a write reaches the
//! store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// Youngest age accepted for a new employee.
pub const MIN_AGE: u32 = 18;

/// Oldest age accepted for a new employee.
pub const MAX_AGE: u32 = 65;

/// Lowest monthly income accepted on insert or update.
pub const MIN_MONTHLY_INCOME: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Highest monthly income accepted on insert or update.
pub const MAX_MONTHLY_INCOME: Decimal = Decimal::from_parts(50000, 0, 0, false, 0);

/// Allowed performance ratings.
pub const PERFORMANCE_RATINGS: [u8; 4] = [1, 2, 3, 4];

/// Allowed attrition values.
pub const ATTRITION_VALUES: [&str; 2] = ["Yes", "No"];

/// One row of the employee table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier for the employee.
    pub employee_number: i64,
    /// Age in whole years.
    pub age: u32,
    /// Department name (open vocabulary).
    pub department: String,
    /// Job role name (open vocabulary).
    pub job_role: String,
    /// Monthly income.
    pub monthly_income: Decimal,
    /// Performance rating from 1 to 4.
    pub performance_rating: u8,
    /// Whether the employee left: "Yes" or "No".
    pub attrition: String,
}

impl EmployeeRecord {
    /// Checks every field against the constraints a new record must satisfy.
    ///
    /// Returns the first violation found as [`DashboardError::InvalidEmployee`].
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_dashboard::models::EmployeeRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let record = EmployeeRecord {
    ///     employee_number: 1,
    ///     age: 30,
    ///     department: "Sales".to_string(),
    ///     job_role: "Sales Executive".to_string(),
    ///     monthly_income: Decimal::new(5000, 0),
    ///     performance_rating: 3,
    ///     attrition: "No".to_string(),
    /// };
    /// assert!(record.validate().is_ok());
    ///
    /// let too_young = EmployeeRecord { age: 16, ..record };
    /// assert!(too_young.validate().is_err());
    /// ```
    pub fn validate(&self) -> DashboardResult<()> {
        if self.employee_number < 1 {
            return Err(DashboardError::invalid(
                "employee_number",
                format!("must be at least 1, got {}", self.employee_number),
            ));
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(DashboardError::invalid(
                "age",
                format!("must be between {} and {}, got {}", MIN_AGE, MAX_AGE, self.age),
            ));
        }
        if self.department.trim().is_empty() {
            return Err(DashboardError::invalid("department", "must not be empty"));
        }
        if self.job_role.trim().is_empty() {
            return Err(DashboardError::invalid("job_role", "must not be empty"));
        }
        validate_monthly_income(self.monthly_income)?;
        if !PERFORMANCE_RATINGS.contains(&self.performance_rating) {
            return Err(DashboardError::invalid(
                "performance_rating",
                format!("must be one of 1, 2, 3, 4, got {}", self.performance_rating),
            ));
        }
        if !ATTRITION_VALUES.contains(&self.attrition.as_str()) {
            return Err(DashboardError::invalid(
                "attrition",
                format!("must be \"Yes\" or \"No\", got \"{}\"", self.attrition),
            ));
        }
        Ok(())
    }
}

/// Checks a monthly income against the accepted range.
///
/// # Examples
///
/// ```
/// use hr_dashboard::models::validate_monthly_income;
/// use rust_decimal::Decimal;
///
/// assert!(validate_monthly_income(Decimal::new(1000, 0)).is_ok());
/// assert!(validate_monthly_income(Decimal::new(999, 0)).is_err());
/// ```
pub fn validate_monthly_income(income: Decimal) -> DashboardResult<()> {
    if income < MIN_MONTHLY_INCOME || income > MAX_MONTHLY_INCOME {
        return Err(DashboardError::invalid(
            "monthly_income",
            format!(
                "must be between {} and {}, got {}",
                MIN_MONTHLY_INCOME, MAX_MONTHLY_INCOME, income
            ),
        ));
    }
    Ok(())
}
