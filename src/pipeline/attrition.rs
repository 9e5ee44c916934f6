//! Attrition counts.

use crate::models::{AttritionCounts, EmployeeRecord};

/// Counts records per attrition value.
///
/// Only values that occur appear in the result; neither "Yes" nor "No" is
/// zero-filled. The counts always sum to `records.len()`.
///
/// # Examples
///
/// ```
/// use hr_dashboard::models::EmployeeRecord;
/// use hr_dashboard::pipeline::count_attrition;
/// use rust_decimal::Decimal;
///
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
/// let counts = count_attrition(&[record]);
/// assert_eq!(counts.get("No"), Some(&1));
/// assert_eq!(counts.get("Yes"), None);
/// ```
pub fn count_attrition(records: &[EmployeeRecord]) -> AttritionCounts {
    let mut counts = AttritionCounts::new();
    for record in records {
        *counts.entry(record.attrition.clone()).or_insert(0) += 1;
    }
    counts
}
