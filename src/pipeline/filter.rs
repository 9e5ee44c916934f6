//! Record filtering.
//!
//! This module narrows a record snapshot down to the rows matching a
//! [`FilterCriteria`]: department, job role and inclusive age range, all
//! combined with AND.

use crate::models::{EmployeeRecord, FilterCriteria};

/// Returns true if a single record passes every predicate of `criteria`.
///
/// # Examples
///
/// ```
/// use hr_dashboard::models::{EmployeeRecord, FilterCriteria};
/// use hr_dashboard::pipeline::matches_criteria;
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
/// assert!(matches_criteria(&record, &FilterCriteria::default()));
/// assert!(!matches_criteria(&record, &FilterCriteria::default().with_department("Human Resources")));
/// ```
pub fn matches_criteria(record: &EmployeeRecord, criteria: &FilterCriteria) -> bool {
    (criteria.all_departments() || record.department == criteria.department)
        && (criteria.all_job_roles() || record.job_role == criteria.job_role)
        && criteria.age_min <= record.age
        && record.age <= criteria.age_max
}

/// Returns the records that pass `criteria`, in their original order.
///
/// The input is never modified. When nothing matches, including when the age
/// range is inverted, the result is empty.
///
/// # Examples
///
/// ```
/// use hr_dashboard::models::{EmployeeRecord, FilterCriteria};
/// use hr_dashboard::pipeline::filter_records;
/// use rust_decimal::Decimal;
///
/// let records = vec![EmployeeRecord {
///     employee_number: 1,
///     age: 40,
///     department: "Sales".to_string(),
///     job_role: "Manager".to_string(),
///     monthly_income: Decimal::new(12000, 0),
///     performance_rating: 3,
///     attrition: "No".to_string(),
/// }];
///
/// let inverted = FilterCriteria::default().with_age_range(50, 40);
/// assert!(filter_records(&records, &inverted).is_empty());
/// ```
pub fn filter_records(records: &[EmployeeRecord], criteria: &FilterCriteria) -> Vec<EmployeeRecord> {
    records
        .iter()
        .filter(|record| matches_criteria(record, criteria))
        .cloned()
        .collect()
}
