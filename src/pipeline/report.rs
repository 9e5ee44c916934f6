//! Report assembly.
//!
//! Filtering always runs first; the three views are then computed from the
//! same filtered sequence so that the table and every chart agree.

use tracing::debug;

use crate::models::{EmployeeRecord, FilterCriteria, Report};

use super::{age_histogram, average_income_by_role, count_attrition, filter_records};

/// Builds a full report from a record snapshot and criteria.
///
/// Nothing is cached between calls; each invocation recomputes every view
/// from `records`.
///
/// # Examples
///
/// ```
/// use hr_dashboard::models::{EmployeeRecord, FilterCriteria};
/// use hr_dashboard::pipeline::build_report;
/// use rust_decimal::Decimal;
///
/// let records = vec![EmployeeRecord {
///     employee_number: 2,
///     age: 40,
///     department: "Sales".to_string(),
///     job_role: "Rep".to_string(),
///     monthly_income: Decimal::new(6000, 0),
///     performance_rating: 3,
///     attrition: "No".to_string(),
/// }];
///
/// let report = build_report(&records, &FilterCriteria::default().with_age_range(35, 65));
/// assert_eq!(report.filtered_count(), 1);
/// assert_eq!(report.income_by_role["Rep"], Decimal::new(6000, 0));
/// assert_eq!(report.attrition["No"], 1);
/// ```
pub fn build_report(records: &[EmployeeRecord], criteria: &FilterCriteria) -> Report {
    let filtered = filter_records(records, criteria);

    let income_by_role = average_income_by_role(&filtered);
    let attrition = count_attrition(&filtered);
    let age_distribution = age_histogram(&filtered);

    debug!(
        total = records.len(),
        filtered = filtered.len(),
        roles = income_by_role.len(),
        ages = age_distribution.len(),
        "Report built"
    );

    Report {
        filtered,
        income_by_role,
        attrition,
        age_distribution,
    }
}
