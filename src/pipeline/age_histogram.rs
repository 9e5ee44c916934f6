//! Age distribution.

use std::collections::BTreeMap;

use crate::models::{AgeCount, EmployeeRecord};

/// Counts records per exact age, ascending by age.
///
/// The ordering is by age, never by count: clients plot the result left to
/// right. Each age appears at most once.
///
/// # Examples
///
/// ```
/// use hr_dashboard::models::{AgeCount, EmployeeRecord};
/// use hr_dashboard::pipeline::age_histogram;
/// use rust_decimal::Decimal;
///
/// let make = |n: i64, age: u32| EmployeeRecord {
///     employee_number: n,
///     age,
///     department: "Sales".to_string(),
///     job_role: "Manager".to_string(),
///     monthly_income: Decimal::new(12000, 0),
///     performance_rating: 3,
///     attrition: "No".to_string(),
/// };
///
/// let histogram = age_histogram(&[make(1, 40), make(2, 30), make(3, 40)]);
/// assert_eq!(
///     histogram,
///     vec![AgeCount { age: 30, count: 1 }, AgeCount { age: 40, count: 2 }]
/// );
/// ```
pub fn age_histogram(records: &[EmployeeRecord]) -> Vec<AgeCount> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.age).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(age, count)| AgeCount { age, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn record(employee_number: i64, age: u32) -> EmployeeRecord {
        EmployeeRecord {
            employee_number,
            age,
            department: "Sales".to_string(),
            job_role: "Manager".to_string(),
            monthly_income: Decimal::new(5000, 0),
            performance_rating: 3,
            attrition: "No".to_string(),
        }
    }

    #[test]
    fn test_empty_input_gives_empty_histogram() {
        assert!(age_histogram(&[]).is_empty());
    }

    #[test]
    fn test_sorted_by_age_not_by_count() {
        // 50 is the most frequent age but must still come last
        let records = vec![record(1, 50), record(2, 50), record(3, 50), record(4, 21), record(5, 33)];
        let ages: Vec<u32> = age_histogram(&records).iter().map(|b| b.age).collect();
        assert_eq!(ages, vec![21, 33, 50]);
    }

    #[test]
    fn test_no_duplicate_ages() {
        let records = vec![record(1, 30), record(2, 30), record(3, 30)];
        assert_eq!(age_histogram(&records), vec![AgeCount { age: 30, count: 3 }]);
    }

    #[test]
    fn test_counts_sum_to_input_length() {
        let records = vec![record(1, 18), record(2, 65), record(3, 40), record(4, 40)];
        let total: usize = age_histogram(&records).iter().map(|b| b.count).sum();
        assert_eq!(total, records.len());
    }
}
