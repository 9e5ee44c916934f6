//! Average monthly income per job role.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{EmployeeRecord, IncomeByRole};

/// Computes the arithmetic mean of `monthly_income` for each job role present.
///
/// Roles that do not appear in `records` get no entry, and an empty input
/// gives an empty map. The mean is exact decimal division; rounding for
/// display is left to the client.
///
/// # Examples
///
/// ```
/// use hr_dashboard::models::EmployeeRecord;
/// use hr_dashboard::pipeline::average_income_by_role;
/// use rust_decimal::Decimal;
///
/// let make = |n: i64, income: i64| EmployeeRecord {
///     employee_number: n,
///     age: 30,
///     department: "Sales".to_string(),
///     job_role: "Sales Representative".to_string(),
///     monthly_income: Decimal::new(income, 0),
///     performance_rating: 3,
///     attrition: "No".to_string(),
/// };
///
/// let view = average_income_by_role(&[make(1, 4000), make(2, 6000)]);
/// assert_eq!(view["Sales Representative"], Decimal::new(5000, 0));
/// ```
pub fn average_income_by_role(records: &[EmployeeRecord]) -> IncomeByRole {
    let mut totals: BTreeMap<&str, (Decimal, u32)> = BTreeMap::new();

    for record in records {
        let entry = totals.entry(record.job_role.as_str()).or_insert((Decimal::ZERO, 0));
        entry.0 += record.monthly_income;
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(role, (sum, count))| (role.to_string(), sum / Decimal::from(count)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(employee_number: i64, job_role: &str, income: &str) -> EmployeeRecord {
        EmployeeRecord {
            employee_number,
            age: 35,
            department: "Sales".to_string(),
            job_role: job_role.to_string(),
            monthly_income: dec(income),
            performance_rating: 3,
            attrition: "No".to_string(),
        }
    }

    #[test]
    fn test_empty_input_gives_empty_map() {
        assert!(average_income_by_role(&[]).is_empty());
    }

    #[test]
    fn test_single_record_mean_is_its_income() {
        let view = average_income_by_role(&[record(1, "Manager", "17500")]);
        assert_eq!(view.len(), 1);
        assert_eq!(view["Manager"], dec("17500"));
    }

    #[test]
    fn test_mean_per_role() {
        let records = vec![
            record(1, "Sales Executive", "6000"),
            record(2, "Manager", "18000"),
            record(3, "Sales Executive", "7000"),
            record(4, "Manager", "16000"),
            record(5, "Sales Executive", "8000"),
        ];

        let view = average_income_by_role(&records);
        assert_eq!(view.len(), 2);
        assert_eq!(view["Sales Executive"], dec("7000"));
        assert_eq!(view["Manager"], dec("17000"));
    }

    #[test]
    fn test_mean_keeps_fractional_part() {
        let records = vec![
            record(1, "Laboratory Technician", "2500"),
            record(2, "Laboratory Technician", "2501"),
        ];
        let view = average_income_by_role(&records);
        assert_eq!(view["Laboratory Technician"], dec("2500.5"));
    }

    #[test]
    fn test_roles_are_sorted() {
        let records = vec![
            record(1, "Sales Representative", "3000"),
            record(2, "Healthcare Representative", "7000"),
            record(3, "Manager", "15000"),
        ];
        let roles: Vec<_> = average_income_by_role(&records).into_keys().collect();
        assert_eq!(
            roles,
            vec!["Healthcare Representative", "Manager", "Sales Representative"]
        );
    }

    #[test]
    fn test_absent_role_has_no_entry() {
        let view = average_income_by_role(&[record(1, "Manager", "15000")]);
        assert!(!view.contains_key("Research Director"));
    }
}
