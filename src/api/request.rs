//! Request types for the dashboard API.
//!
//! This module defines the query string and JSON body structures accepted by
//! the report and mutation endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EmployeeRecord, FilterCriteria, FilterOptions};

/// Query string of the `/report` endpoint.
///
/// Every parameter is optional. Missing department and job role mean "all";
/// missing age bounds fall back to the youngest and oldest ages on record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Department to keep, or the "All Departments" sentinel.
    #[serde(default)]
    pub department: Option<String>,
    /// Job role to keep, or the "All Job Roles" sentinel.
    #[serde(default)]
    pub job_role: Option<String>,
    /// Lowest age kept (inclusive).
    #[serde(default)]
    pub age_min: Option<u32>,
    /// Highest age kept (inclusive).
    #[serde(default)]
    pub age_max: Option<u32>,
}

impl ReportQuery {
    /// Resolves the query against the options derived from the current
    /// record snapshot.
    pub fn into_criteria(self, options: &FilterOptions) -> FilterCriteria {
        let defaults = options.default_criteria();
        FilterCriteria {
            department: self.department.unwrap_or(defaults.department),
            job_role: self.job_role.unwrap_or(defaults.job_role),
            age_min: self.age_min.unwrap_or(defaults.age_min),
            age_max: self.age_max.unwrap_or(defaults.age_max),
        }
    }
}

/// Body of `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployeeRequest {
    /// Unique identifier for the employee.
    pub employee_number: i64,
    /// Age in whole years.
    pub age: u32,
    /// Department name.
    pub department: String,
    /// Job role name.
    pub job_role: String,
    /// Monthly income.
    pub monthly_income: Decimal,
    /// Performance rating from 1 to 4.
    pub performance_rating: u8,
    /// "Yes" or "No".
    pub attrition: String,
}

/// Body of `PUT /employees/:employee_number/income`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateIncomeRequest {
    /// The new monthly income.
    pub monthly_income: Decimal,
}

impl From<NewEmployeeRequest> for EmployeeRecord {
    fn from(req: NewEmployeeRequest) -> Self {
        EmployeeRecord {
            employee_number: req.employee_number,
            age: req.age,
            department: req.department,
            job_role: req.job_role,
            monthly_income: req.monthly_income,
            performance_rating: req.performance_rating,
            attrition: req.attrition,
        }
    }
}
