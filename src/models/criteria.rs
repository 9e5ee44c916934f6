//! Filter criteria and the filter options offered to a client.

use serde::{Deserialize, Serialize};

use super::employee::{EmployeeRecord, MAX_AGE, MIN_AGE};

/// Department value meaning "do not restrict by department".
pub const ALL_DEPARTMENTS: &str = "All Departments";

/// Job role value meaning "do not restrict by job role".
pub const ALL_JOB_ROLES: &str = "All Job Roles";

/// The predicates narrowing the record set for one report.
///
/// Both age bounds are inclusive. An inverted range (`age_min > age_max`)
/// is accepted and simply matches nothing.
///
/// # Example
///
/// ```
/// use hr_dashboard::models::{FilterCriteria, ALL_JOB_ROLES};
///
/// let criteria = FilterCriteria::default().with_department("Sales");
/// assert_eq!(criteria.department, "Sales");
/// assert_eq!(criteria.job_role, ALL_JOB_ROLES);
/// assert_eq!((criteria.age_min, criteria.age_max), (18, 65));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact department to keep, or [`ALL_DEPARTMENTS`].
    pub department: String,
    /// Exact job role to keep, or [`ALL_JOB_ROLES`].
    pub job_role: String,
    /// Lowest age kept (inclusive).
    pub age_min: u32,
    /// Highest age kept (inclusive).
    pub age_max: u32,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            department: ALL_DEPARTMENTS.to_string(),
            job_role: ALL_JOB_ROLES.to_string(),
            age_min: MIN_AGE,
            age_max: MAX_AGE,
        }
    }
}

impl FilterCriteria {
    /// Returns a copy restricted to the given department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Returns a copy restricted to the given job role.
    pub fn with_job_role(mut self, job_role: impl Into<String>) -> Self {
        self.job_role = job_role.into();
        self
    }

    /// Returns a copy with the given inclusive age range.
    pub fn with_age_range(mut self, age_min: u32, age_max: u32) -> Self {
        self.age_min = age_min;
        self.age_max = age_max;
        self
    }

    /// True when every department passes.
    pub fn all_departments(&self) -> bool {
        self.department == ALL_DEPARTMENTS
    }

    /// True when every job role passes.
    pub fn all_job_roles(&self) -> bool {
        self.job_role == ALL_JOB_ROLES
    }
}

/// The selectable filter values derived from the full record set.
///
/// Lists start with their sentinel and then hold each distinct value in the
/// order it first appears. Age bounds are `None` when there are no records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// [`ALL_DEPARTMENTS`] followed by every distinct department.
    pub departments: Vec<String>,
    /// [`ALL_JOB_ROLES`] followed by every distinct job role.
    pub job_roles: Vec<String>,
    /// Youngest age present.
    pub age_min: Option<u32>,
    /// Oldest age present.
    pub age_max: Option<u32>,
}

impl FilterOptions {
    /// Derives the options from a full record snapshot.
    pub fn from_records(records: &[EmployeeRecord]) -> Self {
        let mut departments = vec![ALL_DEPARTMENTS.to_string()];
        let mut job_roles = vec![ALL_JOB_ROLES.to_string()];

        for record in records {
            if !departments[1..].contains(&record.department) {
                departments.push(record.department.clone());
            }
            if !job_roles[1..].contains(&record.job_role) {
                job_roles.push(record.job_role.clone());
            }
        }

        Self {
            departments,
            job_roles,
            age_min: records.iter().map(|r| r.age).min(),
            age_max: records.iter().map(|r| r.age).max(),
        }
    }

    /// Criteria covering the whole observed age range with no department
    /// or role restriction. Falls back to the accepted age range when the
    /// record set is empty.
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria::default()
            .with_age_range(self.age_min.unwrap_or(MIN_AGE), self.age_max.unwrap_or(MAX_AGE))
    }
}
