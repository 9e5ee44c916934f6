//! Core data models for the HR analytics dashboard.
//!
//! This module contains the employee record, the filter criteria and the
//! report structures produced by the pipeline.

mod criteria;
mod employee;
mod report;

pub use criteria::{ALL_DEPARTMENTS, ALL_JOB_ROLES, FilterCriteria, FilterOptions};
pub use employee::{
    ATTRITION_VALUES, EmployeeRecord, MAX_AGE, MAX_MONTHLY_INCOME, MIN_AGE, MIN_MONTHLY_INCOME,
    PERFORMANCE_RATINGS, validate_monthly_income,
};
pub use report::{AgeCount, AttritionCounts, IncomeByRole, Report, ReportEnvelope};
