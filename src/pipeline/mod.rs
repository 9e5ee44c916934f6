//! The filter-and-aggregate reporting pipeline.
//!
//! This module contains the pure functions that turn a record snapshot and a
//! set of filter criteria into a report: record filtering, average income by
//! job role, attrition counts, the age distribution, and the orchestrating
//! [`build_report`]. None of them touch the store or fail.

mod age_histogram;
mod attrition;
mod filter;
mod income_by_role;
mod report;

pub use age_histogram::age_histogram;
pub use attrition::count_attrition;
pub use filter::{filter_records, matches_criteria};
pub use income_by_role::average_income_by_role;
pub use report::build_report;
