//! Report models produced by the reporting pipeline.
//!
//! These structures are recomputed on every request and have no identity of
//! their own; [`ReportEnvelope`] adds the id and timestamp a client sees.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EmployeeRecord, FilterCriteria};

/// Average monthly income keyed by job role, roles in ascending order.
pub type IncomeByRole = BTreeMap<String, Decimal>;

/// Record count keyed by attrition value, values in ascending order.
pub type AttritionCounts = BTreeMap<String, usize>;

/// Number of employees of one exact age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeCount {
    /// The age in years.
    pub age: u32,
    /// How many filtered records have this age.
    pub count: usize,
}

/// The filtered records and the three views derived from them.
///
/// Every view is computed from `filtered`, never from the unfiltered set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Report {
    /// Records passing the criteria, in store order.
    pub filtered: Vec<EmployeeRecord>,
    /// Mean monthly income per job role present in `filtered`.
    pub income_by_role: IncomeByRole,
    /// Count per attrition value present in `filtered`.
    pub attrition: AttritionCounts,
    /// Count per age, ascending by age.
    pub age_distribution: Vec<AgeCount>,
}

impl Report {
    /// Number of records that passed the filter.
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// True when no record passed the filter.
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

/// A report as served to a client, stamped with an id and time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEnvelope {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was computed.
    pub generated_at: DateTime<Utc>,
    /// The criteria the report was computed with.
    pub criteria: FilterCriteria,
    /// The report itself.
    #[serde(flatten)]
    pub report: Report,
}

impl ReportEnvelope {
    /// Stamps a freshly computed report.
    pub fn new(criteria: FilterCriteria, report: Report) -> Self {
        Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            criteria,
            report,
        }
    }
}
