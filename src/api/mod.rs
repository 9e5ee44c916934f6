//! HTTP API module for the dashboard.
//!
//! This module provides the REST endpoints a dashboard client uses: filter
//! options, filtered reports, employee insertion and income updates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{NewEmployeeRequest, ReportQuery, UpdateIncomeRequest};
pub use response::{ApiError, ApiErrorResponse, HealthResponse, UpdateIncomeResponse};
pub use state::AppState;
