//! HTTP request handlers for the dashboard API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! request reloads the full record snapshot from the store; nothing is
//! cached between requests.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{EmployeeRecord, FilterOptions, ReportEnvelope, validate_monthly_income};
use crate::pipeline::build_report;

use super::request::{NewEmployeeRequest, ReportQuery, UpdateIncomeRequest};
use super::response::{ApiError, ApiErrorResponse, HealthResponse, UpdateIncomeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/filters", get(filters_handler))
        .route("/report", get(report_handler))
        .route("/employees", post(insert_employee_handler))
        .route(
            "/employees/:employee_number/income",
            put(update_income_handler),
        )
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, Json(body)).into_response()
}

/// Maps a JSON body rejection to an API error.
fn json_rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for GET /health.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Handler for GET /filters.
///
/// Returns the selectable departments, job roles and age bounds derived from
/// the current records.
async fn filters_handler(State(state): State<AppState>) -> Response {
    match state.store().load_all() {
        Ok(records) => json_response(StatusCode::OK, FilterOptions::from_records(&records)),
        Err(err) => {
            warn!(error = %err, "Failed to load records for filter options");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /report.
///
/// Filters the current records and returns them with the three derived views.
async fn report_handler(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Invalid report query"
            );
            return ApiErrorResponse::bad_request(ApiError::validation_error(body_text))
                .into_response();
        }
    };

    let records = match state.store().load_all() {
        Ok(records) => records,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Failed to load records"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let criteria = query.into_criteria(&FilterOptions::from_records(&records));

    let start_time = Instant::now();
    let report = build_report(&records, &criteria);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        department = %criteria.department,
        job_role = %criteria.job_role,
        age_min = criteria.age_min,
        age_max = criteria.age_max,
        total_count = records.len(),
        filtered_count = report.filtered_count(),
        duration_us = duration.as_micros(),
        "Report completed successfully"
    );

    json_response(StatusCode::OK, ReportEnvelope::new(criteria, report))
}

/// Handler for POST /employees.
///
/// Validates the submitted record and inserts it. An existing employee number
/// is rejected with 409 and nothing is written.
async fn insert_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing insert request");

    let record: EmployeeRecord = match payload {
        Ok(Json(request)) => request.into(),
        Err(rejection) => {
            return ApiErrorResponse::bad_request(json_rejection_error(rejection, correlation_id))
                .into_response();
        }
    };

    let result = record
        .validate()
        .and_then(|()| state.store().insert(record.clone()));

    match result {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                employee_number = record.employee_number,
                "Employee added successfully"
            );
            json_response(StatusCode::CREATED, record)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_number = record.employee_number,
                error = %err,
                "Insert rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for PUT /employees/:employee_number/income.
///
/// An unknown employee number is not an error; the response reports zero
/// rows affected.
async fn update_income_handler(
    State(state): State<AppState>,
    employee_number: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateIncomeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing income update request");

    let employee_number = match employee_number {
        Ok(Path(employee_number)) => employee_number,
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Invalid employee number in path"
            );
            return ApiErrorResponse::bad_request(ApiError::validation_error(body_text))
                .into_response();
        }
    };

    let new_income = match payload {
        Ok(Json(request)) => request.monthly_income,
        Err(rejection) => {
            return ApiErrorResponse::bad_request(json_rejection_error(rejection, correlation_id))
                .into_response();
        }
    };

    let result = validate_monthly_income(new_income)
        .and_then(|()| state.store().update_income(employee_number, new_income));

    match result {
        Ok(rows_affected) => {
            info!(
                correlation_id = %correlation_id,
                employee_number,
                new_income = %new_income,
                rows_affected,
                "Income update completed"
            );
            json_response(
                StatusCode::OK,
                UpdateIncomeResponse {
                    employee_number,
                    rows_affected,
                },
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_number,
                error = %err,
                "Income update rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
