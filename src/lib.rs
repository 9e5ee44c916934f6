//! HR Analytics Dashboard
//!
//! This crate serves filterable analytics over an employee records table:
//! a filtered record list, average income by job role, attrition counts and
//! an age distribution, plus employee insertion and income updates.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod store;
