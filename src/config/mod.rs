//! Configuration loading for the dashboard service.
//!
//! This module loads the service configuration (listen address and record
//! store selection) and optional record seed files from YAML.
//!
//! # Example
//!
//! ```no_run
//! use hr_dashboard::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/dashboard.yaml").unwrap();
//! println!("Store: {:?}", config.config().store);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DashboardConfig, ServerConfig, StoreConfig};
