//! Native client for the fleet tracker API.
//!
//! `DataService` wraps the REST API with one in-memory `Cache` per path, so readers keep
//! the last good list when the server cannot be reached.

pub mod cache;
pub mod data_service;
pub mod error;

pub use cache::Cache;
pub use data_service::DataService;
pub use error::ClientError;
