//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by
//! the application. The state is initialized once during startup and then cloned for
//! each request handler through Axum's state extraction.

use chrono::Duration;
use sea_orm::DatabaseConnection;
use url::Url;

/// Connection details for the external truck routing API.
#[derive(Clone, Debug)]
pub struct RoutingSettings {
    pub api_url: Url,
    /// Routing is disabled when no key is configured.
    pub api_key: Option<String>,
}

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for the routing API.
    pub http_client: reqwest::Client,

    pub routing: RoutingSettings,

    /// Default look-back window of the active assets statistic.
    pub active_asset_window: Duration,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        routing: RoutingSettings,
        active_asset_window: Duration,
    ) -> Self {
        Self {
            db,
            http_client,
            routing,
            active_asset_window,
        }
    }
}
