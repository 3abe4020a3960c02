//! Fleet tracker: GPS point ingestion, trips, locations and truck dispatching over a REST
//! API, plus a cached native client for that API.

pub mod client;
pub mod model;
pub mod server;
