//! HTTP request handlers.
//!
//! Controllers convert DTOs into domain parameters, call a service and convert the
//! result back. Each handler carries a `utoipa::path` annotation that the router uses
//! to register the route and build the OpenAPI document.

pub mod asset;
pub mod dispatching;
pub mod location;
pub mod settings;
pub mod statistics;
pub mod tracking_device;
pub mod tracking_point;
pub mod trip;
pub mod user;
