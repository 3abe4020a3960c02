//! Wire-format DTOs shared by the HTTP API and the native client.

pub mod api;
pub mod asset;
pub mod dispatching;
pub mod location;
pub mod settings;
pub mod statistics;
pub mod tracking_device;
pub mod tracking_point;
pub mod trip;
pub mod user;
