//! Domain models and operation-specific parameter types.
//!
//! Domain models are produced at the repository boundary from SeaORM entities and
//! converted to DTOs at the controller boundary. Parameter types carry validated input
//! from controllers into services.

pub mod asset;
pub mod dispatching;
pub mod location;
pub mod tracking_device;
pub mod tracking_point;
pub mod trip;
pub mod user;
