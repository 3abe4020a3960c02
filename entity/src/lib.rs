//! SeaORM entities for the fleet tracker schema.

pub mod prelude;

pub mod asset;
pub mod deployment_id;
pub mod location;
pub mod role;
pub mod token;
pub mod tracking_device;
pub mod tracking_point;
pub mod trip;
pub mod trip_leg;
pub mod user;
