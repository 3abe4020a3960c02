//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions create in-memory entity models for unit tests and serve as the
//! default values for factories. Unlike factories, fixtures do NOT insert data into
//! the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let truck = fixture::asset::truck_entity();
//! let point = fixture::tracking_point::entity();
//! ```

pub mod asset;
pub mod location;
pub mod tracking_device;
pub mod tracking_point;
