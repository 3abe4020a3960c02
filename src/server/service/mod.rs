//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Rejecting bad arguments before anything is written
//! - **Orchestration**: Coordinating repositories, transactions and the routing API
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod asset;
pub mod deployment;
pub mod dispatching;
pub mod location;
pub mod statistics;
pub mod tracking_device;
pub mod tracking_point;
pub mod trip;
pub mod user;

#[cfg(test)]
mod test;
