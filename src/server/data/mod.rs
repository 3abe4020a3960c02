//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the entity crate out of the business logic layer. Repositories
//! taking part in ingestion or trip creation are generic over `ConnectionTrait` so they
//! can run on a transaction as well as on the pool.

pub mod asset;
pub mod deployment;
pub mod location;
pub mod tracking_device;
pub mod tracking_point;
pub mod trip;
pub mod user;

#[cfg(test)]
mod test;
