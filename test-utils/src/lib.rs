//! Fleet Tracker Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the fleet
//! tracker. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting entities with sensible defaults
//! - **fixture**: In-memory entity models that are never inserted
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_asset_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_tracking_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (asset, device) = factory::helpers::create_linked_device(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
