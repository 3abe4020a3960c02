//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has its own module with a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let asset = factory::create_asset(&db).await?;
//! let device = factory::tracking_device::TrackingDeviceFactory::new(&db)
//!     .asset_id(&asset.id)
//!     .build()
//!     .await?;
//! let point = factory::create_point(&db, &device.id, &asset.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `asset` - Create asset entities
//! - `tracking_device` - Create tracking device entities
//! - `tracking_point` - Create tracking point entities (bypasses latest-position logic)
//! - `location` - Create location entities
//! - `trip` - Create trip entities
//! - `user` - Create role and user entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod asset;
pub mod helpers;
pub mod location;
pub mod tracking_device;
pub mod tracking_point;
pub mod trip;
pub mod user;

pub use asset::create_asset;
pub use location::create_location;
pub use tracking_device::create_device;
pub use tracking_point::create_point;
pub use trip::create_trip;
pub use user::{create_role, create_user};
