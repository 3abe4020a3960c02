//! Tracking device factory for creating test device entities.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, IntoActiveModel};

/// Factory for creating test tracking devices.
///
/// Defaults come from `fixture::tracking_device::entity()`: unlinked, no latest position.
pub struct TrackingDeviceFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::tracking_device::Model,
}

impl<'a> TrackingDeviceFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = entity::tracking_device::Model {
            id: format!("device-{}", id),
            name: format!("Device {}", id),
            ..fixture::tracking_device::entity()
        };

        Self { db, entity }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.entity.id = id.into();
        self
    }

    /// Links the device to an asset.
    pub fn asset_id(mut self, asset_id: impl Into<String>) -> Self {
        self.entity.asset_id = Some(asset_id.into());
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.entity.deleted = deleted;
        self
    }

    /// Builds and inserts the device entity into the database.
    pub async fn build(self) -> Result<entity::tracking_device::Model, DbErr> {
        self.entity.into_active_model().reset_all().insert(self.db).await
    }
}

/// Creates an unlinked tracking device with default values.
pub async fn create_device(
    db: &DatabaseConnection,
) -> Result<entity::tracking_device::Model, DbErr> {
    TrackingDeviceFactory::new(db).build().await
}
