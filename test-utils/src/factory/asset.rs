//! Asset factory for creating test asset entities.

use crate::{factory::helpers::next_id, fixture};
use entity::asset::AssetType;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, IntoActiveModel};

/// Factory for creating test assets with customizable fields.
///
/// Defaults come from `fixture::asset::entity()` with a unique id and name.
///
/// # Example
///
/// ```rust,ignore
/// let truck = AssetFactory::new(&db).truck().name("Hauler").build().await?;
/// ```
pub struct AssetFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::asset::Model,
}

impl<'a> AssetFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = entity::asset::Model {
            id: format!("asset-{}", id),
            name: format!("Asset {}", id),
            ..fixture::asset::entity()
        };

        Self { db, entity }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.entity.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Switches to a truck with the fixture's routing properties.
    pub fn truck(mut self) -> Self {
        let truck = fixture::asset::truck_entity();
        self.entity = entity::asset::Model {
            id: self.entity.id,
            name: self.entity.name,
            asset_type: AssetType::Truck,
            ..truck
        };
        self
    }

    pub fn latest_position_id(mut self, latest_position_id: Option<i32>) -> Self {
        self.entity.latest_position_id = latest_position_id;
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.entity.deleted = deleted;
        self
    }

    /// Builds and inserts the asset entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::asset::Model)` - Created asset entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::asset::Model, DbErr> {
        self.entity.into_active_model().reset_all().insert(self.db).await
    }
}

/// Creates a car asset with default values.
///
/// Shorthand for `AssetFactory::new(db).build().await`.
pub async fn create_asset(db: &DatabaseConnection) -> Result<entity::asset::Model, DbErr> {
    AssetFactory::new(db).build().await
}
