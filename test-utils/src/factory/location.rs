//! Location factory for creating test location entities.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, IntoActiveModel};

pub struct LocationFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::location::Model,
}

impl<'a> LocationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = entity::location::Model {
            id: format!("location-{}", id),
            name: format!("Location {}", id),
            ..fixture::location::entity()
        };

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.entity.deleted = deleted;
        self
    }

    pub async fn build(self) -> Result<entity::location::Model, DbErr> {
        self.entity.into_active_model().reset_all().insert(self.db).await
    }
}

/// Creates a location with default values.
pub async fn create_location(db: &DatabaseConnection) -> Result<entity::location::Model, DbErr> {
    LocationFactory::new(db).build().await
}
