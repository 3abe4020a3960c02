use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct DeploymentIdRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeploymentIdRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the oldest stored deployment id, if any.
    pub async fn get(&self) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::DeploymentId::find()
            .order_by_asc(entity::deployment_id::Column::CreatedAt)
            .one(self.db)
            .await?;

        Ok(entity.map(|e| e.id))
    }

    pub async fn create(&self, id: String) -> Result<String, DbErr> {
        let entity = entity::deployment_id::ActiveModel {
            id: ActiveValue::Set(id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(entity.id)
    }
}
