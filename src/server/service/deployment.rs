use sea_orm::DatabaseConnection;

use crate::server::{data::deployment::DeploymentIdRepository, error::AppError};

pub struct DeploymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeploymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the deployment id, creating it on first start.
    pub async fn get_or_create(&self) -> Result<String, AppError> {
        let repo = DeploymentIdRepository::new(self.db);

        if let Some(id) = repo.get().await? {
            return Ok(id);
        }

        let id = repo.create(uuid::Uuid::new_v4().to_string()).await?;
        tracing::info!("Created deployment id {}", id);

        Ok(id)
    }
}
