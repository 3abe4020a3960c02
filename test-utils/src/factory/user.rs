//! Role and user factories.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a role with the given name.
pub async fn create_role(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::role::Model, DbErr> {
    entity::role::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.to_string()),
    }
    .insert(db)
    .await
}

pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    email: String,
    name: Option<String>,
    role_id: Option<i32>,
}

impl<'a> UserFactory<'a> {
    /// Defaults: id `user-{n}`, email `user{n}@example.com`, no role.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("user-{}", id),
            email: format!("user{}@example.com", id),
            name: Some(format!("User {}", id)),
            role_id: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn role_id(mut self, role_id: i32) -> Self {
        self.role_id = Some(role_id);
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            claims_id: ActiveValue::Set(None),
            role_id: ActiveValue::Set(self.role_id),
            deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user without a role.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
