//! User, role and token data repositories.
//!
//! Users are soft-deleted. Roles and tokens are plain rows; tokens are deactivated rather
//! than removed.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParams, Role, Token, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user and returns it with its role.
    ///
    /// # Arguments
    /// - `id` - Generated user id
    /// - `params` - Email, display name and optional role id
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a duplicate email
    pub async fn create(&self, id: String, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(id),
            email: ActiveValue::Set(params.email),
            name: ActiveValue::Set(params.name),
            claims_id: ActiveValue::Set(None),
            role_id: ActiveValue::Set(params.role_id),
            deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        let role = match entity.role_id {
            Some(role_id) => entity::prelude::Role::find_by_id(role_id).one(self.db).await?,
            None => None,
        };

        Ok(User::from_entity(entity, role))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<User>, DbErr> {
        let result = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::Deleted.eq(false))
            .find_also_related(entity::prelude::Role)
            .one(self.db)
            .await?;

        Ok(result.map(|(user, role)| User::from_entity(user, role)))
    }

    /// Finds a live user by email. Comparison is exact.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let result = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .filter(entity::user::Column::Deleted.eq(false))
            .find_also_related(entity::prelude::Role)
            .one(self.db)
            .await?;

        Ok(result.map(|(user, role)| User::from_entity(user, role)))
    }

    /// Checks whether any row, live or deleted, uses the email.
    pub async fn email_taken(&self, email: &str) -> Result<bool, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(user.is_some())
    }

    /// Gets all live users ordered by email.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let results = entity::prelude::User::find()
            .filter(entity::user::Column::Deleted.eq(false))
            .order_by_asc(entity::user::Column::Email)
            .find_also_related(entity::prelude::Role)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(user, role)| User::from_entity(user, role))
            .collect())
    }

    pub async fn soft_delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Deleted,
                sea_orm::sea_query::Expr::value(true),
            )
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::Deleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the role unless one with the same name exists.
    ///
    /// # Returns
    /// - `Ok((Role, true))` - The role was created
    /// - `Ok((Role, false))` - The role already existed
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn get_or_create(&self, name: &str) -> Result<(Role, bool), DbErr> {
        if let Some(existing) = self.get_by_name(name).await? {
            return Ok((existing, false));
        }

        let entity = entity::role::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((Role::from_entity(entity), true))
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Role>, DbErr> {
        let entity = entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Role::from_entity))
    }

    /// Gets all roles in insertion order.
    pub async fn get_all(&self) -> Result<Vec<Role>, DbErr> {
        let entities = entity::prelude::Role::find()
            .order_by_asc(entity::role::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Role::from_entity).collect())
    }
}

pub struct TokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, id: String, user_id: &str, value: String) -> Result<Token, DbErr> {
        let entity = entity::token::ActiveModel {
            id: ActiveValue::Set(id),
            user_id: ActiveValue::Set(user_id.to_string()),
            value: ActiveValue::Set(value),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Token::from_entity(entity))
    }

    /// Gets the active tokens of a user, newest first.
    pub async fn get_active_by_user_id(&self, user_id: &str) -> Result<Vec<Token>, DbErr> {
        let entities = entity::prelude::Token::find()
            .filter(entity::token::Column::UserId.eq(user_id))
            .filter(entity::token::Column::IsActive.eq(true))
            .order_by_desc(entity::token::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Token::from_entity).collect())
    }

    /// Deactivates a token.
    ///
    /// # Returns
    /// - `Ok(true)` - The token was active and is now inactive
    /// - `Ok(false)` - No active token with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn deactivate(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Token::update_many()
            .col_expr(
                entity::token::Column::IsActive,
                sea_orm::sea_query::Expr::value(false),
            )
            .filter(entity::token::Column::Id.eq(id))
            .filter(entity::token::Column::IsActive.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
