//! User, role and token services.
//!
//! Users and tokens are stored for data mapping only. Nothing in the API authenticates
//! with them.

use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::{RoleRepository, TokenRepository, UserRepository},
    error::AppError,
    model::user::{CreateUserParams, Role, Token, User, DEFAULT_ROLES},
};

/// Length of generated token values.
pub const TOKEN_LENGTH: usize = 32;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user with an optional role given by name.
    ///
    /// # Arguments
    /// - `email` - Unique email; rows of deleted users still reserve it
    /// - `name` - Optional display name
    /// - `role` - Optional name of an existing role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Blank or duplicate email, or unknown role
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        email: String,
        name: Option<String>,
        role: Option<String>,
    ) -> Result<User, AppError> {
        let email = email.trim().to_string();
        if email.is_empty() {
            return Err(AppError::BadRequest("Email is required".to_string()));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.email_taken(&email).await? {
            return Err(AppError::BadRequest(format!(
                "A user with email {} already exists",
                email
            )));
        }

        let role_id = match role {
            Some(role_name) => {
                let role = RoleRepository::new(self.db)
                    .get_by_name(&role_name)
                    .await?
                    .ok_or_else(|| {
                        AppError::BadRequest(format!("Role {} does not exist", role_name))
                    })?;
                Some(role.id)
            }
            None => None,
        };

        let user = user_repo
            .create(
                uuid::Uuid::new_v4().to_string(),
                CreateUserParams {
                    email,
                    name,
                    role_id,
                },
            )
            .await?;

        tracing::info!("Created user {}", user.id);

        Ok(user)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).get_by_email(email).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Soft deletes a user. Returns `false` if no live user has the id.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(UserRepository::new(self.db).soft_delete(id).await?)
    }
}

pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts any missing default role. Safe to run on every startup.
    pub async fn seed_default_roles(&self) -> Result<(), AppError> {
        let role_repo = RoleRepository::new(self.db);

        for name in DEFAULT_ROLES {
            let (role, created) = role_repo.get_or_create(name).await?;
            if created {
                tracing::info!("Seeded role {} with id {}", role.name, role.id);
            }
        }

        Ok(())
    }

    pub async fn get_all(&self) -> Result<Vec<Role>, AppError> {
        Ok(RoleRepository::new(self.db).get_all().await?)
    }
}

pub struct TokenService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TokenService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues a new random token for a live user.
    ///
    /// # Returns
    /// - `Ok(Some(Token))` - The issued token
    /// - `Ok(None)` - No live user with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn issue(&self, user_id: &str) -> Result<Option<Token>, AppError> {
        if UserRepository::new(self.db).get_by_id(user_id).await?.is_none() {
            return Ok(None);
        }

        let token = TokenRepository::new(self.db)
            .create(uuid::Uuid::new_v4().to_string(), user_id, generate_token())
            .await?;

        tracing::debug!("Issued token {} for user {}", token.id, user_id);

        Ok(Some(token))
    }

    /// Active tokens of a user, or `None` if the user does not exist.
    pub async fn get_active(&self, user_id: &str) -> Result<Option<Vec<Token>>, AppError> {
        if UserRepository::new(self.db).get_by_id(user_id).await?.is_none() {
            return Ok(None);
        }

        Ok(Some(
            TokenRepository::new(self.db)
                .get_active_by_user_id(user_id)
                .await?,
        ))
    }

    pub async fn deactivate(&self, id: &str) -> Result<bool, AppError> {
        Ok(TokenRepository::new(self.db).deactivate(id).await?)
    }
}

/// Generates a random alphanumeric token value.
fn generate_token() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
