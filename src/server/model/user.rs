//! User, role and token domain models.

use chrono::{DateTime, Utc};

use crate::model::user::{RoleDto, TokenDto, UserDto};

/// Roles seeded at startup, in descending privilege.
pub const DEFAULT_ROLES: [&str; 4] = ["Owner", "Administrator", "Viewer", "Blocked"];

#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: i32,
    pub name: String,
}

impl Role {
    pub fn from_entity(entity: entity::role::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> RoleDto {
        RoleDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub role: Option<Role>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model, role: Option<entity::role::Model>) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role: role.map(Role::from_entity),
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role.map(|r| r.name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: Option<String>,
    pub role_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub id: String,
    pub user_id: String,
    pub value: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Token {
    pub fn from_entity(entity: entity::token::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            value: entity.value,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            id: self.id,
            user_id: self.user_id,
            value: self.value,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}
