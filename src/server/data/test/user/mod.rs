use crate::server::{
    data::user::{RoleRepository, TokenRepository, UserRepository},
    model::user::CreateUserParams,
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, user::UserFactory},
};

mod create;
mod deactivate_token;
mod get_or_create_role;
