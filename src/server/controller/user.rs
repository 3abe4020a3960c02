use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, RoleDto, TokenDto, UserDto},
    },
    server::{
        error::AppError,
        service::user::{RoleService, TokenService, UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Deserialize)]
pub struct UserFilter {
    pub email: Option<String>,
}

/// Create a user.
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Duplicate email or unknown role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Duplicate email or unknown role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service
        .create(payload.email, payload.name, payload.role)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// List users ordered by email, or look up one user by exact email.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("email" = Option<String>, Query, description = "Exact email to look up")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    Query(filter): Query<UserFilter>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let users = match filter.email {
        Some(email) => service.get_by_email(&email).await?.into_iter().collect(),
        None => service.get_all().await?,
    };

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted user"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    if !service.delete(&id).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Issue a new random token for a user.
#[utoipa::path(
    post,
    path = "/api/users/{id}/tokens",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 201, description = "Successfully issued token", body = TokenDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn issue_token(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = TokenService::new(&state.db);

    let token = service
        .issue(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::CREATED, Json(token.into_dto())))
}

/// Active tokens of a user, newest first.
#[utoipa::path(
    get,
    path = "/api/users/{id}/tokens",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Active tokens", body = Vec<TokenDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tokens(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = TokenService::new(&state.db);

    let tokens = service
        .get_active(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(tokens.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/tokens/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "Token ID")
    ),
    responses(
        (status = 204, description = "Successfully deactivated token"),
        (status = 404, description = "No active token with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deactivate_token(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = TokenService::new(&state.db);

    if !service.deactivate(&id).await? {
        return Err(AppError::NotFound("Token not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/roles",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Seeded roles", body = Vec<RoleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_roles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let roles = RoleService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(roles.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}
