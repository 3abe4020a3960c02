use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, settings::DeploymentIdDto},
    server::{error::AppError, service::deployment::DeploymentService, state::AppState},
};

/// Tag for grouping settings endpoints in OpenAPI documentation
pub static SETTINGS_TAG: &str = "settings";

/// Identifier of this deployment, created on first start.
#[utoipa::path(
    get,
    path = "/api/settings/deployment-id",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Deployment id", body = DeploymentIdDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_deployment_id(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let id = DeploymentService::new(&state.db).get_or_create().await?;

    Ok((StatusCode::OK, Json(DeploymentIdDto { id })))
}
