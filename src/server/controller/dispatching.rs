use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        dispatching::{DispatchingParametersDto, DispatchingResultsDto},
    },
    server::{
        error::AppError, model::dispatching::DispatchingParams,
        service::dispatching::DispatchingService, state::AppState,
    },
};

/// Tag for grouping dispatching endpoints in OpenAPI documentation
pub static DISPATCHING_TAG: &str = "dispatching";

/// Compute truck routes for an asset through a list of waypoints.
///
/// Truck assets pass their dimensions and weight to the routing service.
///
/// # Returns
/// - `200 OK` - One result per route returned by the routing service
/// - `400 Bad Request` - Fewer than two waypoints
/// - `404 Not Found` - Asset not found
/// - `500 Internal Server Error` - Routing not configured, or database error
/// - `502 Bad Gateway` - Routing service failed
#[utoipa::path(
    post,
    path = "/api/dispatching",
    tag = DISPATCHING_TAG,
    request_body = DispatchingParametersDto,
    responses(
        (status = 200, description = "Computed routes", body = Vec<DispatchingResultsDto>),
        (status = 400, description = "Invalid dispatching parameters", body = ErrorDto),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 500, description = "Routing not configured or internal server error", body = ErrorDto),
        (status = 502, description = "Routing service unavailable", body = ErrorDto)
    ),
)]
pub async fn dispatch(
    State(state): State<AppState>,
    Json(payload): Json<DispatchingParametersDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DispatchingService::new(&state.db, &state.http_client, &state.routing);

    let routes = service
        .get_routes(DispatchingParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(routes.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}
