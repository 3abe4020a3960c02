use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        tracking_point::{CreateTrackingPointDto, TrackingPointDto},
    },
    server::{
        error::AppError, model::tracking_point::CreateTrackingPointParams,
        service::tracking_point::TrackingPointService, state::AppState,
    },
};

/// Tag for grouping tracking point endpoints in OpenAPI documentation
pub static POINT_TAG: &str = "point";

/// Ingest a batch of points from any number of devices.
///
/// Either every point is stored or none is.
///
/// # Returns
/// - `201 Created` - Stored points grouped by device
/// - `400 Bad Request` - Unknown or unlinked device, or coordinates out of range
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/points",
    tag = POINT_TAG,
    request_body = Vec<CreateTrackingPointDto>,
    responses(
        (status = 201, description = "Successfully stored points", body = Vec<TrackingPointDto>),
        (status = 400, description = "Invalid point or device", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_points(
    State(state): State<AppState>,
    Json(payload): Json<Vec<CreateTrackingPointDto>>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrackingPointService::new(&state.db);

    let params = payload
        .into_iter()
        .map(CreateTrackingPointParams::from_dto)
        .collect();
    let points = service.add_many(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(points.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/points/{id}",
    tag = POINT_TAG,
    params(
        ("id" = i32, Path, description = "Tracking point ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved point", body = TrackingPointDto),
        (status = 404, description = "Point not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_point(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrackingPointService::new(&state.db);

    let point = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Tracking point not found".to_string()))?;

    Ok((StatusCode::OK, Json(point.into_dto())))
}
