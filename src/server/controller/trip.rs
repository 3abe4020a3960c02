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
        tracking_point::{AssignPointsDto, TrackingPointDto},
        trip::{CreateTripDto, TripDto},
    },
    server::{
        error::AppError,
        model::{tracking_point::Coordinate, trip::CreateTripParams},
        service::{tracking_point::TrackingPointService, trip::TripService},
        state::AppState,
    },
};

/// Tag for grouping trip endpoints in OpenAPI documentation
pub static TRIP_TAG: &str = "trip";

#[derive(Deserialize)]
pub struct NearestPointsQuery {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    10
}

/// Create a trip with its legs.
///
/// The trip and every leg are stored together or not at all.
///
/// # Returns
/// - `201 Created` - The created trip
/// - `400 Bad Request` - Unknown asset or location, or a reversed time range
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/trips",
    tag = TRIP_TAG,
    request_body = CreateTripDto,
    responses(
        (status = 201, description = "Successfully created trip", body = TripDto),
        (status = 400, description = "Invalid trip data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_trip(
    State(state): State<AppState>,
    Json(payload): Json<CreateTripDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TripService::new(&state.db);

    let trip = service.create(CreateTripParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(trip.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/trips/{id}",
    tag = TRIP_TAG,
    params(
        ("id" = i32, Path, description = "Trip ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved trip", body = TripDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TripService::new(&state.db);

    let trip = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

    Ok((StatusCode::OK, Json(trip.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/trips/{id}",
    tag = TRIP_TAG,
    params(
        ("id" = i32, Path, description = "Trip ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted trip"),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TripService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Trip not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Points of a trip closest to a coordinate, nearest first.
#[utoipa::path(
    get,
    path = "/api/trips/{id}/nearest-points",
    tag = TRIP_TAG,
    params(
        ("id" = i32, Path, description = "Trip ID"),
        ("latitude" = f64, Query, description = "Reference latitude"),
        ("longitude" = f64, Query, description = "Reference longitude"),
        ("count" = Option<usize>, Query, description = "Maximum number of points (default: 10)")
    ),
    responses(
        (status = 200, description = "Nearest points", body = Vec<TrackingPointDto>),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_nearest_points(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<NearestPointsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrackingPointService::new(&state.db);

    let origin = Coordinate {
        latitude: query.latitude,
        longitude: query.longitude,
    };
    let points = service.get_nearest_points(id, origin, query.count).await?;

    Ok((
        StatusCode::OK,
        Json(points.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Label points with a trip. All points must belong to the trip's asset.
#[utoipa::path(
    post,
    path = "/api/trips/{id}/points",
    tag = TRIP_TAG,
    params(
        ("id" = i32, Path, description = "Trip ID")
    ),
    request_body = AssignPointsDto,
    responses(
        (status = 204, description = "Successfully assigned points"),
        (status = 400, description = "Unknown point or point of another asset", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_points(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AssignPointsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrackingPointService::new(&state.db);

    service.assign_points_to_trip(id, payload.point_ids).await?;

    Ok(StatusCode::NO_CONTENT)
}
