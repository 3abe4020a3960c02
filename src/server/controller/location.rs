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
        location::{LocationDto, UpsertLocationDto},
    },
    server::{
        error::AppError, model::location::LocationParams, service::location::LocationService,
        state::AppState,
    },
};

/// Tag for grouping location endpoints in OpenAPI documentation
pub static LOCATION_TAG: &str = "location";

#[derive(Deserialize)]
pub struct LocationFilter {
    pub name: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/locations",
    tag = LOCATION_TAG,
    request_body = UpsertLocationDto,
    responses(
        (status = 201, description = "Successfully created location", body = LocationDto),
        (status = 400, description = "Invalid location data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_location(
    State(state): State<AppState>,
    Json(payload): Json<UpsertLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = LocationService::new(&state.db);

    let location = service.create(LocationParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(location.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/locations",
    tag = LOCATION_TAG,
    params(
        ("name" = Option<String>, Query, description = "Case-insensitive name fragment")
    ),
    responses(
        (status = 200, description = "Successfully retrieved locations", body = Vec<LocationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_locations(
    State(state): State<AppState>,
    Query(filter): Query<LocationFilter>,
) -> Result<impl IntoResponse, AppError> {
    let service = LocationService::new(&state.db);

    let locations = service.get_all(filter.name.as_deref()).await?;

    Ok((
        StatusCode::OK,
        Json(locations.into_iter().map(|l| l.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/locations/{id}",
    tag = LOCATION_TAG,
    params(
        ("id" = String, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved location", body = LocationDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = LocationService::new(&state.db);

    let location = service
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Location not found".to_string()))?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/locations/{id}",
    tag = LOCATION_TAG,
    params(
        ("id" = String, Path, description = "Location ID")
    ),
    request_body = UpsertLocationDto,
    responses(
        (status = 200, description = "Successfully updated location", body = LocationDto),
        (status = 400, description = "Invalid location data", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpsertLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = LocationService::new(&state.db);

    let location = service
        .update(&id, LocationParams::from_dto(payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Location not found".to_string()))?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/locations/{id}",
    tag = LOCATION_TAG,
    params(
        ("id" = String, Path, description = "Location ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted location"),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = LocationService::new(&state.db);

    if !service.delete(&id).await? {
        return Err(AppError::NotFound("Location not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Number of trips per asset that start or end at a location.
#[utoipa::path(
    get,
    path = "/api/locations/{id}/assets-count",
    tag = LOCATION_TAG,
    params(
        ("id" = String, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Trip count keyed by asset id", body = std::collections::HashMap<String, u64>),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assets_count(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = LocationService::new(&state.db);

    let counts = service.get_assets_count(&id).await?;

    Ok((StatusCode::OK, Json(counts)))
}
