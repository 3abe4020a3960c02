use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        asset::{AssetDto, CreateAssetDto, UpdateAssetDto},
        tracking_point::TrackingPointDto,
        trip::TripDto,
    },
    server::{
        error::AppError,
        model::asset::{CreateAssetParams, UpdateAssetParams},
        service::asset::AssetService,
        state::AppState,
    },
};

/// Tag for grouping asset endpoints in OpenAPI documentation
pub static ASSET_TAG: &str = "asset";

#[derive(Deserialize)]
pub struct AssetFilter {
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct PointsQuery {
    pub after: Option<DateTime<Utc>>,
    #[serde(default)]
    pub include_debug: bool,
}

/// Create a new asset.
///
/// The id is generated unless the request supplies one.
///
/// # Returns
/// - `201 Created` - The created asset
/// - `400 Bad Request` - Blank name or id already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/assets",
    tag = ASSET_TAG,
    request_body = CreateAssetDto,
    responses(
        (status = 201, description = "Successfully created asset", body = AssetDto),
        (status = 400, description = "Invalid asset data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_asset(
    State(state): State<AppState>,
    Json(payload): Json<CreateAssetDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AssetService::new(&state.db);

    let asset = service.create(CreateAssetParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(asset.into_dto())))
}

/// List assets ordered by name, optionally filtered by a name fragment.
#[utoipa::path(
    get,
    path = "/api/assets",
    tag = ASSET_TAG,
    params(
        ("name" = Option<String>, Query, description = "Case-insensitive name fragment")
    ),
    responses(
        (status = 200, description = "Successfully retrieved assets", body = Vec<AssetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assets(
    State(state): State<AppState>,
    Query(filter): Query<AssetFilter>,
) -> Result<impl IntoResponse, AppError> {
    let service = AssetService::new(&state.db);

    let assets = service.get_all(filter.name.as_deref()).await?;

    Ok((
        StatusCode::OK,
        Json(assets.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/assets/{id}",
    tag = ASSET_TAG,
    params(
        ("id" = String, Path, description = "Asset ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved asset", body = AssetDto),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = AssetService::new(&state.db);

    let asset = service
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Asset not found".to_string()))?;

    Ok((StatusCode::OK, Json(asset.into_dto())))
}

/// Update an asset's name, type and truck properties.
///
/// # Returns
/// - `200 OK` - The updated asset
/// - `400 Bad Request` - Blank name
/// - `404 Not Found` - No live asset with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/assets/{id}",
    tag = ASSET_TAG,
    params(
        ("id" = String, Path, description = "Asset ID")
    ),
    request_body = UpdateAssetDto,
    responses(
        (status = 200, description = "Successfully updated asset", body = AssetDto),
        (status = 400, description = "Invalid asset data", body = ErrorDto),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateAssetDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AssetService::new(&state.db);

    let asset = service
        .update(UpdateAssetParams::from_dto(id, payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Asset not found".to_string()))?;

    Ok((StatusCode::OK, Json(asset.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/assets/{id}",
    tag = ASSET_TAG,
    params(
        ("id" = String, Path, description = "Asset ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted asset"),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = AssetService::new(&state.db);

    if !service.delete(&id).await? {
        return Err(AppError::NotFound("Asset not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Latest known position of every asset that has reported.
///
/// Keyed by asset id. Assets without a position are omitted.
#[utoipa::path(
    get,
    path = "/api/assets/latest-positions",
    tag = ASSET_TAG,
    responses(
        (status = 200, description = "Latest position per asset", body = HashMap<String, TrackingPointDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_latest_positions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = AssetService::new(&state.db);

    let positions: HashMap<String, TrackingPointDto> = service
        .get_latest_positions()
        .await?
        .into_iter()
        .map(|(asset_id, point)| (asset_id, point.into_dto()))
        .collect();

    Ok((StatusCode::OK, Json(positions)))
}

/// Points of an asset ordered by device time.
///
/// Without `after` every point is returned. With `after`, only points received strictly
/// later are returned and debug points are skipped unless `include_debug` is set.
#[utoipa::path(
    get,
    path = "/api/assets/{id}/points",
    tag = ASSET_TAG,
    params(
        ("id" = String, Path, description = "Asset ID"),
        ("after" = Option<DateTime<Utc>>, Query, description = "Exclusive lower bound on receive time"),
        ("include_debug" = Option<bool>, Query, description = "Include debug points (default: false)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved points", body = Vec<TrackingPointDto>),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_asset_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PointsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = AssetService::new(&state.db);

    let points = service
        .get_points(&id, query.after, query.include_debug)
        .await?
        .ok_or_else(|| AppError::NotFound("Asset not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(points.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Most recently received point of an asset that belongs to a trip.
#[utoipa::path(
    get,
    path = "/api/assets/{id}/points/last-labeled",
    tag = ASSET_TAG,
    params(
        ("id" = String, Path, description = "Asset ID")
    ),
    responses(
        (status = 200, description = "Last labeled point", body = TrackingPointDto),
        (status = 404, description = "No labeled point for this asset", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_last_labeled_point(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = AssetService::new(&state.db);

    let point = service
        .get_last_labeled_point(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Tracking point not found".to_string()))?;

    Ok((StatusCode::OK, Json(point.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/assets/{id}/trips",
    tag = ASSET_TAG,
    params(
        ("id" = String, Path, description = "Asset ID")
    ),
    responses(
        (status = 200, description = "Trips of the asset ordered by start", body = Vec<TripDto>),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_asset_trips(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = AssetService::new(&state.db);

    let trips = service
        .get_trips(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Asset not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(trips.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
    ))
}
