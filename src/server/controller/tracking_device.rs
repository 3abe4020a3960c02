use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        tracking_device::{CreateTrackingDeviceDto, TrackingDeviceDto, UpdateTrackingDeviceDto},
        tracking_point::{PointReadingDto, TrackingPointDto},
    },
    server::{
        error::AppError,
        model::{
            tracking_device::{CreateTrackingDeviceParams, UpdateTrackingDeviceParams},
            tracking_point::CreateTrackingPointParams,
        },
        service::{tracking_device::TrackingDeviceService, tracking_point::TrackingPointService},
        state::AppState,
    },
};

/// Tag for grouping tracking device endpoints in OpenAPI documentation
pub static DEVICE_TAG: &str = "device";

/// Register a tracking device.
///
/// The id is generated unless supplied. A linked asset must exist and must not already
/// be linked to another live device.
///
/// # Returns
/// - `201 Created` - The registered device
/// - `400 Bad Request` - Id in use, unknown asset or asset already linked
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/devices",
    tag = DEVICE_TAG,
    request_body = CreateTrackingDeviceDto,
    responses(
        (status = 201, description = "Successfully registered device", body = TrackingDeviceDto),
        (status = 400, description = "Invalid device data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_device(
    State(state): State<AppState>,
    Json(payload): Json<CreateTrackingDeviceDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrackingDeviceService::new(&state.db);

    let device = service
        .create(CreateTrackingDeviceParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(device.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/devices",
    tag = DEVICE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved devices", body = Vec<TrackingDeviceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_devices(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = TrackingDeviceService::new(&state.db);

    let devices = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(devices.into_iter().map(|d| d.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/devices/{id}",
    tag = DEVICE_TAG,
    params(
        ("id" = String, Path, description = "Device ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved device", body = TrackingDeviceDto),
        (status = 404, description = "Device not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_device(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrackingDeviceService::new(&state.db);

    let device = service
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Tracking device not found".to_string()))?;

    Ok((StatusCode::OK, Json(device.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/devices/{id}",
    tag = DEVICE_TAG,
    params(
        ("id" = String, Path, description = "Device ID")
    ),
    request_body = UpdateTrackingDeviceDto,
    responses(
        (status = 200, description = "Successfully updated device", body = TrackingDeviceDto),
        (status = 400, description = "Unknown asset or asset already linked", body = ErrorDto),
        (status = 404, description = "Device not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_device(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTrackingDeviceDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrackingDeviceService::new(&state.db);

    let device = service
        .update(UpdateTrackingDeviceParams::from_dto(id, payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Tracking device not found".to_string()))?;

    Ok((StatusCode::OK, Json(device.into_dto())))
}

/// Soft delete a device. Its asset becomes free to link to another device.
#[utoipa::path(
    delete,
    path = "/api/devices/{id}",
    tag = DEVICE_TAG,
    params(
        ("id" = String, Path, description = "Device ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted device"),
        (status = 404, description = "Device not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_device(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrackingDeviceService::new(&state.db);

    if !service.delete(&id).await? {
        return Err(AppError::NotFound("Tracking device not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/devices/{id}/points",
    tag = DEVICE_TAG,
    params(
        ("id" = String, Path, description = "Device ID")
    ),
    responses(
        (status = 200, description = "Points reported by the device", body = Vec<TrackingPointDto>),
        (status = 404, description = "Device not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_device_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrackingDeviceService::new(&state.db);

    let points = service
        .get_points(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Tracking device not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(points.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Ingest one point reported by a device.
///
/// # Returns
/// - `201 Created` - The stored point with its resolved asset id
/// - `400 Bad Request` - Unknown device or coordinates out of range
/// - `500 Internal Server Error` - Device not linked to an asset, or database error
#[utoipa::path(
    post,
    path = "/api/devices/{id}/points",
    tag = DEVICE_TAG,
    params(
        ("id" = String, Path, description = "Device ID")
    ),
    request_body = PointReadingDto,
    responses(
        (status = 201, description = "Successfully stored point", body = TrackingPointDto),
        (status = 400, description = "Invalid point or unknown device", body = ErrorDto),
        (status = 500, description = "Device not linked or internal server error", body = ErrorDto)
    ),
)]
pub async fn add_device_point(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<PointReadingDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrackingPointService::new(&state.db);

    let point = service
        .add(CreateTrackingPointParams::from_reading(id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(point.into_dto())))
}
