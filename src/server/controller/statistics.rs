use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        statistics::{ActiveAssetsDto, CountsDto},
    },
    server::{error::AppError, service::statistics::StatisticsService, state::AppState},
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATISTICS_TAG: &str = "statistics";

#[derive(Deserialize)]
pub struct ActiveAssetsQuery {
    pub since: Option<DateTime<Utc>>,
}

#[utoipa::path(
    get,
    path = "/api/statistics/points-per-asset",
    tag = STATISTICS_TAG,
    responses(
        (status = 200, description = "Point count keyed by asset id", body = std::collections::HashMap<String, u64>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_points_per_asset(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let counts = StatisticsService::new(&state.db).points_per_asset().await?;

    Ok((StatusCode::OK, Json(counts)))
}

/// Point count per UTC day of receive time, oldest day first.
#[utoipa::path(
    get,
    path = "/api/statistics/points-per-day",
    tag = STATISTICS_TAG,
    responses(
        (status = 200, description = "Point count keyed by date", body = BTreeMap<String, u64>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_points_per_day(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let counts: BTreeMap<NaiveDate, u64> =
        StatisticsService::new(&state.db).points_per_day().await?;

    Ok((StatusCode::OK, Json(counts)))
}

/// Number of assets whose latest position was received after `since`.
///
/// `since` defaults to now minus the configured active asset window.
#[utoipa::path(
    get,
    path = "/api/statistics/active-assets",
    tag = STATISTICS_TAG,
    params(
        ("since" = Option<DateTime<Utc>>, Query, description = "Exclusive lower bound on receive time")
    ),
    responses(
        (status = 200, description = "Active asset count", body = ActiveAssetsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_assets(
    State(state): State<AppState>,
    Query(query): Query<ActiveAssetsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let since = query
        .since
        .unwrap_or_else(|| Utc::now() - state.active_asset_window);

    let count = StatisticsService::new(&state.db).active_assets(since).await?;

    Ok((StatusCode::OK, Json(ActiveAssetsDto { since, count })))
}

#[utoipa::path(
    get,
    path = "/api/statistics/counts",
    tag = STATISTICS_TAG,
    responses(
        (status = 200, description = "Live entity counts", body = CountsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_counts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let counts = StatisticsService::new(&state.db).counts().await?;

    Ok((StatusCode::OK, Json(counts)))
}
