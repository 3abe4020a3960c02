use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::tracking_point::PointDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum RouteOptimizationDto {
    #[default]
    Time,
    Distance,
    TimeWithTraffic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DispatchingParametersDto {
    pub asset_id: String,
    /// At least two, in visiting order.
    pub waypoints: Vec<PointDto>,
    #[serde(default)]
    pub optimize: RouteOptimizationDto,
    #[serde(default)]
    pub avoid_tolls: bool,
    #[serde(default)]
    pub avoid_highways: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DispatchingResultsDto {
    pub distance_km: f64,
    pub duration_seconds: f64,
    pub route: Vec<PointDto>,
}
