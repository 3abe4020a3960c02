//! Dispatching domain models and parameters.

use crate::{
    model::dispatching::{DispatchingParametersDto, DispatchingResultsDto, RouteOptimizationDto},
    server::model::tracking_point::Coordinate,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteOptimization {
    #[default]
    Time,
    Distance,
    TimeWithTraffic,
}

impl RouteOptimization {
    /// Value of the routing API's `optimize` parameter.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Distance => "distance",
            Self::TimeWithTraffic => "timeWithTraffic",
        }
    }
}

impl From<RouteOptimizationDto> for RouteOptimization {
    fn from(dto: RouteOptimizationDto) -> Self {
        match dto {
            RouteOptimizationDto::Time => Self::Time,
            RouteOptimizationDto::Distance => Self::Distance,
            RouteOptimizationDto::TimeWithTraffic => Self::TimeWithTraffic,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DispatchingParams {
    pub asset_id: String,
    pub waypoints: Vec<Coordinate>,
    pub optimize: RouteOptimization,
    pub avoid_tolls: bool,
    pub avoid_highways: bool,
}

impl DispatchingParams {
    pub fn from_dto(dto: DispatchingParametersDto) -> Self {
        Self {
            asset_id: dto.asset_id,
            waypoints: dto.waypoints.into_iter().map(Coordinate::from).collect(),
            optimize: dto.optimize.into(),
            avoid_tolls: dto.avoid_tolls,
            avoid_highways: dto.avoid_highways,
        }
    }
}

/// One route alternative returned by the routing service.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchingResult {
    pub distance_km: f64,
    pub duration_seconds: f64,
    pub route: Vec<Coordinate>,
}

impl DispatchingResult {
    pub fn into_dto(self) -> DispatchingResultsDto {
        DispatchingResultsDto {
            distance_km: self.distance_km,
            duration_seconds: self.duration_seconds,
            route: self.route.into_iter().map(Coordinate::into_dto).collect(),
        }
    }
}
