//! Truck routing through an external routing API.
//!
//! Requests follow the Bing Maps REST `Routes/Truck` shape: waypoints as `wp.N`
//! parameters, vehicle dimensions for trucks, and route geometry requested as points.

use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::server::{
    data::asset::AssetRepository,
    error::{routing::RoutingError, AppError},
    model::{
        asset::{Asset, TruckProperties},
        dispatching::{DispatchingParams, DispatchingResult},
        tracking_point::Coordinate,
    },
    state::RoutingSettings,
};
use entity::asset::AssetType;

pub struct DispatchingService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    settings: &'a RoutingSettings,
}

impl<'a> DispatchingService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        settings: &'a RoutingSettings,
    ) -> Self {
        Self {
            db,
            http_client,
            settings,
        }
    }

    /// Computes routes for an asset through the given waypoints.
    ///
    /// # Arguments
    /// - `params` - Asset, waypoints in visiting order and routing preferences
    ///
    /// # Returns
    /// - `Ok(Vec<DispatchingResult>)` - One result per route returned by the service
    /// - `Err(AppError::BadRequest)` - Fewer than two waypoints
    /// - `Err(AppError::NotFound)` - The asset does not exist
    /// - `Err(AppError::InvalidOperation)` - No routing API key is configured
    /// - `Err(AppError::RoutingErr)` - The routing service failed or answered garbage
    pub async fn get_routes(
        &self,
        params: DispatchingParams,
    ) -> Result<Vec<DispatchingResult>, AppError> {
        if params.waypoints.len() < 2 {
            return Err(AppError::BadRequest(
                "At least two waypoints are required".to_string(),
            ));
        }

        let asset = AssetRepository::new(self.db)
            .get_by_id(&params.asset_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Asset not found".to_string()))?;

        let Some(api_key) = self.settings.api_key.as_deref() else {
            return Err(AppError::InvalidOperation(
                "Routing is not configured".to_string(),
            ));
        };

        let query = build_query(&params, &asset, api_key);
        tracing::debug!(
            "Requesting {} waypoint route for asset {}",
            params.waypoints.len(),
            asset.id
        );

        let response = self
            .http_client
            .get(self.settings.api_url.clone())
            .query(&query)
            .send()
            .await
            .map_err(RoutingError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(RoutingError::from)?;
        if !status.is_success() {
            return Err(RoutingError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(parse_response(&body)?)
    }
}

/// Builds the query string pairs for a truck route request.
fn build_query(params: &DispatchingParams, asset: &Asset, api_key: &str) -> Vec<(String, String)> {
    let mut query: Vec<(String, String)> = params
        .waypoints
        .iter()
        .enumerate()
        .map(|(i, wp)| (format!("wp.{}", i), format!("{},{}", wp.latitude, wp.longitude)))
        .collect();

    query.push((
        "optimize".to_string(),
        params.optimize.as_query_value().to_string(),
    ));

    let avoid: Vec<&str> = [
        (params.avoid_tolls, "tolls"),
        (params.avoid_highways, "highways"),
    ]
    .into_iter()
    .filter_map(|(enabled, name)| enabled.then_some(name))
    .collect();
    if !avoid.is_empty() {
        query.push(("avoid".to_string(), avoid.join(",")));
    }

    if asset.asset_type == AssetType::Truck {
        push_truck_properties(&mut query, &asset.properties);
    }

    query.push(("routeAttributes".to_string(), "routePath".to_string()));
    query.push(("distanceUnit".to_string(), "km".to_string()));
    query.push(("key".to_string(), api_key.to_string()));

    query
}

fn push_truck_properties(query: &mut Vec<(String, String)>, properties: &TruckProperties) {
    let dimensions = [
        ("vehicleHeight", properties.height),
        ("vehicleWidth", properties.width),
        ("vehicleLength", properties.length),
    ];
    let mut any_dimension = false;
    for (name, value) in dimensions {
        if let Some(value) = value {
            query.push((name.to_string(), value.to_string()));
            any_dimension = true;
        }
    }
    if any_dimension {
        query.push(("dimensionUnit".to_string(), "m".to_string()));
    }

    if let Some(weight) = properties.weight {
        query.push(("vehicleWeight".to_string(), weight.to_string()));
        query.push(("weightUnit".to_string(), "kg".to_string()));
    }
    if let Some(axles) = properties.axles {
        query.push(("vehicleAxles".to_string(), axles.to_string()));
    }
    if let Some(trailers) = properties.trailers {
        query.push(("vehicleTrailers".to_string(), trailers.to_string()));
    }
    if let Some(semi) = properties.semi {
        query.push(("vehicleSemi".to_string(), semi.to_string()));
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteResponse {
    #[serde(default)]
    resource_sets: Vec<ResourceSet>,
}

#[derive(Deserialize)]
struct ResourceSet {
    #[serde(default)]
    resources: Vec<RouteResource>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteResource {
    travel_distance: f64,
    travel_duration: f64,
    route_path: Option<RoutePath>,
}

#[derive(Deserialize)]
struct RoutePath {
    line: RouteLine,
}

#[derive(Deserialize)]
struct RouteLine {
    #[serde(default)]
    coordinates: Vec<[f64; 2]>,
}

/// Parses a routing response body into one result per route resource.
fn parse_response(body: &str) -> Result<Vec<DispatchingResult>, RoutingError> {
    let response: RouteResponse = serde_json::from_str(body)?;

    let resources = response
        .resource_sets
        .into_iter()
        .next()
        .map(|set| set.resources)
        .unwrap_or_default();

    if resources.is_empty() {
        return Err(RoutingError::EmptyResponse);
    }

    Ok(resources
        .into_iter()
        .map(|resource| DispatchingResult {
            distance_km: resource.travel_distance,
            duration_seconds: resource.travel_duration,
            route: resource
                .route_path
                .map(|path| {
                    path.line
                        .coordinates
                        .into_iter()
                        .map(|[latitude, longitude]| Coordinate {
                            latitude,
                            longitude,
                        })
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect())
}
