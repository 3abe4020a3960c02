//! Route table and OpenAPI document.
//!
//! Routes are registered through `utoipa_axum` so every handler's `utoipa::path`
//! annotation ends up in the document served at `/api/openapi.json`.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        asset::*, dispatching::*, location::*, settings::*, statistics::*, tracking_device::*,
        tracking_point::*, trip::*, user::*,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Fleet Tracker API", description = "Asset tracking, trips and truck dispatching"),
    tags(
        (name = "asset", description = "Tracked assets"),
        (name = "device", description = "Tracking devices and single point ingestion"),
        (name = "point", description = "Batch point ingestion"),
        (name = "location", description = "Named locations"),
        (name = "trip", description = "Trips, legs and point labeling"),
        (name = "statistics", description = "Aggregations"),
        (name = "dispatching", description = "Truck routing"),
        (name = "user", description = "Users, roles and tokens"),
        (name = "settings", description = "Deployment settings")
    )
)]
struct ApiDoc;

/// Registers every handler together with its OpenAPI operation.
fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_assets, create_asset))
        .routes(routes!(get_latest_positions))
        .routes(routes!(get_asset, update_asset, delete_asset))
        .routes(routes!(get_asset_points))
        .routes(routes!(get_last_labeled_point))
        .routes(routes!(get_asset_trips))
        .routes(routes!(get_devices, create_device))
        .routes(routes!(get_device, update_device, delete_device))
        .routes(routes!(get_device_points, add_device_point))
        .routes(routes!(add_points))
        .routes(routes!(get_point))
        .routes(routes!(get_locations, create_location))
        .routes(routes!(get_location, update_location, delete_location))
        .routes(routes!(get_assets_count))
        .routes(routes!(create_trip))
        .routes(routes!(get_trip, delete_trip))
        .routes(routes!(get_nearest_points))
        .routes(routes!(assign_points))
        .routes(routes!(get_points_per_asset))
        .routes(routes!(get_points_per_day))
        .routes(routes!(get_active_assets))
        .routes(routes!(get_counts))
        .routes(routes!(dispatch))
        .routes(routes!(get_users, create_user))
        .routes(routes!(get_user, delete_user))
        .routes(routes!(get_tokens, issue_token))
        .routes(routes!(deactivate_token))
        .routes(routes!(get_roles))
        .routes(routes!(get_deployment_id))
}

/// Builds the API routes and merges the Swagger UI.
pub fn router() -> Router<AppState> {
    let (router, api) = api_routes().split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
}

/// Applies state and the HTTP layers to the route table.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
