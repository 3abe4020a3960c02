use crate::server::{
    data::trip::TripRepository,
    model::{
        tracking_point::Coordinate,
        trip::{CreateTripLegParams, CreateTripParams, Trip},
    },
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, trip::TripFactory},
};

mod count_per_asset_for_location;
mod create;
mod get_by_asset_id;
