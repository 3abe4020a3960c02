use crate::server::{data::location::LocationRepository, model::location::LocationParams};
use entity::location::InterestLevel;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, location::LocationFactory},
};

mod count_existing;
mod create;
mod find_by_name;
mod update;

fn params(name: &str) -> LocationParams {
    LocationParams {
        name: name.to_string(),
        address: None,
        latitude: 47.61,
        longitude: -122.34,
        radius: 250.0,
        interest_level: InterestLevel::High,
    }
}
