use crate::server::{
    data::tracking_device::TrackingDeviceRepository,
    model::tracking_device::{CreateTrackingDeviceParams, UpdateTrackingDeviceParams},
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::create_linked_device, tracking_device::TrackingDeviceFactory},
};

mod create;
mod get_by_ids;
mod soft_delete;
mod update;
