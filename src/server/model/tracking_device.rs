//! Tracking device domain models and parameters.

use crate::model::tracking_device::{
    CreateTrackingDeviceDto, TrackingDeviceDto, UpdateTrackingDeviceDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct TrackingDevice {
    pub id: String,
    pub name: String,
    pub model: Option<String>,
    pub phone_number: Option<String>,
    pub os_version: Option<String>,
    /// Asset this device reports for. Points cannot be ingested while `None`.
    pub asset_id: Option<String>,
    pub latest_position_id: Option<i32>,
}

impl TrackingDevice {
    pub fn from_entity(entity: entity::tracking_device::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            model: entity.model,
            phone_number: entity.phone_number,
            os_version: entity.os_version,
            asset_id: entity.asset_id,
            latest_position_id: entity.latest_position_id,
        }
    }

    pub fn into_dto(self) -> TrackingDeviceDto {
        TrackingDeviceDto {
            id: self.id,
            name: self.name,
            model: self.model,
            phone_number: self.phone_number,
            os_version: self.os_version,
            asset_id: self.asset_id,
            latest_position_id: self.latest_position_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTrackingDeviceParams {
    pub id: Option<String>,
    pub name: String,
    pub model: Option<String>,
    pub phone_number: Option<String>,
    pub os_version: Option<String>,
    pub asset_id: Option<String>,
}

impl CreateTrackingDeviceParams {
    pub fn from_dto(dto: CreateTrackingDeviceDto) -> Self {
        Self {
            id: dto.id.filter(|id| !id.trim().is_empty()),
            name: dto.name,
            model: dto.model,
            phone_number: dto.phone_number,
            os_version: dto.os_version,
            asset_id: dto.asset_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateTrackingDeviceParams {
    pub id: String,
    pub name: String,
    pub model: Option<String>,
    pub phone_number: Option<String>,
    pub os_version: Option<String>,
    pub asset_id: Option<String>,
}

impl UpdateTrackingDeviceParams {
    pub fn from_dto(id: String, dto: UpdateTrackingDeviceDto) -> Self {
        Self {
            id,
            name: dto.name,
            model: dto.model,
            phone_number: dto.phone_number,
            os_version: dto.os_version,
            asset_id: dto.asset_id,
        }
    }
}
