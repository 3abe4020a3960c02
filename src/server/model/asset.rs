//! Asset domain models and parameters.

use chrono::{DateTime, Utc};
use entity::asset::AssetType;

use crate::model::asset::{AssetDto, AssetTypeDto, CreateAssetDto, TruckPropertiesDto, UpdateAssetDto};

impl From<AssetTypeDto> for AssetType {
    fn from(dto: AssetTypeDto) -> Self {
        match dto {
            AssetTypeDto::Car => AssetType::Car,
            AssetTypeDto::Truck => AssetType::Truck,
        }
    }
}

impl From<AssetType> for AssetTypeDto {
    fn from(value: AssetType) -> Self {
        match value {
            AssetType::Car => AssetTypeDto::Car,
            AssetType::Truck => AssetTypeDto::Truck,
        }
    }
}

/// Vehicle dimensions passed to truck routing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TruckProperties {
    pub height: Option<f64>,
    pub width: Option<f64>,
    pub length: Option<f64>,
    pub weight: Option<f64>,
    pub axles: Option<i32>,
    pub trailers: Option<i32>,
    pub semi: Option<bool>,
}

impl From<TruckPropertiesDto> for TruckProperties {
    fn from(dto: TruckPropertiesDto) -> Self {
        Self {
            height: dto.height,
            width: dto.width,
            length: dto.length,
            weight: dto.weight,
            axles: dto.axles,
            trailers: dto.trailers,
            semi: dto.semi,
        }
    }
}

impl TruckProperties {
    pub fn into_dto(self) -> TruckPropertiesDto {
        TruckPropertiesDto {
            height: self.height,
            width: self.width,
            length: self.length,
            weight: self.weight,
            axles: self.axles,
            trailers: self.trailers,
            semi: self.semi,
        }
    }
}

/// A tracked vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub asset_type: AssetType,
    pub properties: TruckProperties,
    /// Point with the newest device timestamp reported for this asset.
    pub latest_position_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Asset {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::asset::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            asset_type: entity.asset_type,
            properties: TruckProperties {
                height: entity.height,
                width: entity.width,
                length: entity.length,
                weight: entity.weight,
                axles: entity.axles,
                trailers: entity.trailers,
                semi: entity.semi,
            },
            latest_position_id: entity.latest_position_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AssetDto {
        AssetDto {
            id: self.id,
            name: self.name,
            asset_type: self.asset_type.into(),
            properties: self.properties.into_dto(),
            latest_position_id: self.latest_position_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAssetParams {
    /// Generated by the service when `None`.
    pub id: Option<String>,
    pub name: String,
    pub asset_type: AssetType,
    pub properties: TruckProperties,
}

impl CreateAssetParams {
    pub fn from_dto(dto: CreateAssetDto) -> Self {
        Self {
            id: dto.id.filter(|id| !id.trim().is_empty()),
            name: dto.name,
            asset_type: dto.asset_type.into(),
            properties: dto.properties.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateAssetParams {
    pub id: String,
    pub name: String,
    pub asset_type: AssetType,
    pub properties: TruckProperties,
}

impl UpdateAssetParams {
    pub fn from_dto(id: String, dto: UpdateAssetDto) -> Self {
        Self {
            id,
            name: dto.name,
            asset_type: dto.asset_type.into(),
            properties: dto.properties.into(),
        }
    }
}
