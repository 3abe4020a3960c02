use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum AssetTypeDto {
    #[default]
    Car,
    Truck,
}

/// Vehicle dimensions used for truck routing. Metres and kilograms.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct TruckPropertiesDto {
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub axles: Option<i32>,
    #[serde(default)]
    pub trailers: Option<i32>,
    #[serde(default)]
    pub semi: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AssetDto {
    pub id: String,
    pub name: String,
    pub asset_type: AssetTypeDto,
    pub properties: TruckPropertiesDto,
    pub latest_position_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateAssetDto {
    /// Generated when omitted.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub asset_type: AssetTypeDto,
    #[serde(default)]
    pub properties: TruckPropertiesDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateAssetDto {
    pub name: String,
    #[serde(default)]
    pub asset_type: AssetTypeDto,
    #[serde(default)]
    pub properties: TruckPropertiesDto,
}
