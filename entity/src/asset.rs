use sea_orm::entity::prelude::*;

/// Kind of vehicle, used to decide whether truck routing parameters apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum AssetType {
    #[sea_orm(num_value = 0)]
    Car,
    #[sea_orm(num_value = 1)]
    Truck,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "asset")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub asset_type: AssetType,
    /// Newest tracking point by device time. Plain column, the reverse FK lives on the point.
    pub latest_position_id: Option<i32>,
    pub height: Option<f64>,
    pub width: Option<f64>,
    pub length: Option<f64>,
    pub weight: Option<f64>,
    pub axles: Option<i32>,
    pub trailers: Option<i32>,
    pub semi: Option<bool>,
    pub deleted: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tracking_point::Entity")]
    TrackingPoint,
    #[sea_orm(has_many = "super::tracking_device::Entity")]
    TrackingDevice,
    #[sea_orm(has_many = "super::trip::Entity")]
    Trip,
}

impl Related<super::tracking_point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrackingPoint.def()
    }
}

impl Related<super::tracking_device::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrackingDevice.def()
    }
}

impl Related<super::trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trip.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
