use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tracking_point")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tracking_device_id: String,
    pub asset_id: String,
    pub trip_id: Option<i32>,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    pub accuracy: Option<f64>,
    pub speed: Option<f64>,
    pub heading: Option<f64>,
    pub device_timestamp_utc: DateTimeUtc,
    pub created_at_time_utc: DateTimeUtc,
    pub debug: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::asset::Entity",
        from = "Column::AssetId",
        to = "super::asset::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Asset,
    #[sea_orm(
        belongs_to = "super::tracking_device::Entity",
        from = "Column::TrackingDeviceId",
        to = "super::tracking_device::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TrackingDevice,
    #[sea_orm(
        belongs_to = "super::trip::Entity",
        from = "Column::TripId",
        to = "super::trip::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Trip,
}

impl Related<super::asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asset.def()
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
