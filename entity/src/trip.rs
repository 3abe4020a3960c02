use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "trip")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub asset_id: String,
    pub start_time_utc: DateTimeUtc,
    pub end_time_utc: DateTimeUtc,
    pub start_location_id: Option<String>,
    pub end_location_id: Option<String>,
    pub deleted: bool,
    pub created_at: DateTimeUtc,
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
        belongs_to = "super::location::Entity",
        from = "Column::StartLocationId",
        to = "super::location::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    StartLocation,
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::EndLocationId",
        to = "super::location::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    EndLocation,
    #[sea_orm(has_many = "super::trip_leg::Entity")]
    TripLeg,
    #[sea_orm(has_many = "super::tracking_point::Entity")]
    TrackingPoint,
}

impl Related<super::asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asset.def()
    }
}

impl Related<super::trip_leg::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripLeg.def()
    }
}

impl Related<super::tracking_point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrackingPoint.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
