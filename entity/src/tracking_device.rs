use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tracking_device")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub model: Option<String>,
    pub phone_number: Option<String>,
    pub os_version: Option<String>,
    /// Unique while set. Deleted devices release their asset.
    #[sea_orm(unique)]
    pub asset_id: Option<String>,
    pub latest_position_id: Option<i32>,
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
        on_delete = "SetNull"
    )]
    Asset,
    #[sea_orm(has_many = "super::tracking_point::Entity")]
    TrackingPoint,
}

impl Related<super::asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asset.def()
    }
}

impl Related<super::tracking_point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrackingPoint.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
