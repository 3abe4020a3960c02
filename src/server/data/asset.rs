//! Asset data repository.
//!
//! Reads never return soft-deleted assets.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    asset::{Asset, CreateAssetParams, UpdateAssetParams},
    tracking_point::TrackingPoint,
};

pub struct AssetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an asset with the given id.
    ///
    /// # Arguments
    /// - `id` - Primary key, already generated or validated by the caller
    /// - `params` - Asset fields; the `id` field is ignored in favour of `id`
    ///
    /// # Returns
    /// - `Ok(Asset)` - The created asset
    /// - `Err(DbErr)` - Database error, including primary key conflicts
    pub async fn create(
        &self,
        id: String,
        params: CreateAssetParams,
    ) -> Result<Asset, DbErr> {
        let properties = params.properties;
        let entity = entity::asset::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(params.name),
            asset_type: ActiveValue::Set(params.asset_type),
            latest_position_id: ActiveValue::Set(None),
            height: ActiveValue::Set(properties.height),
            width: ActiveValue::Set(properties.width),
            length: ActiveValue::Set(properties.length),
            weight: ActiveValue::Set(properties.weight),
            axles: ActiveValue::Set(properties.axles),
            trailers: ActiveValue::Set(properties.trailers),
            semi: ActiveValue::Set(properties.semi),
            deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Asset::from_entity(entity))
    }

    /// Checks whether any row uses the id, soft-deleted rows included.
    pub async fn id_taken(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Asset::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Asset>, DbErr> {
        let entity = entity::prelude::Asset::find_by_id(id)
            .filter(entity::asset::Column::Deleted.eq(false))
            .one(self.db)
            .await?;

        Ok(entity.map(Asset::from_entity))
    }

    /// Gets all assets ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Asset>, DbErr> {
        let entities = entity::prelude::Asset::find()
            .filter(entity::asset::Column::Deleted.eq(false))
            .order_by_asc(entity::asset::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Asset::from_entity).collect())
    }

    /// Finds assets whose name contains `fragment`, ignoring ASCII case.
    pub async fn find_by_name(&self, fragment: &str) -> Result<Vec<Asset>, DbErr> {
        let entities = entity::prelude::Asset::find()
            .filter(entity::asset::Column::Deleted.eq(false))
            .filter(entity::asset::Column::Name.contains(fragment))
            .order_by_asc(entity::asset::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Asset::from_entity).collect())
    }

    /// Updates name, type and truck properties.
    ///
    /// # Returns
    /// - `Ok(Some(Asset))` - The updated asset
    /// - `Ok(None)` - No live asset with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateAssetParams) -> Result<Option<Asset>, DbErr> {
        let Some(entity) = entity::prelude::Asset::find_by_id(&params.id)
            .filter(entity::asset::Column::Deleted.eq(false))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::asset::ActiveModel = entity.into();
        active.name = ActiveValue::Set(params.name);
        active.asset_type = ActiveValue::Set(params.asset_type);
        active.height = ActiveValue::Set(params.properties.height);
        active.width = ActiveValue::Set(params.properties.width);
        active.length = ActiveValue::Set(params.properties.length);
        active.weight = ActiveValue::Set(params.properties.weight);
        active.axles = ActiveValue::Set(params.properties.axles);
        active.trailers = ActiveValue::Set(params.properties.trailers);
        active.semi = ActiveValue::Set(params.properties.semi);

        let entity = active.update(self.db).await?;

        Ok(Some(Asset::from_entity(entity)))
    }

    /// Marks an asset as deleted.
    ///
    /// # Returns
    /// - `Ok(true)` - The asset was live and is now deleted
    /// - `Ok(false)` - No live asset with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn soft_delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Asset::update_many()
            .col_expr(
                entity::asset::Column::Deleted,
                sea_orm::sea_query::Expr::value(true),
            )
            .filter(entity::asset::Column::Id.eq(id))
            .filter(entity::asset::Column::Deleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Asset::find()
            .filter(entity::asset::Column::Deleted.eq(false))
            .count(self.db)
            .await
    }

    /// Latest position ids of all live assets that have one.
    pub async fn get_latest_position_ids(&self) -> Result<HashSet<i32>, DbErr> {
        let ids: Vec<Option<i32>> = entity::prelude::Asset::find()
            .select_only()
            .column(entity::asset::Column::LatestPositionId)
            .filter(entity::asset::Column::Deleted.eq(false))
            .filter(entity::asset::Column::LatestPositionId.is_not_null())
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().flatten().collect())
    }

    /// Maps each live asset with a latest position to that point.
    pub async fn get_latest_positions(&self) -> Result<HashMap<String, TrackingPoint>, DbErr> {
        let assets = entity::prelude::Asset::find()
            .filter(entity::asset::Column::Deleted.eq(false))
            .filter(entity::asset::Column::LatestPositionId.is_not_null())
            .all(self.db)
            .await?;

        let point_ids: Vec<i32> = assets.iter().filter_map(|a| a.latest_position_id).collect();
        if point_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut points: HashMap<i32, entity::tracking_point::Model> =
            entity::prelude::TrackingPoint::find()
                .filter(entity::tracking_point::Column::Id.is_in(point_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|p| (p.id, p))
                .collect();

        Ok(assets
            .into_iter()
            .filter_map(|asset| {
                let point = points.remove(&asset.latest_position_id?)?;
                Some((asset.id, TrackingPoint::from_entity(point)))
            })
            .collect())
    }
}
