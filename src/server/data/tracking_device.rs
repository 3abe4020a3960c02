//! Tracking device data repository.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::tracking_device::{
    CreateTrackingDeviceParams, TrackingDevice, UpdateTrackingDeviceParams,
};

pub struct TrackingDeviceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrackingDeviceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a device with the given id.
    ///
    /// # Arguments
    /// - `id` - Primary key, already generated or validated by the caller
    /// - `params` - Device fields; `asset_id` must reference a live asset. The `id` field
    ///   is ignored in favour of `id`
    ///
    /// # Returns
    /// - `Ok(TrackingDevice)` - The created device
    /// - `Err(DbErr)` - Database error, including key conflicts
    pub async fn create(
        &self,
        id: String,
        params: CreateTrackingDeviceParams,
    ) -> Result<TrackingDevice, DbErr> {
        let entity = entity::tracking_device::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(params.name),
            model: ActiveValue::Set(params.model),
            phone_number: ActiveValue::Set(params.phone_number),
            os_version: ActiveValue::Set(params.os_version),
            asset_id: ActiveValue::Set(params.asset_id),
            latest_position_id: ActiveValue::Set(None),
            deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(TrackingDevice::from_entity(entity))
    }

    /// Checks whether any row uses the id, soft-deleted rows included.
    pub async fn id_taken(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::TrackingDevice::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<TrackingDevice>, DbErr> {
        let entity = entity::prelude::TrackingDevice::find_by_id(id)
            .filter(entity::tracking_device::Column::Deleted.eq(false))
            .one(self.db)
            .await?;

        Ok(entity.map(TrackingDevice::from_entity))
    }

    /// Gets live devices among `ids`, keyed by id. Unknown and deleted ids are absent.
    pub async fn get_by_ids(&self, ids: &[String]) -> Result<HashMap<String, TrackingDevice>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::TrackingDevice::find()
            .filter(entity::tracking_device::Column::Deleted.eq(false))
            .filter(entity::tracking_device::Column::Id.is_in(ids.iter().cloned()))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|e| (e.id.clone(), TrackingDevice::from_entity(e)))
            .collect())
    }

    /// Gets all live devices ordered by name.
    pub async fn get_all(&self) -> Result<Vec<TrackingDevice>, DbErr> {
        let entities = entity::prelude::TrackingDevice::find()
            .filter(entity::tracking_device::Column::Deleted.eq(false))
            .order_by_asc(entity::tracking_device::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TrackingDevice::from_entity).collect())
    }

    /// Gets the live device linked to an asset, if any.
    pub async fn get_by_asset_id(&self, asset_id: &str) -> Result<Option<TrackingDevice>, DbErr> {
        let entity = entity::prelude::TrackingDevice::find()
            .filter(entity::tracking_device::Column::Deleted.eq(false))
            .filter(entity::tracking_device::Column::AssetId.eq(asset_id))
            .one(self.db)
            .await?;

        Ok(entity.map(TrackingDevice::from_entity))
    }

    /// Updates descriptive fields and the asset link.
    ///
    /// # Returns
    /// - `Ok(Some(TrackingDevice))` - The updated device
    /// - `Ok(None)` - No live device with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        params: UpdateTrackingDeviceParams,
    ) -> Result<Option<TrackingDevice>, DbErr> {
        let Some(entity) = entity::prelude::TrackingDevice::find_by_id(&params.id)
            .filter(entity::tracking_device::Column::Deleted.eq(false))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::tracking_device::ActiveModel = entity.into();
        active.name = ActiveValue::Set(params.name);
        active.model = ActiveValue::Set(params.model);
        active.phone_number = ActiveValue::Set(params.phone_number);
        active.os_version = ActiveValue::Set(params.os_version);
        active.asset_id = ActiveValue::Set(params.asset_id);

        let entity = active.update(self.db).await?;

        Ok(Some(TrackingDevice::from_entity(entity)))
    }

    /// Marks a device as deleted and releases its asset link.
    ///
    /// # Returns
    /// - `Ok(true)` - The device was live and is now deleted
    /// - `Ok(false)` - No live device with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn soft_delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::TrackingDevice::update_many()
            .col_expr(
                entity::tracking_device::Column::Deleted,
                sea_orm::sea_query::Expr::value(true),
            )
            .col_expr(
                entity::tracking_device::Column::AssetId,
                sea_orm::sea_query::Expr::value(Option::<String>::None),
            )
            .filter(entity::tracking_device::Column::Id.eq(id))
            .filter(entity::tracking_device::Column::Deleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::TrackingDevice::find()
            .filter(entity::tracking_device::Column::Deleted.eq(false))
            .count(self.db)
            .await
    }
}
