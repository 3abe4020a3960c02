//! Location data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::location::{Location, LocationParams};

pub struct LocationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, id: String, params: LocationParams) -> Result<Location, DbErr> {
        let entity = entity::location::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            latitude: ActiveValue::Set(params.latitude),
            longitude: ActiveValue::Set(params.longitude),
            radius: ActiveValue::Set(params.radius),
            interest_level: ActiveValue::Set(params.interest_level),
            deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Location::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Location>, DbErr> {
        let entity = entity::prelude::Location::find_by_id(id)
            .filter(entity::location::Column::Deleted.eq(false))
            .one(self.db)
            .await?;

        Ok(entity.map(Location::from_entity))
    }

    /// Counts how many of `ids` are live locations.
    pub async fn count_existing(&self, ids: &[String]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::Location::find()
            .filter(entity::location::Column::Deleted.eq(false))
            .filter(entity::location::Column::Id.is_in(ids.iter().cloned()))
            .count(self.db)
            .await
    }

    /// Gets all live locations ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Location>, DbErr> {
        let entities = entity::prelude::Location::find()
            .filter(entity::location::Column::Deleted.eq(false))
            .order_by_asc(entity::location::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Location::from_entity).collect())
    }

    /// Finds live locations whose name contains `fragment`, ignoring ASCII case.
    pub async fn find_by_name(&self, fragment: &str) -> Result<Vec<Location>, DbErr> {
        let entities = entity::prelude::Location::find()
            .filter(entity::location::Column::Deleted.eq(false))
            .filter(entity::location::Column::Name.contains(fragment))
            .order_by_asc(entity::location::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Location::from_entity).collect())
    }

    /// Replaces all editable fields of a live location.
    ///
    /// # Returns
    /// - `Ok(Some(Location))` - The updated location
    /// - `Ok(None)` - No live location with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: &str, params: LocationParams) -> Result<Option<Location>, DbErr> {
        let Some(entity) = entity::prelude::Location::find_by_id(id)
            .filter(entity::location::Column::Deleted.eq(false))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::location::ActiveModel = entity.into();
        active.name = ActiveValue::Set(params.name);
        active.address = ActiveValue::Set(params.address);
        active.latitude = ActiveValue::Set(params.latitude);
        active.longitude = ActiveValue::Set(params.longitude);
        active.radius = ActiveValue::Set(params.radius);
        active.interest_level = ActiveValue::Set(params.interest_level);

        let entity = active.update(self.db).await?;

        Ok(Some(Location::from_entity(entity)))
    }

    pub async fn soft_delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Location::update_many()
            .col_expr(
                entity::location::Column::Deleted,
                sea_orm::sea_query::Expr::value(true),
            )
            .filter(entity::location::Column::Id.eq(id))
            .filter(entity::location::Column::Deleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Location::find()
            .filter(entity::location::Column::Deleted.eq(false))
            .count(self.db)
            .await
    }
}
