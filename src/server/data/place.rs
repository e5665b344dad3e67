//! Place data repository.
//!
//! Place creation and deletion manage the marker lifecycle as a side
//! effect: a place attaches to the marker at its exact coordinates
//! (creating one when needed), and deleting a marker's last place removes
//! the marker. Both run inside transactions so concurrent requests cannot
//! observe a half-applied cascade.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, TransactionTrait,
};

use crate::server::{
    model::place::{CreatePlaceParams, UpdatePlaceParams},
    util::time::format_now,
};

/// Headcount value of the reading inserted with every new place. Marks
/// "never reported" and is filtered from user input at the API boundary.
const SENTINEL_HEADCOUNT: i32 = -1;

/// Repository providing database operations for places.
pub struct PlaceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlaceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all places.
    pub async fn find_all(&self) -> Result<Vec<entity::place::Model>, DbErr> {
        entity::prelude::Place::find().all(self.db).await
    }

    /// Finds a place by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::place::Model>, DbErr> {
        entity::prelude::Place::find_by_id(id).one(self.db).await
    }

    /// Finds the places whose ids appear in the given list.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::place::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Place::find()
            .filter(entity::place::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Registers a place at the given coordinates.
    ///
    /// In one transaction: reuses the marker with exactly matching
    /// coordinate strings or creates one, inserts the place, and inserts the
    /// sentinel headcount so the place participates in aggregation before
    /// its first real reading.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created place
    /// - `Err(DbErr)` - Database error; nothing was persisted
    pub async fn create_with_coordinates(
        &self,
        params: &CreatePlaceParams,
    ) -> Result<entity::place::Model, DbErr> {
        let txn = self.db.begin().await?;

        let existing = entity::prelude::Marker::find()
            .filter(entity::marker::Column::Latitude.eq(&params.latitude))
            .filter(entity::marker::Column::Longitude.eq(&params.longitude))
            .one(&txn)
            .await?;

        let marker = match existing {
            Some(marker) => marker,
            None => {
                entity::marker::ActiveModel {
                    latitude: ActiveValue::Set(params.latitude.clone()),
                    longitude: ActiveValue::Set(params.longitude.clone()),
                    ..Default::default()
                }
                .insert(&txn)
                .await?
            }
        };

        let place = entity::place::ActiveModel {
            place_name: ActiveValue::Set(params.place_name.clone()),
            address: ActiveValue::Set(params.address.clone()),
            detail_address: ActiveValue::Set(params.detail_address.clone()),
            marker_id: ActiveValue::Set(marker.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::headcount::ActiveModel {
            place_id: ActiveValue::Set(place.id),
            headcount: ActiveValue::Set(SENTINEL_HEADCOUNT),
            created_time: ActiveValue::Set(format_now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(place)
    }

    /// Updates a place's name and detail address.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated place
    /// - `Ok(None)` - No place with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        params: &UpdatePlaceParams,
    ) -> Result<Option<entity::place::Model>, DbErr> {
        let Some(place) = entity::prelude::Place::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::place::ActiveModel = place.into();
        active.place_name = ActiveValue::Set(params.place_name.clone());
        active.detail_address = ActiveValue::Set(params.detail_address.clone());

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a place, its headcounts, and its marker when this was the
    /// marker's last place.
    ///
    /// The remaining-places count and the conditional marker delete happen
    /// in the same transaction as the place delete, so two concurrent
    /// deletions of a marker's last two places cannot both leave the marker
    /// behind.
    ///
    /// # Returns
    /// - `Ok(Some(count))` - Deleted; `count` places still share the marker
    /// - `Ok(None)` - No place with that id
    /// - `Err(DbErr)` - Database error; nothing was deleted
    pub async fn delete_cascading(&self, id: i32) -> Result<Option<u64>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(place) = entity::prelude::Place::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        entity::prelude::Headcount::delete_many()
            .filter(entity::headcount::Column::PlaceId.eq(place.id))
            .exec(&txn)
            .await?;

        entity::prelude::Place::delete_by_id(place.id).exec(&txn).await?;

        let remaining = entity::prelude::Place::find()
            .filter(entity::place::Column::MarkerId.eq(place.marker_id))
            .count(&txn)
            .await?;

        if remaining == 0 {
            entity::prelude::Marker::delete_by_id(place.marker_id)
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(Some(remaining))
    }
}
