//! Headcount data repository.
//!
//! Readings are append-only; the aggregation in the service layer reduces
//! them to per-place values. The "detailed" queries join each reading with
//! its place and that place's marker for the overview endpoints.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::server::{model::headcount::PlaceReading, util::time::format_now};

/// Repository providing database operations for headcount readings.
pub struct HeadcountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HeadcountRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all readings.
    pub async fn find_all(&self) -> Result<Vec<entity::headcount::Model>, DbErr> {
        entity::prelude::Headcount::find().all(self.db).await
    }

    /// Lists all readings for one place.
    pub async fn find_by_place(
        &self,
        place_id: i32,
    ) -> Result<Vec<entity::headcount::Model>, DbErr> {
        entity::prelude::Headcount::find()
            .filter(entity::headcount::Column::PlaceId.eq(place_id))
            .all(self.db)
            .await
    }

    /// Records a reading for a place, timestamped now.
    pub async fn create(
        &self,
        place_id: i32,
        headcount: i32,
    ) -> Result<entity::headcount::Model, DbErr> {
        entity::headcount::ActiveModel {
            place_id: ActiveValue::Set(place_id),
            headcount: ActiveValue::Set(headcount),
            created_time: ActiveValue::Set(format_now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Loads every reading joined with its place and marker.
    pub async fn find_all_detailed(&self) -> Result<Vec<PlaceReading>, DbErr> {
        let rows = entity::prelude::Headcount::find()
            .find_also_related(entity::prelude::Place)
            .all(self.db)
            .await?;

        self.assemble(rows).await
    }

    /// Loads the readings for every place at a marker, joined with their
    /// place and the marker itself.
    pub async fn find_detailed_by_marker(
        &self,
        marker_id: i32,
    ) -> Result<Vec<PlaceReading>, DbErr> {
        let rows = entity::prelude::Headcount::find()
            .find_also_related(entity::prelude::Place)
            .filter(entity::place::Column::MarkerId.eq(marker_id))
            .all(self.db)
            .await?;

        self.assemble(rows).await
    }

    /// Loads the readings for the given places, joined with place and
    /// marker.
    pub async fn find_detailed_by_places(
        &self,
        place_ids: &[i32],
    ) -> Result<Vec<PlaceReading>, DbErr> {
        if place_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::Headcount::find()
            .find_also_related(entity::prelude::Place)
            .filter(entity::headcount::Column::PlaceId.is_in(place_ids.iter().copied()))
            .all(self.db)
            .await?;

        self.assemble(rows).await
    }

    /// Attaches markers to (headcount, place) rows. Rows whose place or
    /// marker has vanished mid-query are dropped rather than failing the
    /// whole read.
    async fn assemble(
        &self,
        rows: Vec<(entity::headcount::Model, Option<entity::place::Model>)>,
    ) -> Result<Vec<PlaceReading>, DbErr> {
        let marker_ids: Vec<i32> = rows
            .iter()
            .filter_map(|(_, place)| place.as_ref().map(|place| place.marker_id))
            .collect();

        let markers: HashMap<i32, entity::marker::Model> = if marker_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Marker::find()
                .filter(entity::marker::Column::Id.is_in(marker_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|marker| (marker.id, marker))
                .collect()
        };

        let mut readings = Vec::with_capacity(rows.len());
        for (headcount, place) in rows {
            let Some(place) = place else { continue };
            let Some(marker) = markers.get(&place.marker_id).cloned() else {
                continue;
            };

            readings.push(PlaceReading {
                headcount,
                place,
                marker,
            });
        }

        Ok(readings)
    }
}
