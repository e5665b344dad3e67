//! Marker data repository.
//!
//! Markers are never created or deleted through their own endpoints; the
//! place repository manages their lifecycle. This repository only reads.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// Repository providing read operations for coordinate markers.
pub struct MarkerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MarkerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all markers.
    pub async fn find_all(&self) -> Result<Vec<entity::marker::Model>, DbErr> {
        entity::prelude::Marker::find().all(self.db).await
    }

    /// Finds a marker by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::marker::Model>, DbErr> {
        entity::prelude::Marker::find_by_id(id).one(self.db).await
    }

    /// Finds a marker by exact string coordinate equality.
    ///
    /// Coordinates are stored and compared as strings; "37.5665" and
    /// "37.56650" are different markers.
    pub async fn find_by_coordinates(
        &self,
        latitude: &str,
        longitude: &str,
    ) -> Result<Option<entity::marker::Model>, DbErr> {
        entity::prelude::Marker::find()
            .filter(entity::marker::Column::Latitude.eq(latitude))
            .filter(entity::marker::Column::Longitude.eq(longitude))
            .one(self.db)
            .await
    }
}
