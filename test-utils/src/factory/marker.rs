//! Marker factory for creating test coordinate pins.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test markers with customizable coordinates.
pub struct MarkerFactory<'a> {
    db: &'a DatabaseConnection,
    latitude: String,
    longitude: String,
}

impl<'a> MarkerFactory<'a> {
    /// Creates a new MarkerFactory with unique default coordinates.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            latitude: format!("37.{:06}", id),
            longitude: format!("127.{:06}", id),
        }
    }

    pub fn coordinates(
        mut self,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        self.latitude = latitude.into();
        self.longitude = longitude.into();
        self
    }

    /// Builds and inserts the marker row.
    pub async fn build(self) -> Result<entity::marker::Model, DbErr> {
        entity::marker::ActiveModel {
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a marker with default coordinates.
pub async fn create_marker(db: &DatabaseConnection) -> Result<entity::marker::Model, DbErr> {
    MarkerFactory::new(db).build().await
}
