//! Place factory for creating test places.
//!
//! A place always references a marker; `build()` creates one automatically
//! unless `marker_id` was set.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::{helpers::next_id, marker::create_marker};

/// Factory for creating test places with customizable fields.
pub struct PlaceFactory<'a> {
    db: &'a DatabaseConnection,
    place_name: String,
    address: String,
    detail_address: String,
    marker_id: Option<i32>,
}

impl<'a> PlaceFactory<'a> {
    /// Creates a new PlaceFactory with default values.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            place_name: format!("Place {}", id),
            address: format!("{} Main Street", id),
            detail_address: "1F".to_string(),
            marker_id: None,
        }
    }

    pub fn place_name(mut self, place_name: impl Into<String>) -> Self {
        self.place_name = place_name.into();
        self
    }

    /// Attaches the place to an existing marker instead of creating one.
    pub fn marker_id(mut self, marker_id: i32) -> Self {
        self.marker_id = Some(marker_id);
        self
    }

    /// Builds and inserts the place row, creating a marker first when none
    /// was supplied.
    pub async fn build(self) -> Result<entity::place::Model, DbErr> {
        let marker_id = match self.marker_id {
            Some(id) => id,
            None => create_marker(self.db).await?.id,
        };

        entity::place::ActiveModel {
            place_name: ActiveValue::Set(self.place_name),
            address: ActiveValue::Set(self.address),
            detail_address: ActiveValue::Set(self.detail_address),
            marker_id: ActiveValue::Set(marker_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a place (and a fresh marker) with default values.
pub async fn create_place(db: &DatabaseConnection) -> Result<entity::place::Model, DbErr> {
    PlaceFactory::new(db).build().await
}
