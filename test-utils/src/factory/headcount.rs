//! Headcount factory for creating test crowd-level readings.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::now_string;

/// Factory for creating test headcount readings for a place.
pub struct HeadcountFactory<'a> {
    db: &'a DatabaseConnection,
    place_id: i32,
    headcount: i32,
    created_time: String,
}

impl<'a> HeadcountFactory<'a> {
    /// Creates a new HeadcountFactory for the given place.
    ///
    /// Defaults: headcount 0, created now.
    pub fn new(db: &'a DatabaseConnection, place_id: i32) -> Self {
        Self {
            db,
            place_id,
            headcount: 0,
            created_time: now_string(),
        }
    }

    pub fn headcount(mut self, headcount: i32) -> Self {
        self.headcount = headcount;
        self
    }

    pub fn created_time(mut self, created_time: impl Into<String>) -> Self {
        self.created_time = created_time.into();
        self
    }

    /// Builds and inserts the headcount row.
    pub async fn build(self) -> Result<entity::headcount::Model, DbErr> {
        entity::headcount::ActiveModel {
            place_id: ActiveValue::Set(self.place_id),
            headcount: ActiveValue::Set(self.headcount),
            created_time: ActiveValue::Set(self.created_time),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a headcount reading for the place with default values.
pub async fn create_headcount(
    db: &DatabaseConnection,
    place_id: i32,
) -> Result<entity::headcount::Model, DbErr> {
    HeadcountFactory::new(db, place_id).build().await
}
