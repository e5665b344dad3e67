//! Headcount aggregation models.
//!
//! The latest-per-place computation runs over anything implementing
//! [`Reading`], so the same pure functions serve both the raw per-place
//! endpoints and the overview rows that carry their place and marker.

use crate::model::headcount::{AnnotatedHeadcountDto, HeadcountOverviewDto};
use crate::model::marker::MarkerDto;
use crate::model::place::PlaceDto;

/// A headcount observation that can participate in the latest-per-place
/// aggregation.
pub trait Reading {
    fn place_id(&self) -> i32;
    fn created_time(&self) -> &str;
}

impl Reading for entity::headcount::Model {
    fn place_id(&self) -> i32 {
        self.place_id
    }

    fn created_time(&self) -> &str {
        &self.created_time
    }
}

/// A headcount joined with the place it was reported at and that place's
/// marker. Repository result for the overview and marker queries.
#[derive(Debug, Clone)]
pub struct PlaceReading {
    pub headcount: entity::headcount::Model,
    pub place: entity::place::Model,
    pub marker: entity::marker::Model,
}

impl Reading for PlaceReading {
    fn place_id(&self) -> i32 {
        self.headcount.place_id
    }

    fn created_time(&self) -> &str {
        &self.headcount.created_time
    }
}

/// A reading annotated with the whole seconds elapsed since the previous
/// reading at the same place, or `-1` when that place has no previous one.
#[derive(Debug, Clone)]
pub struct Annotated<T> {
    pub reading: T,
    pub update_elapsed_time: i64,
}

impl Annotated<entity::headcount::Model> {
    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> AnnotatedHeadcountDto {
        AnnotatedHeadcountDto {
            id: self.reading.id,
            place_id: self.reading.place_id,
            headcount: self.reading.headcount,
            created_time: self.reading.created_time,
            update_elapsed_time: self.update_elapsed_time,
        }
    }
}

impl Annotated<PlaceReading> {
    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> HeadcountOverviewDto {
        HeadcountOverviewDto {
            id: self.reading.headcount.id,
            headcount: self.reading.headcount.headcount,
            created_time: self.reading.headcount.created_time,
            update_elapsed_time: self.update_elapsed_time,
            place: PlaceDto::from_entity(self.reading.place),
            marker: MarkerDto::from_entity(self.reading.marker),
        }
    }
}
