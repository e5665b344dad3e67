use serde::{Deserialize, Serialize};

use crate::model::marker::MarkerDto;
use crate::model::place::PlaceDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadcountDto {
    pub id: i32,
    pub place_id: i32,
    pub headcount: i32,
    pub created_time: String,
}

impl HeadcountDto {
    pub fn from_entity(headcount: entity::headcount::Model) -> Self {
        Self {
            id: headcount.id,
            place_id: headcount.place_id,
            headcount: headcount.headcount,
            created_time: headcount.created_time,
        }
    }
}

/// A place's latest reading plus how many whole seconds passed since the
/// previous one, or `-1` when there is no previous reading to compare with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedHeadcountDto {
    pub id: i32,
    pub place_id: i32,
    pub headcount: i32,
    pub created_time: String,
    pub update_elapsed_time: i64,
}

/// Overview row: an annotated reading with its place and marker embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadcountOverviewDto {
    pub id: i32,
    pub headcount: i32,
    pub created_time: String,
    pub update_elapsed_time: i64,
    pub place: PlaceDto,
    pub marker: MarkerDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateHeadcountDto {
    pub headcount: Option<i32>,
}
