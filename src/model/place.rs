use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDto {
    pub id: i32,
    pub place_name: String,
    pub address: String,
    pub detail_address: String,
    pub marker_id: i32,
}

impl PlaceDto {
    pub fn from_entity(place: entity::place::Model) -> Self {
        Self {
            id: place.id,
            place_name: place.place_name,
            address: place.address,
            detail_address: place.detail_address,
            marker_id: place.marker_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaceDto {
    pub place_name: Option<String>,
    pub address: Option<String>,
    pub detail_address: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlaceDto {
    pub place_name: Option<String>,
    pub detail_address: Option<String>,
}

/// Result of a place deletion: how many places still share the deleted
/// place's marker. Zero means the marker was removed as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRemovalDto {
    pub remaining_places: u64,
}
