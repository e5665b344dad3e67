use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerDto {
    pub id: i32,
    pub latitude: String,
    pub longitude: String,
}

impl MarkerDto {
    pub fn from_entity(marker: entity::marker::Model) -> Self {
        Self {
            id: marker.id,
            latitude: marker.latitude,
            longitude: marker.longitude,
        }
    }
}
