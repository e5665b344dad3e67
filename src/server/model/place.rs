use crate::model::place::{CreatePlaceDto, UpdatePlaceDto};
use crate::server::error::AppError;
use crate::server::util::validate::require_field;

/// Parameters for registering a place together with its coordinates.
///
/// Coordinates stay exact-precision strings; markers are matched by string
/// equality, never by numeric closeness.
#[derive(Debug, Clone)]
pub struct CreatePlaceParams {
    pub place_name: String,
    pub address: String,
    pub detail_address: String,
    pub latitude: String,
    pub longitude: String,
}

impl CreatePlaceParams {
    /// Validates field presence at the API boundary.
    ///
    /// # Returns
    /// - `Ok(CreatePlaceParams)` - All required fields were supplied
    /// - `Err(AppError::BadRequest)` - A required field was missing
    pub fn from_dto(dto: CreatePlaceDto) -> Result<Self, AppError> {
        Ok(Self {
            place_name: require_field(dto.place_name, "placeName")?,
            address: require_field(dto.address, "address")?,
            detail_address: require_field(dto.detail_address, "detailAddress")?,
            latitude: require_field(dto.latitude, "latitude")?,
            longitude: require_field(dto.longitude, "longitude")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdatePlaceParams {
    pub place_name: String,
    pub detail_address: String,
}

impl UpdatePlaceParams {
    pub fn from_dto(dto: UpdatePlaceDto) -> Result<Self, AppError> {
        Ok(Self {
            place_name: require_field(dto.place_name, "placeName")?,
            detail_address: require_field(dto.detail_address, "detailAddress")?,
        })
    }
}
