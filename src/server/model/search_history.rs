use crate::model::search_history::CreateSearchHistoryDto;
use crate::server::error::AppError;
use crate::server::util::validate::require_field;

/// Parameters for recording a search. The (keyword, latitude, longitude)
/// triple identifies a search for de-duplication.
#[derive(Debug, Clone)]
pub struct CreateSearchHistoryParams {
    pub search_keyword: String,
    pub latitude: String,
    pub longitude: String,
}

impl CreateSearchHistoryParams {
    pub fn from_dto(dto: CreateSearchHistoryDto) -> Result<Self, AppError> {
        Ok(Self {
            search_keyword: require_field(dto.search_keyword, "searchKeyword")?,
            latitude: require_field(dto.latitude, "latitude")?,
            longitude: require_field(dto.longitude, "longitude")?,
        })
    }
}
