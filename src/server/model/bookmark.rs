use crate::model::bookmark::{CreateBookmarkDto, UpdateBookmarkDto};
use crate::server::error::AppError;
use crate::server::util::validate::require_field;

#[derive(Debug, Clone)]
pub struct CreateBookmarkParams {
    pub bookmark_name: String,
    pub icon_color: i32,
}

impl CreateBookmarkParams {
    pub fn from_dto(dto: CreateBookmarkDto) -> Result<Self, AppError> {
        Ok(Self {
            bookmark_name: require_field(dto.bookmark_name, "bookmarkName")?,
            icon_color: require_field(dto.icon_color, "iconColor")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateBookmarkParams {
    pub bookmark_name: String,
    pub icon_color: i32,
}

impl UpdateBookmarkParams {
    pub fn from_dto(dto: UpdateBookmarkDto) -> Result<Self, AppError> {
        Ok(Self {
            bookmark_name: require_field(dto.bookmark_name, "bookmarkName")?,
            icon_color: require_field(dto.icon_color, "iconColor")?,
        })
    }
}
