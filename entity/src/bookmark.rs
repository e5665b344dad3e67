use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// A user-named, colored collection of place references.
///
/// `place_ids` is stored as a JSON array and may transiently contain ids of
/// places that have since been deleted; readers prune stale ids lazily.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bookmark")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: i32,

    pub bookmark_name: String,

    /// Icon color tag chosen by the user.
    pub icon_color: i32,

    #[sea_orm(column_type = "Json")]
    pub place_ids: PlaceIdList,
}

/// Ordered set of referenced place ids, serialized as a JSON array.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult,
)]
pub struct PlaceIdList(pub Vec<i32>);

impl PlaceIdList {
    pub fn contains(&self, place_id: i32) -> bool {
        self.0.contains(&place_id)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
