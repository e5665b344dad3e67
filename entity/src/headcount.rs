use sea_orm::entity::prelude::*;

/// A timestamped crowd-level reading for one place. Each new place gets a
/// `-1` sentinel row meaning "no data yet"; user reports are always >= 0.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "headcount")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub place_id: i32,

    pub headcount: i32,

    /// Formatted `%Y-%m-%d %H:%M:%S` UTC timestamp.
    pub created_time: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::place::Entity",
        from = "Column::PlaceId",
        to = "super::place::Column::Id"
    )]
    Place,
}

impl Related<super::place::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Place.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
