use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "place")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub place_name: String,

    pub address: String,

    pub detail_address: String,

    /// Marker shared with every other place at the same coordinates.
    pub marker_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::marker::Entity",
        from = "Column::MarkerId",
        to = "super::marker::Column::Id"
    )]
    Marker,
    #[sea_orm(has_many = "super::headcount::Entity")]
    Headcount,
}

impl Related<super::marker::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Marker.def()
    }
}

impl Related<super::headcount::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Headcount.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
