use sea_orm::entity::prelude::*;

/// A deduplicated coordinate pin shared by every place registered at the
/// same latitude/longitude pair. Coordinates are exact-precision strings;
/// equality is string equality, never geospatial proximity.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "marker")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub latitude: String,

    pub longitude: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::place::Entity")]
    Place,
}

impl Related<super::place::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Place.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
