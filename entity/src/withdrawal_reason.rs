use sea_orm::entity::prelude::*;

/// Append-only log entry recorded when an account is deleted. Never removed
/// and never tied back to the departed user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "withdrawal_reason")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub withdrawal_reason: String,

    pub feedback: String,

    pub created_time: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
