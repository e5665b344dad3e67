use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000003_create_place_table::Place;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Headcount::Table)
                    .if_not_exists()
                    .col(pk_auto(Headcount::Id))
                    .col(integer(Headcount::PlaceId))
                    .col(integer(Headcount::Headcount))
                    .col(string(Headcount::CreatedTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_headcount_place")
                            .from(Headcount::Table, Headcount::PlaceId)
                            .to(Place::Table, Place::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Headcount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Headcount {
    Table,
    Id,
    PlaceId,
    Headcount,
    CreatedTime,
}
