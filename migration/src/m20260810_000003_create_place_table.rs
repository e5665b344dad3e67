use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000002_create_marker_table::Marker;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Place::Table)
                    .if_not_exists()
                    .col(pk_auto(Place::Id))
                    .col(string(Place::PlaceName))
                    .col(string(Place::Address))
                    .col(string(Place::DetailAddress))
                    .col(integer(Place::MarkerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_place_marker")
                            .from(Place::Table, Place::MarkerId)
                            .to(Marker::Table, Marker::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Place::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Place {
    Table,
    Id,
    PlaceName,
    Address,
    DetailAddress,
    MarkerId,
}
