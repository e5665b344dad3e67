use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Marker::Table)
                    .if_not_exists()
                    .col(pk_auto(Marker::Id))
                    .col(string(Marker::Latitude))
                    .col(string(Marker::Longitude))
                    .to_owned(),
            )
            .await?;

        // One marker per exact coordinate pair.
        manager
            .create_index(
                Index::create()
                    .name("idx_marker_coordinates")
                    .table(Marker::Table)
                    .col(Marker::Latitude)
                    .col(Marker::Longitude)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Marker::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Marker {
    Table,
    Id,
    Latitude,
    Longitude,
}
