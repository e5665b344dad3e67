use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookmark::Table)
                    .if_not_exists()
                    .col(pk_auto(Bookmark::Id))
                    .col(integer(Bookmark::UserId))
                    .col(string(Bookmark::BookmarkName))
                    .col(integer(Bookmark::IconColor))
                    .col(json(Bookmark::PlaceIds))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookmark_user")
                            .from(Bookmark::Table, Bookmark::UserId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookmark::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bookmark {
    Table,
    Id,
    UserId,
    BookmarkName,
    IconColor,
    PlaceIds,
}
