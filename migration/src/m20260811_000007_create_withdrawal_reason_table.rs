use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WithdrawalReason::Table)
                    .if_not_exists()
                    .col(pk_auto(WithdrawalReason::Id))
                    .col(string(WithdrawalReason::WithdrawalReason))
                    .col(string(WithdrawalReason::Feedback))
                    .col(string(WithdrawalReason::CreatedTime))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WithdrawalReason::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WithdrawalReason {
    Table,
    Id,
    WithdrawalReason,
    Feedback,
    CreatedTime,
}
