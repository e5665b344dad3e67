pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_user_table;
mod m20260810_000002_create_marker_table;
mod m20260810_000003_create_place_table;
mod m20260810_000004_create_headcount_table;
mod m20260811_000005_create_bookmark_table;
mod m20260811_000006_create_search_history_table;
mod m20260811_000007_create_withdrawal_reason_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_user_table::Migration),
            Box::new(m20260810_000002_create_marker_table::Migration),
            Box::new(m20260810_000003_create_place_table::Migration),
            Box::new(m20260810_000004_create_headcount_table::Migration),
            Box::new(m20260811_000005_create_bookmark_table::Migration),
            Box::new(m20260811_000006_create_search_history_table::Migration),
            Box::new(m20260811_000007_create_withdrawal_reason_table::Migration),
        ]
    }
}
