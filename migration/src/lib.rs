pub use sea_orm_migration::prelude::*;

mod m20260805_101500_create_table_authors;
mod m20260805_101930_create_table_topics;
mod m20260805_102210_create_table_posts;
mod m20260805_102450_create_table_post_topics;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260805_101500_create_table_authors::Migration),
            Box::new(m20260805_101930_create_table_topics::Migration),
            Box::new(m20260805_102210_create_table_posts::Migration),
            Box::new(m20260805_102450_create_table_post_topics::Migration),
        ]
    }
}
