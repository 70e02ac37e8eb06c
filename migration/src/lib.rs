pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_category_table;
mod m20260105_000002_create_tag_table;
mod m20260105_000003_create_article_table;
mod m20260105_000004_create_article_tag_table;
mod m20260105_000005_create_comment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_category_table::Migration),
            Box::new(m20260105_000002_create_tag_table::Migration),
            Box::new(m20260105_000003_create_article_table::Migration),
            Box::new(m20260105_000004_create_article_tag_table::Migration),
            Box::new(m20260105_000005_create_comment_table::Migration),
        ]
    }
}
