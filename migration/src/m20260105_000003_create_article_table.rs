use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Article::Table)
                    .if_not_exists()
                    .col(pk_auto(Article::Id))
                    .col(string_len(Article::Title, 200))
                    .col(text(Article::Content))
                    .col(string_len(Article::Summary, 500).default(""))
                    .col(string_len(Article::CoverImg, 500).default(""))
                    .col(integer_null(Article::CategoryId))
                    .col(integer(Article::Views).default(0))
                    .col(integer(Article::Status).default(0))
                    .col(boolean(Article::IsTop).default(false))
                    .col(timestamp_with_time_zone(Article::CreatedAt))
                    .col(timestamp_with_time_zone(Article::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_category_id")
                            .from(Article::Table, Article::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_article_status_created_at")
                    .table(Article::Table)
                    .col(Article::Status)
                    .col(Article::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Article::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Article {
    Table,
    Id,
    Title,
    Content,
    Summary,
    CoverImg,
    CategoryId,
    Views,
    Status,
    IsTop,
    CreatedAt,
    UpdatedAt,
}
