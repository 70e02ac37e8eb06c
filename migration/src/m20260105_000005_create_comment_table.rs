use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_article_table::Article;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(pk_auto(Comment::Id))
                    .col(integer(Comment::ArticleId))
                    .col(integer_null(Comment::ParentId))
                    .col(string_len(Comment::Nickname, 50))
                    .col(string_len_null(Comment::Email, 100))
                    .col(text(Comment::Content))
                    .col(integer(Comment::Status).default(0))
                    .col(string_len(Comment::Ip, 50).default(""))
                    .col(timestamp_with_time_zone(Comment::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_article_id")
                            .from(Comment::Table, Comment::ArticleId)
                            .to(Article::Table, Article::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comment_parent_id")
                    .table(Comment::Table)
                    .col(Comment::ParentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comment_article_status")
                    .table(Comment::Table)
                    .col(Comment::ArticleId)
                    .col(Comment::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comment {
    Table,
    Id,
    ArticleId,
    ParentId,
    Nickname,
    Email,
    Content,
    Status,
    Ip,
    CreatedAt,
}
