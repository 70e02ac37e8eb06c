use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

/// Rows of the article/tag association table.
pub struct ArticleTagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArticleTagRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one association row per tag id. Does nothing for an empty slice.
    pub async fn insert_many(&self, article_id: i32, tag_ids: &[i32]) -> Result<(), DbErr> {
        if tag_ids.is_empty() {
            return Ok(());
        }

        entity::prelude::ArticleTag::insert_many(tag_ids.iter().map(|tag_id| {
            entity::article_tag::ActiveModel {
                article_id: ActiveValue::Set(article_id),
                tag_id: ActiveValue::Set(*tag_id),
            }
        }))
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn delete_by_article(&self, article_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ArticleTag::delete_many()
            .filter(entity::article_tag::Column::ArticleId.eq(article_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_tag(&self, tag_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ArticleTag::delete_many()
            .filter(entity::article_tag::Column::TagId.eq(tag_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn article_ids_for_tag(&self, tag_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::ArticleTag::find()
            .select_only()
            .column(entity::article_tag::Column::ArticleId)
            .filter(entity::article_tag::Column::TagId.eq(tag_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Number of articles per tag, for tags with at least one article.
    pub async fn count_articles_by_tag(&self) -> Result<Vec<(i32, i64)>, DbErr> {
        entity::prelude::ArticleTag::find()
            .select_only()
            .column(entity::article_tag::Column::TagId)
            .column_as(Expr::cust("COUNT(*)"), "article_count")
            .group_by(entity::article_tag::Column::TagId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await
    }
}
