use entity::{article::ArticleStatus, comment::CommentStatus};
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QuerySelect,
};

use crate::server::model::stats::Stats;

pub struct StatsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StatsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Collects every dashboard counter.
    pub async fn collect(&self) -> Result<Stats, DbErr> {
        Ok(Stats {
            article_count: entity::prelude::Article::find().count(self.db).await?,
            published_count: entity::prelude::Article::find()
                .filter(entity::article::Column::Status.eq(ArticleStatus::Published))
                .count(self.db)
                .await?,
            category_count: entity::prelude::Category::find().count(self.db).await?,
            tag_count: entity::prelude::Tag::find().count(self.db).await?,
            comment_count: entity::prelude::Comment::find().count(self.db).await?,
            pending_comment_count: entity::prelude::Comment::find()
                .filter(entity::comment::Column::Status.eq(CommentStatus::Pending))
                .count(self.db)
                .await?,
            total_views: self.total_views().await?,
        })
    }

    /// Sum of all article view counters, 0 when there are no articles.
    pub async fn total_views(&self) -> Result<i64, DbErr> {
        let total = entity::prelude::Article::find()
            .select_only()
            .column_as(Expr::cust("COALESCE(SUM(views), 0)"), "total_views")
            .into_tuple::<i64>()
            .one(self.db)
            .await?;

        Ok(total.unwrap_or(0))
    }
}
