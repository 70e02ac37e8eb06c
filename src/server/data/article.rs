use std::collections::HashMap;

use chrono::Utc;
use entity::article::ArticleStatus;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::article_tag::ArticleTagRepository,
    model::{
        article::{ArticleFields, ArticleFilter, ArticleWithRelations},
        pagination::PageRequest,
    },
};

pub struct ArticleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArticleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new article with zero views and both timestamps set to now.
    pub async fn create(&self, fields: &ArticleFields) -> Result<entity::article::Model, DbErr> {
        let now = Utc::now();

        entity::article::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(fields.title.clone()),
            content: ActiveValue::Set(fields.content.clone()),
            summary: ActiveValue::Set(fields.summary.clone()),
            cover_img: ActiveValue::Set(fields.cover_img.clone()),
            category_id: ActiveValue::Set(fields.category_id),
            views: ActiveValue::Set(0),
            status: ActiveValue::Set(fields.status),
            is_top: ActiveValue::Set(fields.is_top),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    /// Replaces every writable column of an article and bumps `updated_at`.
    ///
    /// `views` and `created_at` are left out of the statement so the stored values survive.
    pub async fn update(
        &self,
        id: i32,
        fields: &ArticleFields,
    ) -> Result<entity::article::Model, DbErr> {
        entity::article::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: ActiveValue::Set(fields.title.clone()),
            content: ActiveValue::Set(fields.content.clone()),
            summary: ActiveValue::Set(fields.summary.clone()),
            cover_img: ActiveValue::Set(fields.cover_img.clone()),
            category_id: ActiveValue::Set(fields.category_id),
            views: ActiveValue::NotSet,
            status: ActiveValue::Set(fields.status),
            is_top: ActiveValue::Set(fields.is_top),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::article::Model>, DbErr> {
        entity::prelude::Article::find_by_id(id).one(self.db).await
    }

    /// Gets an article by ID with its category and tags
    pub async fn get_with_relations(&self, id: i32) -> Result<Option<ArticleWithRelations>, DbErr> {
        let Some(article) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(self.load_relations(vec![article]).await?.pop())
    }

    /// Gets one page of articles matching `filter`, newest first, with relations loaded.
    ///
    /// Ordering is `created_at` descending with ties broken by `id` descending.
    ///
    /// # Returns
    /// - `Ok((articles, total))` - The requested page and the total number of matching rows
    pub async fn get_paginated(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> Result<(Vec<ArticleWithRelations>, u64), DbErr> {
        use entity::article::Column;

        let published = Column::Status.eq(ArticleStatus::Published);
        let query = match filter {
            ArticleFilter::All(status) => {
                let query = entity::prelude::Article::find();
                match status {
                    Some(status) => query.filter(Column::Status.eq(*status)),
                    None => query,
                }
            }
            ArticleFilter::Category(category_id) => entity::prelude::Article::find()
                .filter(published)
                .filter(Column::CategoryId.eq(*category_id)),
            ArticleFilter::Tag(tag_id) => {
                let article_ids = ArticleTagRepository::new(self.db)
                    .article_ids_for_tag(*tag_id)
                    .await?;

                entity::prelude::Article::find()
                    .filter(published)
                    .filter(Column::Id.is_in(article_ids))
            }
            ArticleFilter::Keyword(keyword) => entity::prelude::Article::find()
                .filter(published)
                .filter(
                    Condition::any()
                        .add(
                            Expr::expr(Func::lower(Expr::col(Column::Title)))
                                .like(contains_pattern(keyword)),
                        )
                        .add(
                            Expr::expr(Func::lower(Expr::col(Column::Content)))
                                .like(contains_pattern(keyword)),
                        ),
                ),
        };

        let paginator = query
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .paginate(self.db, page.page_size());

        let total = paginator.num_items().await?;
        let articles = if page.is_past_end(total) {
            Vec::new()
        } else {
            paginator.fetch_page(page.index()).await?
        };

        Ok((self.load_relations(articles).await?, total))
    }

    /// Adds one to the view counter in a single UPDATE statement.
    pub async fn increment_views(&self, id: i32) -> Result<(), DbErr> {
        use entity::article::Column;

        entity::prelude::Article::update_many()
            .col_expr(Column::Views, Expr::col(Column::Views).add(1))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes the article row only; associations and comments are removed by the caller.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Article::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts articles referencing a category, regardless of status.
    pub async fn count_by_category(&self, category_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Article::find()
            .filter(entity::article::Column::CategoryId.eq(category_id))
            .count(self.db)
            .await
    }

    /// Loads categories and tags for a batch of articles with one query per relation.
    async fn load_relations(
        &self,
        articles: Vec<entity::article::Model>,
    ) -> Result<Vec<ArticleWithRelations>, DbErr> {
        if articles.is_empty() {
            return Ok(Vec::new());
        }

        let mut category_ids: Vec<i32> = articles.iter().filter_map(|a| a.category_id).collect();
        category_ids.sort_unstable();
        category_ids.dedup();

        let categories: HashMap<i32, entity::category::Model> = if category_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Category::find()
                .filter(entity::category::Column::Id.is_in(category_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        };

        let article_ids: Vec<i32> = articles.iter().map(|a| a.id).collect();
        let links = entity::prelude::ArticleTag::find()
            .filter(entity::article_tag::Column::ArticleId.is_in(article_ids))
            .all(self.db)
            .await?;

        let mut tag_ids: Vec<i32> = links.iter().map(|l| l.tag_id).collect();
        tag_ids.sort_unstable();
        tag_ids.dedup();

        let tags: HashMap<i32, entity::tag::Model> = if tag_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Tag::find()
                .filter(entity::tag::Column::Id.is_in(tag_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|t| (t.id, t))
                .collect()
        };

        let mut tags_by_article: HashMap<i32, Vec<entity::tag::Model>> = HashMap::new();
        for link in links {
            if let Some(tag) = tags.get(&link.tag_id) {
                tags_by_article
                    .entry(link.article_id)
                    .or_default()
                    .push(tag.clone());
            }
        }

        Ok(articles
            .into_iter()
            .map(|article| {
                let category = article
                    .category_id
                    .and_then(|id| categories.get(&id).cloned());
                let mut tags = tags_by_article.remove(&article.id).unwrap_or_default();
                tags.sort_by_key(|t| t.id);

                ArticleWithRelations {
                    article,
                    category,
                    tags,
                }
            })
            .collect())
    }
}

/// Builds a `LIKE` pattern matching `keyword` as a literal substring of a lowercased column.
///
/// `%`, `_` and `\` in the keyword are escaped so they only match themselves. Only ASCII
/// letters are folded, the same as SQLite's built-in `LOWER`.
fn contains_pattern(keyword: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch.to_ascii_lowercase());
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}

