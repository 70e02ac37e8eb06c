//! Article factory for creating test article entities.
//!
//! This module provides factory methods for creating article entities with
//! sensible defaults, plus a helper to attach tags through the association table.

use crate::fixture;
use chrono::{DateTime, Utc};
use entity::article::ArticleStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

/// Factory for creating test articles with customizable fields.
///
/// Defaults come from `fixture::article::entity()`: a published article without
/// category, with zero views, created now.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::article::ArticleFactory;
///
/// let draft = ArticleFactory::new(&db)
///     .title("Draft")
///     .status(ArticleStatus::Draft)
///     .build()
///     .await?;
/// ```
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::article::Model,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let entity = fixture::article::entity_builder()
            .created_at(Utc::now())
            .build();

        Self { db, entity }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.entity.content = content.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.entity.summary = summary.into();
        self
    }

    pub fn category_id(mut self, category_id: Option<i32>) -> Self {
        self.entity.category_id = category_id;
        self
    }

    pub fn views(mut self, views: i32) -> Self {
        self.entity.views = views;
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.entity.status = status;
        self
    }

    pub fn is_top(mut self, is_top: bool) -> Self {
        self.entity.is_top = is_top;
        self
    }

    /// Overrides the creation (and update) timestamp, useful for ordering tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.entity.created_at = created_at;
        self.entity.updated_at = created_at;
        self
    }

    /// Builds and inserts the article entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::article::Model)` - Created article entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown category)
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        entity::article::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.entity.title),
            content: ActiveValue::Set(self.entity.content),
            summary: ActiveValue::Set(self.entity.summary),
            cover_img: ActiveValue::Set(self.entity.cover_img),
            category_id: ActiveValue::Set(self.entity.category_id),
            views: ActiveValue::Set(self.entity.views),
            status: ActiveValue::Set(self.entity.status),
            is_top: ActiveValue::Set(self.entity.is_top),
            created_at: ActiveValue::Set(self.entity.created_at),
            updated_at: ActiveValue::Set(self.entity.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published article with default values.
pub async fn create_article(db: &DatabaseConnection) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db).build().await
}

/// Inserts association rows linking `article_id` to every id in `tag_ids`.
///
/// # Returns
/// - `Ok(())` - All associations inserted
/// - `Err(DbErr)` - Database error (e.g. unknown tag or duplicate association)
pub async fn attach_tags(
    db: &DatabaseConnection,
    article_id: i32,
    tag_ids: &[i32],
) -> Result<(), DbErr> {
    if tag_ids.is_empty() {
        return Ok(());
    }

    entity::prelude::ArticleTag::insert_many(tag_ids.iter().map(|tag_id| {
        entity::article_tag::ActiveModel {
            article_id: ActiveValue::Set(article_id),
            tag_id: ActiveValue::Set(*tag_id),
        }
    }))
    .exec_without_returning(db)
    .await?;

    Ok(())
}

/// Tag ids currently attached to an article, ascending.
pub async fn tag_ids_for_article(
    db: &DatabaseConnection,
    article_id: i32,
) -> Result<Vec<i32>, DbErr> {
    entity::prelude::ArticleTag::find()
        .select_only()
        .column(entity::article_tag::Column::TagId)
        .filter(entity::article_tag::Column::ArticleId.eq(article_id))
        .order_by_asc(entity::article_tag::Column::TagId)
        .into_tuple::<i32>()
        .all(db)
        .await
}
