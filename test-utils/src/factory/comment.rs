//! Comment factory for creating test comment entities.

use crate::fixture;
use chrono::{DateTime, Utc};
use entity::comment::CommentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
///
/// Defaults come from `fixture::comment::entity()`: a pending top-level comment
/// created now.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::comment::Model,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory for the given article.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `article_id` - Article the comment belongs to
    pub fn new(db: &'a DatabaseConnection, article_id: i32) -> Self {
        let entity = fixture::comment::entity_builder()
            .article_id(article_id)
            .created_at(Utc::now())
            .build();

        Self { db, entity }
    }

    pub fn parent_id(mut self, parent_id: Option<i32>) -> Self {
        self.entity.parent_id = parent_id;
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.entity.nickname = nickname.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.entity.content = content.into();
        self
    }

    pub fn status(mut self, status: CommentStatus) -> Self {
        self.entity.status = status;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.entity.created_at = created_at;
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            id: ActiveValue::NotSet,
            article_id: ActiveValue::Set(self.entity.article_id),
            parent_id: ActiveValue::Set(self.entity.parent_id),
            nickname: ActiveValue::Set(self.entity.nickname),
            email: ActiveValue::Set(self.entity.email),
            content: ActiveValue::Set(self.entity.content),
            status: ActiveValue::Set(self.entity.status),
            ip: ActiveValue::Set(self.entity.ip),
            created_at: ActiveValue::Set(self.entity.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending top-level comment on the given article.
pub async fn create_comment(
    db: &DatabaseConnection,
    article_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, article_id).build().await
}
