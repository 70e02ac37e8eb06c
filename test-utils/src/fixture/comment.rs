//! Comment fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::comment::{self, CommentStatus};

use super::fixed_timestamp;

/// Default commenter nickname.
pub const DEFAULT_NICKNAME: &str = "Reader";

/// Default comment body.
pub const DEFAULT_CONTENT: &str = "Nice post!";

/// Default submitter IP.
pub const DEFAULT_IP: &str = "127.0.0.1";

/// Creates a pending top-level comment on article `1`.
pub fn entity() -> comment::Model {
    entity_builder().build()
}

/// Creates a comment entity builder for customization.
pub fn entity_builder() -> CommentEntityBuilder {
    CommentEntityBuilder::default()
}

/// Builder for creating customized comment entity models.
pub struct CommentEntityBuilder {
    id: i32,
    article_id: i32,
    parent_id: Option<i32>,
    nickname: String,
    email: Option<String>,
    content: String,
    status: CommentStatus,
    ip: String,
    created_at: DateTime<Utc>,
}

impl Default for CommentEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            article_id: 1,
            parent_id: None,
            nickname: DEFAULT_NICKNAME.to_string(),
            email: None,
            content: DEFAULT_CONTENT.to_string(),
            status: CommentStatus::Pending,
            ip: DEFAULT_IP.to_string(),
            created_at: fixed_timestamp(),
        }
    }
}

impl CommentEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn article_id(mut self, article_id: i32) -> Self {
        self.article_id = article_id;
        self
    }

    pub fn parent_id(mut self, parent_id: Option<i32>) -> Self {
        self.parent_id = parent_id;
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn status(mut self, status: CommentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = ip.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> comment::Model {
        comment::Model {
            id: self.id,
            article_id: self.article_id,
            parent_id: self.parent_id,
            nickname: self.nickname,
            email: self.email,
            content: self.content,
            status: self.status,
            ip: self.ip,
            created_at: self.created_at,
        }
    }
}
