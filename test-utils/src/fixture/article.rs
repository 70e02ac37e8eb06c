//! Article fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating article entity models without database insertion.
//! These are useful for unit testing conversions and as factory defaults.

use chrono::{DateTime, Utc};
use entity::article::{self, ArticleStatus};

use super::fixed_timestamp;

/// Default test article title.
pub const DEFAULT_TITLE: &str = "Test Article";

/// Default test article content.
pub const DEFAULT_CONTENT: &str = "Test article content";

/// Default status for fixture articles.
pub const DEFAULT_STATUS: ArticleStatus = ArticleStatus::Published;

/// Creates an article entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - title: `"Test Article"`
/// - content: `"Test article content"`
/// - summary / cover_img: empty
/// - category_id: `None`
/// - views: `0`
/// - status: `Published`
/// - is_top: `false`
///
/// # Example
///
/// ```rust,ignore
/// let article = fixture::article::entity();
/// assert_eq!(article.views, 0);
/// ```
pub fn entity() -> article::Model {
    entity_builder().build()
}

/// Creates an article entity builder for customization.
pub fn entity_builder() -> ArticleEntityBuilder {
    ArticleEntityBuilder::default()
}

/// Builder for creating customized article entity models.
///
/// All fields have sensible defaults that can be overridden.
pub struct ArticleEntityBuilder {
    id: i32,
    title: String,
    content: String,
    summary: String,
    cover_img: String,
    category_id: Option<i32>,
    views: i32,
    status: ArticleStatus,
    is_top: bool,
    created_at: DateTime<Utc>,
}

impl Default for ArticleEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            title: DEFAULT_TITLE.to_string(),
            content: DEFAULT_CONTENT.to_string(),
            summary: String::new(),
            cover_img: String::new(),
            category_id: None,
            views: 0,
            status: DEFAULT_STATUS,
            is_top: false,
            created_at: fixed_timestamp(),
        }
    }
}

impl ArticleEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn cover_img(mut self, cover_img: impl Into<String>) -> Self {
        self.cover_img = cover_img.into();
        self
    }

    pub fn category_id(mut self, category_id: Option<i32>) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn views(mut self, views: i32) -> Self {
        self.views = views;
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_top(mut self, is_top: bool) -> Self {
        self.is_top = is_top;
        self
    }

    /// Sets both creation and update timestamps.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and returns the article entity model.
    pub fn build(self) -> article::Model {
        article::Model {
            id: self.id,
            title: self.title,
            content: self.content,
            summary: self.summary,
            cover_img: self.cover_img,
            category_id: self.category_id,
            views: self.views,
            status: self.status,
            is_top: self.is_top,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
