use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{category::CategoryDto, tag::TagDto};

/// Publication state of an article as seen by API clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatusDto {
    #[default]
    Draft,
    Published,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub cover_img: String,
    pub category_id: Option<i32>,
    pub category: Option<CategoryDto>,
    pub tags: Vec<TagDto>,
    pub views: i32,
    pub status: ArticleStatusDto,
    pub is_top: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating an article.
///
/// An empty `summary` is derived from the content. `status` defaults to draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateArticleDto {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub cover_img: String,
    #[serde(default)]
    pub category_id: Option<i32>,
    #[serde(default)]
    pub tag_ids: Vec<i32>,
    #[serde(default)]
    pub status: ArticleStatusDto,
    #[serde(default)]
    pub is_top: bool,
}

/// Request body for replacing an article.
///
/// `tag_ids` is the complete new tag set; an empty list removes every tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateArticleDto {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub cover_img: String,
    #[serde(default)]
    pub category_id: Option<i32>,
    #[serde(default)]
    pub tag_ids: Vec<i32>,
    #[serde(default)]
    pub status: ArticleStatusDto,
    #[serde(default)]
    pub is_top: bool,
}

/// Query string accepted by the public article listing.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListQuery {
    /// Page number, starting at 1
    pub page: Option<i64>,
    /// Items per page (1-100, default 10)
    pub page_size: Option<i64>,
    /// Status filter, only applied to the unfiltered listing
    pub status: Option<ArticleStatusDto>,
    /// Only published articles in this category
    pub category_id: Option<i32>,
    /// Only published articles carrying this tag
    pub tag_id: Option<i32>,
    /// Case-insensitive search over title and content
    pub keyword: Option<String>,
}
