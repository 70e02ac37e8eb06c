use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Moderation state of a comment as seen by API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatusDto {
    Pending,
    Approved,
    Rejected,
}

/// Public view of a single comment. Email and IP are never exposed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub article_id: i32,
    pub parent_id: Option<i32>,
    pub nickname: String,
    pub content: String,
    pub status: CommentStatusDto,
    pub created_at: DateTime<Utc>,
}

/// Approved top-level comment with its approved replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentThreadDto {
    pub id: i32,
    pub article_id: i32,
    pub nickname: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub replies: Vec<CommentDto>,
}

/// Minimal reference to the article a comment belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleRefDto {
    pub id: i32,
    pub title: String,
}

/// Moderation view of a comment including submitter details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdminCommentDto {
    pub id: i32,
    pub article_id: i32,
    pub parent_id: Option<i32>,
    pub nickname: String,
    pub email: Option<String>,
    pub content: String,
    pub status: CommentStatusDto,
    pub ip: String,
    pub created_at: DateTime<Utc>,
    pub article: Option<ArticleRefDto>,
}

/// Request body for submitting a comment.
///
/// Any status sent by the client is ignored; new comments always await moderation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentDto {
    pub article_id: i32,
    #[serde(default)]
    pub parent_id: Option<i32>,
    pub nickname: String,
    #[serde(default)]
    pub email: Option<String>,
    pub content: String,
}

/// Query string accepted by the admin comment listing.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentListQuery {
    /// Page number, starting at 1
    pub page: Option<i64>,
    /// Items per page (1-100, default 10)
    pub page_size: Option<i64>,
    /// Only comments in this moderation state
    pub status: Option<CommentStatusDto>,
}
