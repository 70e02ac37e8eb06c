use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Counters shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatsDto {
    pub article_count: u64,
    pub published_count: u64,
    pub category_count: u64,
    pub tag_count: u64,
    pub comment_count: u64,
    pub pending_comment_count: u64,
    pub total_views: i64,
}
