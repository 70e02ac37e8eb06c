use crate::model::stats::StatsDto;

/// Dashboard counters computed by `StatsRepository`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub article_count: u64,
    pub published_count: u64,
    pub category_count: u64,
    pub tag_count: u64,
    pub comment_count: u64,
    pub pending_comment_count: u64,
    pub total_views: i64,
}

impl Stats {
    pub fn into_dto(self) -> StatsDto {
        StatsDto {
            article_count: self.article_count,
            published_count: self.published_count,
            category_count: self.category_count,
            tag_count: self.tag_count,
            comment_count: self.comment_count,
            pending_comment_count: self.pending_comment_count,
            total_views: self.total_views,
        }
    }
}
