use chrono::{DateTime, Utc};
use entity::comment::CommentStatus;

use crate::model::comment::{
    AdminCommentDto, ArticleRefDto, CommentDto, CommentStatusDto, CommentThreadDto,
    CreateCommentDto,
};

impl From<CommentStatusDto> for CommentStatus {
    fn from(dto: CommentStatusDto) -> Self {
        match dto {
            CommentStatusDto::Pending => CommentStatus::Pending,
            CommentStatusDto::Approved => CommentStatus::Approved,
            CommentStatusDto::Rejected => CommentStatus::Rejected,
        }
    }
}

impl From<CommentStatus> for CommentStatusDto {
    fn from(status: CommentStatus) -> Self {
        match status {
            CommentStatus::Pending => CommentStatusDto::Pending,
            CommentStatus::Approved => CommentStatusDto::Approved,
            CommentStatus::Rejected => CommentStatusDto::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub article_id: i32,
    pub parent_id: Option<i32>,
    pub nickname: String,
    pub email: Option<String>,
    pub content: String,
    pub status: CommentStatus,
    pub ip: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            article_id: entity.article_id,
            parent_id: entity.parent_id,
            nickname: entity.nickname,
            email: entity.email,
            content: entity.content,
            status: entity.status,
            ip: entity.ip,
            created_at: entity.created_at,
        }
    }

    /// Converts to the public representation, dropping email and IP.
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            article_id: self.article_id,
            parent_id: self.parent_id,
            nickname: self.nickname,
            content: self.content,
            status: self.status.into(),
            created_at: self.created_at,
        }
    }
}

/// A top-level comment and its direct replies.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentThread {
    pub comment: Comment,
    pub replies: Vec<Comment>,
}

impl CommentThread {
    pub fn into_dto(self) -> CommentThreadDto {
        CommentThreadDto {
            id: self.comment.id,
            article_id: self.comment.article_id,
            nickname: self.comment.nickname,
            content: self.comment.content,
            created_at: self.comment.created_at,
            replies: self.replies.into_iter().map(Comment::into_dto).collect(),
        }
    }
}

/// Id and title of the article a moderated comment belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleRef {
    pub id: i32,
    pub title: String,
}

/// Comment as listed in the moderation queue.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminComment {
    pub comment: Comment,
    pub article: Option<ArticleRef>,
}

impl AdminComment {
    pub fn from_entity(comment: entity::comment::Model, article: Option<ArticleRef>) -> Self {
        Self {
            comment: Comment::from_entity(comment),
            article,
        }
    }

    pub fn into_dto(self) -> AdminCommentDto {
        let comment = self.comment;
        AdminCommentDto {
            id: comment.id,
            article_id: comment.article_id,
            parent_id: comment.parent_id,
            nickname: comment.nickname,
            email: comment.email,
            content: comment.content,
            status: comment.status.into(),
            ip: comment.ip,
            created_at: comment.created_at,
            article: self.article.map(|a| ArticleRefDto {
                id: a.id,
                title: a.title,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCommentParams {
    pub article_id: i32,
    pub parent_id: Option<i32>,
    pub nickname: String,
    pub email: Option<String>,
    pub content: String,
    /// Submitter address as seen by the server; stored, never validated.
    pub ip: String,
}

impl CreateCommentParams {
    pub fn from_dto(dto: CreateCommentDto, ip: String) -> Self {
        Self {
            article_id: dto.article_id,
            parent_id: dto.parent_id,
            nickname: dto.nickname,
            email: dto.email,
            content: dto.content,
            ip,
        }
    }
}
