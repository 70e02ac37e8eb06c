//! Business rule violations raised by the service layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{model::api::MessageDto, server::error::AppError};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    /// Input failed a required-field or consistency check.
    #[error("{0}")]
    Validation(String),

    #[error("article does not exist")]
    ArticleNotFound,

    #[error("category does not exist")]
    CategoryNotFound,

    #[error("tag does not exist")]
    TagNotFound,

    #[error("comment does not exist")]
    CommentNotFound,

    #[error("parent comment does not exist")]
    ParentCommentNotFound,

    /// At least one requested tag id did not resolve to a stored tag.
    #[error("some tags do not exist")]
    PartialTagsNotFound,

    /// Replies may only target top-level comments.
    #[error("third-level comments are not supported")]
    ThirdLevelComment,

    /// A category cannot be removed while articles still reference it.
    #[error("category still has articles")]
    CategoryInUse,

    /// Unique name constraint violated; carries the kind of resource.
    #[error("{0} name already exists")]
    DuplicateName(&'static str),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::PartialTagsNotFound
            | Self::ThirdLevelComment
            | Self::CategoryInUse => StatusCode::BAD_REQUEST,
            Self::ArticleNotFound
            | Self::CategoryNotFound
            | Self::TagNotFound
            | Self::CommentNotFound
            | Self::ParentCommentNotFound => StatusCode::NOT_FOUND,
            Self::DuplicateName(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(MessageDto::new(status.as_u16(), self.to_string()))).into_response()
    }
}

/// Maps a unique constraint violation to `DuplicateName(kind)`; any other error
/// passes through unchanged.
pub fn map_unique_violation(kind: &'static str) -> impl Fn(DbErr) -> AppError {
    move |err| match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::DuplicateName(kind).into(),
        _ => err.into(),
    }
}
