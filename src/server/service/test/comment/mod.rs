use chrono::{Duration, Utc};
use entity::comment::CommentStatus;
use test_utils::{builder::TestBuilder, factory, factory::comment::CommentFactory};

use crate::server::{
    data::comment::CommentRepository,
    error::{domain::DomainError, AppError},
    model::{comment::CreateCommentParams, pagination::PageRequest},
    service::comment::CommentService,
};

mod moderate;

fn params(article_id: i32, parent_id: Option<i32>) -> CreateCommentParams {
    CreateCommentParams {
        article_id,
        parent_id,
        nickname: "Ferris".to_string(),
        email: None,
        content: "Thanks for writing this".to_string(),
        ip: "192.0.2.10".to_string(),
    }
}
