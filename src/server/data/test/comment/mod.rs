use chrono::{Duration, Utc};
use entity::comment::CommentStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::comment::CommentFactory};

use crate::server::{
    data::comment::CommentRepository,
    model::{comment::CreateCommentParams, pagination::PageRequest},
};

mod delete;
mod get_approved;
mod get_paginated;
