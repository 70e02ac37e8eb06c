//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and supply default
//! values to the factories. Unlike factories, fixtures do NOT insert data into
//! the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let article = fixture::article::entity();
//!
//! let published = fixture::article::entity_builder()
//!     .title("Hello")
//!     .status(ArticleStatus::Published)
//!     .build();
//! ```

pub mod article;
pub mod category;
pub mod comment;
pub mod tag;

pub use article::{entity as article_entity, entity_builder as article_entity_builder};
pub use category::{entity as category_entity, entity_builder as category_entity_builder};
pub use comment::{entity as comment_entity, entity_builder as comment_entity_builder};
pub use tag::{entity as tag_entity, entity_builder as tag_entity_builder};

use chrono::{DateTime, Utc};

/// Fixed timestamp shared by all fixtures so that in-memory models compare equal.
pub fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(1_767_225_600, 0).unwrap_or_default()
}
