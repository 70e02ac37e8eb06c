//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique name generation and convenience methods for creating
//! entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Category and tag names are unique at the storage layer, so factories use this
/// value to derive names that never collide.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a published article in a fresh category with `tag_count` fresh tags attached.
///
/// # Arguments
/// - `db` - Database connection
/// - `tag_count` - Number of tags to create and associate with the article
///
/// # Returns
/// - `Ok((category, tags, article))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_article_with_dependencies(
    db: &DatabaseConnection,
    tag_count: usize,
) -> Result<
    (
        entity::category::Model,
        Vec<entity::tag::Model>,
        entity::article::Model,
    ),
    DbErr,
> {
    let category = crate::factory::category::create_category(db).await?;

    let mut tags = Vec::with_capacity(tag_count);
    for _ in 0..tag_count {
        tags.push(crate::factory::tag::create_tag(db).await?);
    }

    let article = crate::factory::article::ArticleFactory::new(db)
        .category_id(Some(category.id))
        .build()
        .await?;

    let tag_ids: Vec<i32> = tags.iter().map(|t| t.id).collect();
    crate::factory::article::attach_tags(db, article.id, &tag_ids).await?;

    Ok((category, tags, article))
}

/// Creates an article with one approved top-level comment and one approved reply to it.
///
/// # Returns
/// - `Ok((article, parent, reply))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_comment_thread(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::article::Model,
        entity::comment::Model,
        entity::comment::Model,
    ),
    DbErr,
> {
    use entity::comment::CommentStatus;

    let article = crate::factory::article::create_article(db).await?;
    let parent = crate::factory::comment::CommentFactory::new(db, article.id)
        .status(CommentStatus::Approved)
        .build()
        .await?;
    let reply = crate::factory::comment::CommentFactory::new(db, article.id)
        .parent_id(Some(parent.id))
        .status(CommentStatus::Approved)
        .build()
        .await?;

    Ok((article, parent, reply))
}
