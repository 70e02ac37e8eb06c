//! Replacement of an article's tag set.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{article_tag::ArticleTagRepository, tag::TagRepository},
    error::{domain::DomainError, AppError},
};

/// Synchronizes `article_tag` rows for one article.
///
/// Meant to run on the caller's `DatabaseTransaction` so that the article write and the
/// association rewrite commit or roll back together.
pub struct TagAssociationService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagAssociationService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Replaces every tag of `article_id` with `tag_ids`.
    ///
    /// Duplicate ids are collapsed first. If any remaining id has no stored tag, nothing is
    /// written and `PartialTagsNotFound` is returned. Otherwise existing associations are
    /// cleared and one row per tag is inserted.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - The de-duplicated tag ids now attached to the article
    /// - `Err(AppError::DomainErr(PartialTagsNotFound))` - At least one tag does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn replace(&self, article_id: i32, tag_ids: &[i32]) -> Result<Vec<i32>, AppError> {
        let tag_ids = dedup_ids(tag_ids);

        let resolved = TagRepository::new(self.db).find_by_ids(&tag_ids).await?;
        if resolved.len() < tag_ids.len() {
            return Err(DomainError::PartialTagsNotFound.into());
        }

        let links = ArticleTagRepository::new(self.db);
        links.delete_by_article(article_id).await?;
        links.insert_many(article_id, &tag_ids).await?;

        Ok(tag_ids)
    }
}

/// Removes repeated ids, keeping the first occurrence order.
pub fn dedup_ids(ids: &[i32]) -> Vec<i32> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
