use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{article_tag::ArticleTagRepository, tag::TagRepository},
    error::{
        domain::{map_unique_violation, DomainError},
        AppError,
    },
    model::tag::{CreateTagParams, Tag, TagWithCount, UpdateTagParams},
};

const RESOURCE: &str = "tag";

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTagParams) -> Result<Tag, AppError> {
        validate_name(&params.name)?;

        let tag = TagRepository::new(self.db)
            .create(params)
            .await
            .map_err(map_unique_violation(RESOURCE))?;

        tracing::info!("Created tag {} \"{}\"", tag.id, tag.name);

        Ok(Tag::from_entity(tag))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Tag, AppError> {
        TagRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(Tag::from_entity)
            .ok_or_else(|| DomainError::TagNotFound.into())
    }

    pub async fn get_all(&self) -> Result<Vec<Tag>, AppError> {
        let tags = TagRepository::new(self.db).get_all().await?;

        Ok(tags.into_iter().map(Tag::from_entity).collect())
    }

    /// All tags ordered by name with the number of articles carrying each.
    pub async fn get_all_with_counts(&self) -> Result<Vec<TagWithCount>, AppError> {
        let counts: HashMap<i32, i64> = ArticleTagRepository::new(self.db)
            .count_articles_by_tag()
            .await?
            .into_iter()
            .collect();

        Ok(TagRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|tag| TagWithCount {
                article_count: counts.get(&tag.id).copied().unwrap_or(0) as u64,
                tag: Tag::from_entity(tag),
            })
            .collect())
    }

    pub async fn update(&self, params: UpdateTagParams) -> Result<Tag, AppError> {
        validate_name(&params.name)?;

        let repo = TagRepository::new(self.db);
        if !repo.exists(params.id).await? {
            return Err(DomainError::TagNotFound.into());
        }

        let tag = repo
            .update(params)
            .await
            .map_err(map_unique_violation(RESOURCE))?;

        Ok(Tag::from_entity(tag))
    }

    /// Deletes a tag and detaches it from every article in one transaction.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TagRepository::new(self.db).exists(id).await? {
            return Err(DomainError::TagNotFound.into());
        }

        let txn = self.db.begin().await?;

        let detached = ArticleTagRepository::new(&txn).delete_by_tag(id).await?;
        TagRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted tag {} (detached from {} article(s))", id, detached);

        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name must not be empty"));
    }

    Ok(())
}
