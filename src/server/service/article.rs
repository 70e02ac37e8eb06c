use sea_orm::{DatabaseConnection, TransactionTrait};
use tokio::task::JoinHandle;

use crate::server::{
    data::{
        article::ArticleRepository, article_tag::ArticleTagRepository,
        category::CategoryRepository, comment::CommentRepository, tag::TagRepository,
    },
    error::{domain::DomainError, AppError},
    model::{
        article::{
            Article, ArticleFields, ArticleFilter, CreateArticleParams, UpdateArticleParams,
        },
        pagination::{PageRequest, Paginated},
    },
    service::tag_association::TagAssociationService,
};

/// Number of content characters copied into a derived summary.
pub const SUMMARY_LENGTH: usize = 100;

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an article and attaches its tags in one transaction.
    ///
    /// Title and content must be non-empty and a referenced category must exist. An empty
    /// summary is derived from the content. If any tag fails to resolve, the article insert
    /// is rolled back as well.
    ///
    /// # Returns
    /// - `Ok(Article)` - Created article with category and tags loaded
    /// - `Err(AppError::DomainErr(_))` - Validation, `CategoryNotFound` or `PartialTagsNotFound`
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateArticleParams) -> Result<Article, AppError> {
        let CreateArticleParams { mut fields, tag_ids } = params;

        validate_fields(&fields)?;
        self.ensure_category_exists(fields.category_id).await?;
        fields.summary = derive_summary(&fields.summary, &fields.content);

        let txn = self.db.begin().await?;

        let article = ArticleRepository::new(&txn).create(&fields).await?;
        if !tag_ids.is_empty() {
            TagAssociationService::new(&txn)
                .replace(article.id, &tag_ids)
                .await?;
        }

        txn.commit().await?;

        tracing::info!("Created article {} \"{}\"", article.id, article.title);

        self.get_loaded(article.id).await
    }

    /// Replaces an article's fields and its complete tag set in one transaction.
    ///
    /// The stored `created_at` and `views` are kept. An empty `tag_ids` clears all tags.
    ///
    /// # Returns
    /// - `Ok(Article)` - Updated article with category and tags loaded
    /// - `Err(AppError::DomainErr(ArticleNotFound))` - No article with this id
    /// - `Err(AppError::DomainErr(_))` - Validation, `CategoryNotFound` or `PartialTagsNotFound`
    pub async fn update(&self, params: UpdateArticleParams) -> Result<Article, AppError> {
        let UpdateArticleParams {
            id,
            fields,
            tag_ids,
        } = params;

        if ArticleRepository::new(self.db).find_by_id(id).await?.is_none() {
            return Err(DomainError::ArticleNotFound.into());
        }
        validate_fields(&fields)?;
        self.ensure_category_exists(fields.category_id).await?;

        let txn = self.db.begin().await?;

        ArticleRepository::new(&txn).update(id, &fields).await?;
        TagAssociationService::new(&txn)
            .replace(id, &tag_ids)
            .await?;

        txn.commit().await?;

        tracing::info!("Updated article {}", id);

        self.get_loaded(id).await
    }

    /// Gets an article with its category and tags and schedules a view increment.
    ///
    /// The increment runs detached and is not reflected in the returned article.
    pub async fn get_by_id(&self, id: i32) -> Result<Article, AppError> {
        let article = self.get_loaded(id).await?;

        let _ = spawn_view_increment(self.db.clone(), id);

        Ok(article)
    }

    /// Lists articles matching `filter`.
    ///
    /// Category and tag filters require the referenced row to exist. A keyword filter must
    /// contain at least one non-whitespace character.
    ///
    /// # Returns
    /// - `Ok(Paginated<Article>)` - Requested page and total count
    /// - `Err(AppError::DomainErr(_))` - `CategoryNotFound`, `TagNotFound` or an empty keyword
    pub async fn list(
        &self,
        filter: ArticleFilter,
        page: PageRequest,
    ) -> Result<Paginated<Article>, AppError> {
        let filter = match filter {
            ArticleFilter::Category(category_id) => {
                if !CategoryRepository::new(self.db).exists(category_id).await? {
                    return Err(DomainError::CategoryNotFound.into());
                }
                ArticleFilter::Category(category_id)
            }
            ArticleFilter::Tag(tag_id) => {
                if !TagRepository::new(self.db).exists(tag_id).await? {
                    return Err(DomainError::TagNotFound.into());
                }
                ArticleFilter::Tag(tag_id)
            }
            ArticleFilter::Keyword(keyword) => {
                let keyword = keyword.trim();
                if keyword.is_empty() {
                    return Err(DomainError::validation("search keyword must not be empty").into());
                }
                ArticleFilter::Keyword(keyword.to_string())
            }
            all => all,
        };

        let (articles, total) = ArticleRepository::new(self.db)
            .get_paginated(&filter, page)
            .await?;

        Ok(Paginated::new(
            articles.into_iter().map(Article::from_with_relations).collect(),
            total,
            page,
        ))
    }

    /// Deletes an article together with its tag associations and comments.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if ArticleRepository::new(self.db).find_by_id(id).await?.is_none() {
            return Err(DomainError::ArticleNotFound.into());
        }

        let txn = self.db.begin().await?;

        ArticleTagRepository::new(&txn).delete_by_article(id).await?;
        let comments = CommentRepository::new(&txn).delete_by_article(id).await?;
        ArticleRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted article {} and {} comment(s)", id, comments);

        Ok(())
    }

    async fn get_loaded(&self, id: i32) -> Result<Article, AppError> {
        ArticleRepository::new(self.db)
            .get_with_relations(id)
            .await?
            .map(Article::from_with_relations)
            .ok_or_else(|| DomainError::ArticleNotFound.into())
    }

    async fn ensure_category_exists(&self, category_id: Option<i32>) -> Result<(), AppError> {
        if let Some(category_id) = category_id {
            if !CategoryRepository::new(self.db).exists(category_id).await? {
                return Err(DomainError::CategoryNotFound.into());
            }
        }

        Ok(())
    }
}

/// Increments the view counter of `article_id` on a detached tokio task.
///
/// Failures are logged at `warn` and never reach the caller. Request handlers drop the
/// returned handle; tests await it.
pub fn spawn_view_increment(db: DatabaseConnection, article_id: i32) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = ArticleRepository::new(&db).increment_views(article_id).await {
            tracing::warn!("Failed to increment views of article {}: {}", article_id, e);
        }
    })
}

/// Returns `summary` unchanged unless it is empty and `content` is longer than
/// [`SUMMARY_LENGTH`] characters, in which case the first characters plus `"..."`.
pub fn derive_summary(summary: &str, content: &str) -> String {
    if !summary.is_empty() || content.chars().count() <= SUMMARY_LENGTH {
        return summary.to_string();
    }

    let mut derived: String = content.chars().take(SUMMARY_LENGTH).collect();
    derived.push_str("...");
    derived
}

fn validate_fields(fields: &ArticleFields) -> Result<(), DomainError> {
    if fields.title.trim().is_empty() {
        return Err(DomainError::validation("title must not be empty"));
    }
    if fields.content.trim().is_empty() {
        return Err(DomainError::validation("content must not be empty"));
    }

    Ok(())
}
