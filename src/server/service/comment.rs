use std::collections::HashMap;

use entity::comment::CommentStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{article::ArticleRepository, comment::CommentRepository},
    error::{domain::DomainError, AppError},
    model::{
        comment::{AdminComment, Comment, CommentThread, CreateCommentParams},
        pagination::{PageRequest, Paginated},
    },
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a comment or reply for moderation.
    ///
    /// Replies may only target a top-level comment of the same article. A `parent_id` of
    /// `Some(0)` means no parent and an empty email is stored as absent. The new comment is
    /// always pending.
    ///
    /// # Returns
    /// - `Ok(Comment)` - Stored pending comment
    /// - `Err(AppError::DomainErr(Validation))` - Missing required field or parent on another article
    /// - `Err(AppError::DomainErr(ArticleNotFound))` - Article does not exist
    /// - `Err(AppError::DomainErr(ParentCommentNotFound))` - Parent does not exist
    /// - `Err(AppError::DomainErr(ThirdLevelComment))` - Parent is itself a reply
    pub async fn create(&self, mut params: CreateCommentParams) -> Result<Comment, AppError> {
        if params.article_id == 0 {
            return Err(DomainError::validation("article_id is required").into());
        }
        if params.nickname.trim().is_empty() {
            return Err(DomainError::validation("nickname must not be empty").into());
        }
        if params.content.trim().is_empty() {
            return Err(DomainError::validation("content must not be empty").into());
        }

        params.parent_id = params.parent_id.filter(|id| *id != 0);
        params.email = params.email.filter(|email| !email.trim().is_empty());

        if ArticleRepository::new(self.db)
            .find_by_id(params.article_id)
            .await?
            .is_none()
        {
            return Err(DomainError::ArticleNotFound.into());
        }

        let repo = CommentRepository::new(self.db);

        if let Some(parent_id) = params.parent_id {
            let parent = repo
                .find_by_id(parent_id)
                .await?
                .ok_or(DomainError::ParentCommentNotFound)?;

            if parent.parent_id.is_some_and(|id| id != 0) {
                return Err(DomainError::ThirdLevelComment.into());
            }
            if parent.article_id != params.article_id {
                return Err(DomainError::validation(
                    "parent comment belongs to a different article",
                )
                .into());
            }
        }

        let comment = repo.create(params).await?;

        tracing::info!(
            "Comment {} submitted on article {}",
            comment.id,
            comment.article_id
        );

        Ok(Comment::from_entity(comment))
    }

    /// Approved top-level comments of an article, newest first, each with its approved
    /// replies in chronological order.
    pub async fn list_by_article(&self, article_id: i32) -> Result<Vec<CommentThread>, AppError> {
        if ArticleRepository::new(self.db)
            .find_by_id(article_id)
            .await?
            .is_none()
        {
            return Err(DomainError::ArticleNotFound.into());
        }

        let repo = CommentRepository::new(self.db);

        let top_level = repo.get_approved_top_level(article_id).await?;
        let parent_ids = top_level.iter().map(|c| c.id).collect();

        let mut replies: HashMap<i32, Vec<Comment>> = HashMap::new();
        for reply in repo.get_approved_replies(parent_ids).await? {
            if let Some(parent_id) = reply.parent_id {
                replies
                    .entry(parent_id)
                    .or_default()
                    .push(Comment::from_entity(reply));
            }
        }

        Ok(top_level
            .into_iter()
            .map(|comment| CommentThread {
                replies: replies.remove(&comment.id).unwrap_or_default(),
                comment: Comment::from_entity(comment),
            })
            .collect())
    }

    /// Paginated moderation listing, newest first, optionally filtered by status.
    pub async fn list_all(
        &self,
        status: Option<CommentStatus>,
        page: PageRequest,
    ) -> Result<Paginated<AdminComment>, AppError> {
        let (rows, total) = CommentRepository::new(self.db)
            .get_paginated(status, page)
            .await?;

        Ok(Paginated::new(
            rows.into_iter()
                .map(|(comment, article)| AdminComment::from_entity(comment, article))
                .collect(),
            total,
            page,
        ))
    }

    /// Marks a comment approved. Approving twice is a no-op.
    pub async fn approve(&self, id: i32) -> Result<Comment, AppError> {
        self.set_status(id, CommentStatus::Approved).await
    }

    /// Marks a comment rejected. Rejecting twice is a no-op.
    pub async fn reject(&self, id: i32) -> Result<Comment, AppError> {
        self.set_status(id, CommentStatus::Rejected).await
    }

    /// Deletes a comment and its direct replies in one transaction.
    ///
    /// Nesting is capped at two levels, so replies never have replies of their own.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if CommentRepository::new(self.db).find_by_id(id).await?.is_none() {
            return Err(DomainError::CommentNotFound.into());
        }

        let txn = self.db.begin().await?;

        let repo = CommentRepository::new(&txn);
        let replies = repo.delete_replies(id).await?;
        repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted comment {} and {} replies", id, replies);

        Ok(())
    }

    async fn set_status(&self, id: i32, status: CommentStatus) -> Result<Comment, AppError> {
        let repo = CommentRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::CommentNotFound.into());
        }

        let comment = repo.update_status(id, status).await?;

        tracing::info!("Comment {} marked {:?}", id, status);

        Ok(Comment::from_entity(comment))
    }
}
