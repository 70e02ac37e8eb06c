use std::collections::HashMap;

use chrono::Utc;
use entity::comment::CommentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    comment::{ArticleRef, CreateCommentParams},
    pagination::PageRequest,
};

pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a comment in the pending state.
    pub async fn create(
        &self,
        params: CreateCommentParams,
    ) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            id: ActiveValue::NotSet,
            article_id: ActiveValue::Set(params.article_id),
            parent_id: ActiveValue::Set(params.parent_id),
            nickname: ActiveValue::Set(params.nickname),
            email: ActiveValue::Set(params.email),
            content: ActiveValue::Set(params.content),
            status: ActiveValue::Set(CommentStatus::Pending),
            ip: ActiveValue::Set(params.ip),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find_by_id(id).one(self.db).await
    }

    /// Approved top-level comments of an article, newest first.
    pub async fn get_approved_top_level(
        &self,
        article_id: i32,
    ) -> Result<Vec<entity::comment::Model>, DbErr> {
        use entity::comment::Column;

        entity::prelude::Comment::find()
            .filter(Column::ArticleId.eq(article_id))
            .filter(Column::ParentId.is_null())
            .filter(Column::Status.eq(CommentStatus::Approved))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await
    }

    /// Approved replies to any of `parent_ids`, oldest first.
    pub async fn get_approved_replies(
        &self,
        parent_ids: Vec<i32>,
    ) -> Result<Vec<entity::comment::Model>, DbErr> {
        use entity::comment::Column;

        if parent_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Comment::find()
            .filter(Column::ParentId.is_in(parent_ids))
            .filter(Column::Status.eq(CommentStatus::Approved))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
    }

    /// Gets one page of comments across all articles, newest first, each with the id and
    /// title of its article.
    ///
    /// # Returns
    /// - `Ok((comments, total))` - The requested page and the total number of matching rows
    pub async fn get_paginated(
        &self,
        status: Option<CommentStatus>,
        page: PageRequest,
    ) -> Result<(Vec<(entity::comment::Model, Option<ArticleRef>)>, u64), DbErr> {
        use entity::comment::Column;

        let mut query = entity::prelude::Comment::find();
        if let Some(status) = status {
            query = query.filter(Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .paginate(self.db, page.page_size());

        let total = paginator.num_items().await?;
        let comments = if page.is_past_end(total) {
            Vec::new()
        } else {
            paginator.fetch_page(page.index()).await?
        };

        let mut article_ids: Vec<i32> = comments.iter().map(|c| c.article_id).collect();
        article_ids.sort_unstable();
        article_ids.dedup();

        let articles: HashMap<i32, String> = if article_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Article::find()
                .select_only()
                .columns([entity::article::Column::Id, entity::article::Column::Title])
                .filter(entity::article::Column::Id.is_in(article_ids))
                .into_tuple::<(i32, String)>()
                .all(self.db)
                .await?
                .into_iter()
                .collect()
        };

        let rows = comments
            .into_iter()
            .map(|comment| {
                let article = articles
                    .get(&comment.article_id)
                    .map(|title| ArticleRef {
                        id: comment.article_id,
                        title: title.clone(),
                    });
                (comment, article)
            })
            .collect();

        Ok((rows, total))
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: CommentStatus,
    ) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Deletes every direct reply of `parent_id`.
    pub async fn delete_replies(&self, parent_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::ParentId.eq(parent_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_article(&self, article_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
