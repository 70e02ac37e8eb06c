use chrono::{DateTime, Utc};
use entity::article::ArticleStatus;

use crate::{
    model::article::{ArticleDto, ArticleStatusDto, CreateArticleDto, UpdateArticleDto},
    server::model::{category::Category, tag::Tag},
};

impl From<ArticleStatusDto> for ArticleStatus {
    fn from(dto: ArticleStatusDto) -> Self {
        match dto {
            ArticleStatusDto::Draft => ArticleStatus::Draft,
            ArticleStatusDto::Published => ArticleStatus::Published,
        }
    }
}

impl From<ArticleStatus> for ArticleStatusDto {
    fn from(status: ArticleStatus) -> Self {
        match status {
            ArticleStatus::Draft => ArticleStatusDto::Draft,
            ArticleStatus::Published => ArticleStatusDto::Published,
        }
    }
}

/// Article row joined with its category and tags, as loaded by `ArticleRepository`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleWithRelations {
    pub article: entity::article::Model,
    pub category: Option<entity::category::Model>,
    pub tags: Vec<entity::tag::Model>,
}

/// Article aggregate with its category and tags loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub cover_img: String,
    pub category_id: Option<i32>,
    pub category: Option<Category>,
    pub tags: Vec<Tag>,
    pub views: i32,
    pub status: ArticleStatus,
    pub is_top: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn from_with_relations(loaded: ArticleWithRelations) -> Self {
        let ArticleWithRelations {
            article,
            category,
            tags,
        } = loaded;

        Self {
            id: article.id,
            title: article.title,
            content: article.content,
            summary: article.summary,
            cover_img: article.cover_img,
            category_id: article.category_id,
            category: category.map(Category::from_entity),
            tags: tags.into_iter().map(Tag::from_entity).collect(),
            views: article.views,
            status: article.status,
            is_top: article.is_top,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }

    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            id: self.id,
            title: self.title,
            content: self.content,
            summary: self.summary,
            cover_img: self.cover_img,
            category_id: self.category_id,
            category: self.category.map(Category::into_dto),
            tags: self.tags.into_iter().map(Tag::into_dto).collect(),
            views: self.views,
            status: self.status.into(),
            is_top: self.is_top,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Fields an admin supplies when writing an article.
///
/// Shared by create and update; `views` and timestamps are never client-controlled.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleFields {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub cover_img: String,
    pub category_id: Option<i32>,
    pub status: ArticleStatus,
    pub is_top: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateArticleParams {
    pub fields: ArticleFields,
    /// Tags to attach; may be empty.
    pub tag_ids: Vec<i32>,
}

impl CreateArticleParams {
    pub fn from_dto(dto: CreateArticleDto) -> Self {
        Self {
            fields: ArticleFields {
                title: dto.title,
                content: dto.content,
                summary: dto.summary,
                cover_img: dto.cover_img,
                category_id: dto.category_id,
                status: dto.status.into(),
                is_top: dto.is_top,
            },
            tag_ids: dto.tag_ids,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateArticleParams {
    pub id: i32,
    pub fields: ArticleFields,
    /// Complete replacement tag set; empty clears all tags.
    pub tag_ids: Vec<i32>,
}

impl UpdateArticleParams {
    pub fn from_dto(id: i32, dto: UpdateArticleDto) -> Self {
        Self {
            id,
            fields: ArticleFields {
                title: dto.title,
                content: dto.content,
                summary: dto.summary,
                cover_img: dto.cover_img,
                category_id: dto.category_id,
                status: dto.status.into(),
                is_top: dto.is_top,
            },
            tag_ids: dto.tag_ids,
        }
    }
}

/// Which articles a listing should return.
#[derive(Debug, Clone, PartialEq)]
pub enum ArticleFilter {
    /// Every article, optionally restricted to one status.
    All(Option<ArticleStatus>),
    /// Published articles in a category.
    Category(i32),
    /// Published articles carrying a tag.
    Tag(i32),
    /// Published articles whose title or content contains the keyword.
    Keyword(String),
}
