use chrono::{DateTime, Utc};

use crate::model::tag::{CreateTagDto, TagDto, TagWithCountDto, UpdateTagDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Tag {
    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> TagDto {
        TagDto {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagWithCount {
    pub tag: Tag,
    pub article_count: u64,
}

impl TagWithCount {
    pub fn into_dto(self) -> TagWithCountDto {
        TagWithCountDto {
            id: self.tag.id,
            name: self.tag.name,
            article_count: self.article_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTagParams {
    pub name: String,
}

impl CreateTagParams {
    pub fn from_dto(dto: CreateTagDto) -> Self {
        Self { name: dto.name }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTagParams {
    pub id: i32,
    pub name: String,
}

impl UpdateTagParams {
    pub fn from_dto(id: i32, dto: UpdateTagDto) -> Self {
        Self { id, name: dto.name }
    }
}
