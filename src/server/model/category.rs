use chrono::{DateTime, Utc};

use crate::model::category::{
    CategoryDto, CategoryWithCountDto, CreateCategoryDto, UpdateCategoryDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

/// Category with the number of articles referencing it.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWithCount {
    pub category: Category,
    pub article_count: u64,
}

impl CategoryWithCount {
    pub fn into_dto(self) -> CategoryWithCountDto {
        CategoryWithCountDto {
            id: self.category.id,
            name: self.category.name,
            description: self.category.description,
            article_count: self.article_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCategoryParams {
    pub name: String,
    pub description: String,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCategoryParams {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl UpdateCategoryParams {
    pub fn from_dto(id: i32, dto: UpdateCategoryDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
        }
    }
}
