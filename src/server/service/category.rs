use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{article::ArticleRepository, category::CategoryRepository},
    error::{
        domain::{map_unique_violation, DomainError},
        AppError,
    },
    model::category::{Category, CategoryWithCount, CreateCategoryParams, UpdateCategoryParams},
};

const RESOURCE: &str = "category";

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category. Name uniqueness is left to the storage constraint.
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        validate_name(&params.name)?;

        let category = CategoryRepository::new(self.db)
            .create(params)
            .await
            .map_err(map_unique_violation(RESOURCE))?;

        tracing::info!("Created category {} \"{}\"", category.id, category.name);

        Ok(Category::from_entity(category))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Category, AppError> {
        CategoryRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(Category::from_entity)
            .ok_or_else(|| DomainError::CategoryNotFound.into())
    }

    /// All categories ordered by name
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let categories = CategoryRepository::new(self.db).get_all().await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    /// All categories ordered by name with the number of articles in each.
    pub async fn get_all_with_counts(&self) -> Result<Vec<CategoryWithCount>, AppError> {
        let repo = CategoryRepository::new(self.db);

        let counts: HashMap<i32, i64> = repo
            .count_articles_by_category()
            .await?
            .into_iter()
            .collect();

        Ok(repo
            .get_all()
            .await?
            .into_iter()
            .map(|category| CategoryWithCount {
                article_count: counts.get(&category.id).copied().unwrap_or(0) as u64,
                category: Category::from_entity(category),
            })
            .collect())
    }

    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Category, AppError> {
        validate_name(&params.name)?;

        let repo = CategoryRepository::new(self.db);
        if !repo.exists(params.id).await? {
            return Err(DomainError::CategoryNotFound.into());
        }

        let category = repo
            .update(params)
            .await
            .map_err(map_unique_violation(RESOURCE))?;

        Ok(Category::from_entity(category))
    }

    /// Deletes a category that no article references.
    ///
    /// # Returns
    /// - `Ok(())` - Category deleted
    /// - `Err(AppError::DomainErr(CategoryNotFound))` - No category with this id
    /// - `Err(AppError::DomainErr(CategoryInUse))` - Articles still reference the category
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CategoryRepository::new(self.db);
        if !repo.exists(id).await? {
            return Err(DomainError::CategoryNotFound.into());
        }

        if ArticleRepository::new(self.db).count_by_category(id).await? > 0 {
            return Err(DomainError::CategoryInUse.into());
        }

        repo.delete(id).await?;

        tracing::info!("Deleted category {}", id);

        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name must not be empty"));
    }

    Ok(())
}
