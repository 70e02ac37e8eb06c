use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::category::{CreateCategoryParams, UpdateCategoryParams};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a category. A duplicate name surfaces as a unique constraint violation.
    pub async fn create(
        &self,
        params: CreateCategoryParams,
    ) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(id).one(self.db).await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Gets all categories ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await
    }

    /// Updates name and description; `created_at` is preserved.
    pub async fn update(
        &self,
        params: UpdateCategoryParams,
    ) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::NotSet,
        }
        .update(self.db)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Number of articles per category, for categories with at least one article.
    pub async fn count_articles_by_category(&self) -> Result<Vec<(i32, i64)>, DbErr> {
        entity::prelude::Article::find()
            .select_only()
            .column(entity::article::Column::CategoryId)
            .column_as(Expr::cust("COUNT(*)"), "article_count")
            .filter(entity::article::Column::CategoryId.is_not_null())
            .group_by(entity::article::Column::CategoryId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await
    }
}
