use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::tag::{CreateTagParams, UpdateTagParams};

pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTagParams) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(params.name),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find_by_id(id).one(self.db).await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Resolves a set of ids; ids without a stored tag are silently absent from the result.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::tag::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Gets all tags ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn update(&self, params: UpdateTagParams) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            name: ActiveValue::Set(params.name),
            created_at: ActiveValue::NotSet,
        }
        .update(self.db)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Tag::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
