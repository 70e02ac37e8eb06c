use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::tag::TagFactory};

use crate::server::{
    data::tag::TagRepository,
    model::tag::{CreateTagParams, UpdateTagParams},
};

/// Tests creating a tag and rejecting a duplicate name.
///
/// Expected: Ok for the first insert, Err(DbErr) for the second
#[tokio::test]
async fn create_rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    let tag = repo
        .create(CreateTagParams {
            name: "async".to_string(),
        })
        .await?;
    assert_eq!(tag.name, "async");

    let result = repo
        .create(CreateTagParams {
            name: "async".to_string(),
        })
        .await;
    assert!(result.is_err());

    Ok(())
}

/// Tests resolving a batch of ids skips the unknown ones.
///
/// Expected: Ok with only the two existing tags
#[tokio::test]
async fn find_by_ids_returns_existing_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_tag(db).await?;
    let second = factory::create_tag(db).await?;

    let repo = TagRepository::new(db);
    let found = repo.find_by_ids(&[first.id, second.id, 999]).await?;

    assert_eq!(found.len(), 2);
    assert!(repo.find_by_ids(&[]).await?.is_empty());

    Ok(())
}

/// Tests renaming a tag keeps its creation timestamp.
///
/// Expected: Ok with new name and original created_at
#[tokio::test]
async fn update_preserves_created_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = TagFactory::new(db).name("old").build().await?;

    let updated = TagRepository::new(db)
        .update(UpdateTagParams {
            id: tag.id,
            name: "new".to_string(),
        })
        .await?;

    assert_eq!(updated.name, "new");
    assert_eq!(updated.created_at, tag.created_at);

    Ok(())
}
