use super::*;

/// Tests creating an article stores the supplied fields.
///
/// Verifies that views start at zero and both timestamps are set to the same instant.
///
/// Expected: Ok with article created
#[tokio::test]
async fn creates_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);
    let article = repo.create(&fields("Hello")).await?;

    assert_eq!(article.title, "Hello");
    assert_eq!(article.views, 0);
    assert_eq!(article.status, ArticleStatus::Published);
    assert_eq!(article.created_at, article.updated_at);

    let stored = entity::prelude::Article::find_by_id(article.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests creating an article with an unknown category fails at the foreign key.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut fields = fields("Orphan");
    fields.category_id = Some(999);

    let result = ArticleRepository::new(db).create(&fields).await;

    assert!(result.is_err());

    Ok(())
}
