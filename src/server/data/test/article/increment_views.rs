use super::*;

/// Tests the view counter is incremented in place.
///
/// Expected: Ok with views increased by one per call
#[tokio::test]
async fn increments_views() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = ArticleFactory::new(db).views(5).build().await?;

    let repo = ArticleRepository::new(db);
    repo.increment_views(article.id).await?;
    repo.increment_views(article.id).await?;

    let stored = repo.find_by_id(article.id).await?.unwrap();
    assert_eq!(stored.views, 7);

    Ok(())
}

/// Tests incrementing a missing article is a no-op.
///
/// Expected: Ok(())
#[tokio::test]
async fn ignores_missing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArticleRepository::new(db).increment_views(999).await;

    assert!(result.is_ok());

    Ok(())
}
