use super::*;

/// Tests the article is returned with the pre-increment view count.
///
/// Expected: Ok with views 3, then the stored counter reaches 4
#[tokio::test]
async fn returns_article_and_counts_view() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let original = ArticleFactory::new(db).views(3).build().await?;

    let article = ArticleService::new(db).get_by_id(original.id).await?;
    assert_eq!(article.views, 3);

    let repo = ArticleRepository::new(db);
    let mut views = 3;
    for _ in 0..50 {
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        views = repo.find_by_id(original.id).await?.unwrap().views;
        if views == 4 {
            break;
        }
    }
    assert_eq!(views, 4);

    Ok(())
}

/// Tests the detached increment can be awaited directly.
///
/// Expected: Ok with views incremented once
#[tokio::test]
async fn spawned_increment_updates_counter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::create_article(db).await?;

    spawn_view_increment(db.clone(), article.id).await.unwrap();

    let stored = ArticleRepository::new(db).find_by_id(article.id).await?.unwrap();
    assert_eq!(stored.views, 1);

    Ok(())
}

/// Tests a missing article.
///
/// Expected: Err(ArticleNotFound)
#[tokio::test]
async fn fails_for_missing_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArticleService::new(db).get_by_id(1).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::ArticleNotFound))
    ));

    Ok(())
}
