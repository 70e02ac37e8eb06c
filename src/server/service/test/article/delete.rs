use super::*;

/// Tests deleting an article removes its tag associations and comments but keeps the tags.
///
/// Expected: Ok with no article, association or comment rows left and tags intact
#[tokio::test]
async fn removes_associations_and_comments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, tags, article) = factory::helpers::create_article_with_dependencies(db, 2).await?;
    let parent = CommentFactory::new(db, article.id)
        .status(CommentStatus::Approved)
        .build()
        .await?;
    CommentFactory::new(db, article.id)
        .parent_id(Some(parent.id))
        .build()
        .await?;

    ArticleService::new(db).delete(article.id).await?;

    assert!(ArticleRepository::new(db)
        .find_by_id(article.id)
        .await?
        .is_none());
    assert_eq!(entity::prelude::ArticleTag::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);
    assert_eq!(
        entity::prelude::Tag::find().count(db).await?,
        tags.len() as u64
    );

    Ok(())
}

/// Tests deleting a missing article.
///
/// Expected: Err(ArticleNotFound)
#[tokio::test]
async fn fails_for_missing_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArticleService::new(db).delete(5).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::ArticleNotFound))
    ));

    Ok(())
}
