use super::*;

/// Tests an update keeps views and created_at while replacing fields.
///
/// Expected: Ok with new title, original views and created_at
#[tokio::test]
async fn preserves_views_and_created_at() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let original = ArticleFactory::new(db)
        .views(17)
        .created_at(Utc::now() - Duration::days(7))
        .build()
        .await?;

    let params = article_params("Updated", "New body", Vec::new());
    let article = ArticleService::new(db)
        .update(UpdateArticleParams {
            id: original.id,
            fields: params.fields,
            tag_ids: params.tag_ids,
        })
        .await?;

    assert_eq!(article.title, "Updated");
    assert_eq!(article.views, 17);
    assert_eq!(article.created_at, original.created_at);

    Ok(())
}

/// Tests the tag set is replaced wholesale and an empty list clears it.
///
/// Expected: Ok with the new tag only, then no tags
#[tokio::test]
async fn replaces_and_clears_tags() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, tags, article) = factory::helpers::create_article_with_dependencies(db, 2).await?;
    let replacement = factory::create_tag(db).await?;
    let service = ArticleService::new(db);

    let params = article_params("Same", "Body", vec![replacement.id]);
    let updated = service
        .update(UpdateArticleParams {
            id: article.id,
            fields: params.fields,
            tag_ids: params.tag_ids,
        })
        .await?;

    let tag_ids: Vec<i32> = updated.tags.iter().map(|t| t.id).collect();
    assert_eq!(tag_ids, vec![replacement.id]);
    assert!(!tag_ids.contains(&tags[0].id));

    let params = article_params("Same", "Body", Vec::new());
    let cleared = service
        .update(UpdateArticleParams {
            id: article.id,
            fields: params.fields,
            tag_ids: params.tag_ids,
        })
        .await?;

    assert!(cleared.tags.is_empty());

    Ok(())
}

/// Tests a failed tag lookup leaves the stored article untouched.
///
/// Expected: Err(PartialTagsNotFound) with original title and tags kept
#[tokio::test]
async fn rolls_back_when_tag_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, tags, article) = factory::helpers::create_article_with_dependencies(db, 1).await?;

    let params = article_params("Should not stick", "Body", vec![999]);
    let result = ArticleService::new(db)
        .update(UpdateArticleParams {
            id: article.id,
            fields: params.fields,
            tag_ids: params.tag_ids,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::PartialTagsNotFound))
    ));

    let stored = ArticleRepository::new(db).find_by_id(article.id).await?.unwrap();
    assert_eq!(stored.title, article.title);
    assert_eq!(
        factory::tag_ids_for_article(db, article.id).await?,
        vec![tags[0].id]
    );

    Ok(())
}

/// Tests updating a missing article.
///
/// Expected: Err(ArticleNotFound)
#[tokio::test]
async fn fails_for_missing_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let params = article_params("Ghost", "Body", Vec::new());
    let result = ArticleService::new(db)
        .update(UpdateArticleParams {
            id: 404,
            fields: params.fields,
            tag_ids: params.tag_ids,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::ArticleNotFound))
    ));

    Ok(())
}
