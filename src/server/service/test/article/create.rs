use super::*;

/// Tests a long body without a summary gets one derived from its first 100 characters.
///
/// Expected: Ok with summary of 100 characters plus "..."
#[tokio::test]
async fn derives_summary_from_long_content() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let content = "é".repeat(150);
    let article = ArticleService::new(db)
        .create(article_params("Long", &content, Vec::new()))
        .await?;

    let expected = format!("{}...", "é".repeat(100));
    assert_eq!(article.summary, expected);
    assert_eq!(article.views, 0);

    Ok(())
}

/// Tests short content leaves the summary empty.
///
/// Expected: Ok with empty summary
#[tokio::test]
async fn keeps_empty_summary_for_short_content() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = ArticleService::new(db)
        .create(article_params("Short", "Just a few words", Vec::new()))
        .await?;

    assert!(article.summary.is_empty());

    Ok(())
}

/// Tests tags are attached and duplicates collapse to one association.
///
/// Expected: Ok with both tags exactly once
#[tokio::test]
async fn attaches_deduplicated_tags() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_tag(db).await?;
    let second = factory::create_tag(db).await?;

    let article = ArticleService::new(db)
        .create(article_params(
            "Tagged",
            "Body",
            vec![second.id, first.id, second.id],
        ))
        .await?;

    let tag_ids: Vec<i32> = article.tags.iter().map(|t| t.id).collect();
    assert_eq!(tag_ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests an unknown tag rolls back the whole creation.
///
/// Expected: Err(PartialTagsNotFound) with no article and no association rows stored
#[tokio::test]
async fn rolls_back_when_tag_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::create_tag(db).await?;

    let result = ArticleService::new(db)
        .create(article_params("Broken", "Body", vec![tag.id, 999]))
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::PartialTagsNotFound))
    ));
    assert_eq!(entity::prelude::Article::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ArticleTag::find().count(db).await?, 0);

    Ok(())
}

/// Tests an unknown category is rejected before anything is written.
///
/// Expected: Err(CategoryNotFound)
#[tokio::test]
async fn fails_for_unknown_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut params = article_params("Lost", "Body", Vec::new());
    params.fields.category_id = Some(42);

    let result = ArticleService::new(db).create(params).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::CategoryNotFound))
    ));
    assert_eq!(entity::prelude::Article::find().count(db).await?, 0);

    Ok(())
}

/// Tests blank titles and bodies are rejected.
///
/// Expected: Err(Validation) for both
#[tokio::test]
async fn rejects_blank_title_or_content() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ArticleService::new(db);

    let blank_title = service.create(article_params("   ", "Body", Vec::new())).await;
    let blank_content = service.create(article_params("Title", "", Vec::new())).await;

    assert!(matches!(
        blank_title,
        Err(AppError::DomainErr(DomainError::Validation(_)))
    ));
    assert!(matches!(
        blank_content,
        Err(AppError::DomainErr(DomainError::Validation(_)))
    ));

    Ok(())
}
