use super::*;

/// Tests out-of-range paging input falls back to defaults.
///
/// Expected: Ok with page 1 and page size 10
#[tokio::test]
async fn clamps_page_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..12 {
        factory::create_article(db).await?;
    }

    let page = ArticleService::new(db)
        .list(
            ArticleFilter::All(None),
            PageRequest::clamped(Some(0), Some(500)),
        )
        .await?;

    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 10);
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.total, 12);

    Ok(())
}

/// Tests filtering by a category that does not exist.
///
/// Expected: Err(CategoryNotFound)
#[tokio::test]
async fn fails_for_unknown_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArticleService::new(db)
        .list(ArticleFilter::Category(7), PageRequest::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::CategoryNotFound))
    ));

    Ok(())
}

/// Tests filtering by a tag that does not exist.
///
/// Expected: Err(TagNotFound)
#[tokio::test]
async fn fails_for_unknown_tag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArticleService::new(db)
        .list(ArticleFilter::Tag(7), PageRequest::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::TagNotFound))
    ));

    Ok(())
}

/// Tests a whitespace-only keyword is rejected.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_blank_keyword() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArticleService::new(db)
        .list(ArticleFilter::Keyword("   ".to_string()), PageRequest::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::Validation(_)))
    ));

    Ok(())
}

/// Tests the keyword is trimmed before searching.
///
/// Expected: Ok with the matching published article
#[tokio::test]
async fn trims_keyword() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hit = ArticleFactory::new(db).title("Tokio internals").build().await?;
    ArticleFactory::new(db)
        .title("Tokio draft")
        .status(ArticleStatus::Draft)
        .build()
        .await?;

    let page = ArticleService::new(db)
        .list(
            ArticleFilter::Keyword("  tokio ".to_string()),
            PageRequest::default(),
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, hit.id);

    Ok(())
}

/// Tests the largest representable page number yields an empty page instead of failing.
///
/// Expected: Ok with no items, the real total and the requested page echoed back
#[tokio::test]
async fn huge_page_returns_empty_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_article(db).await?;

    let page = ArticleService::new(db)
        .list(
            ArticleFilter::All(None),
            PageRequest::clamped(Some(i64::MAX), Some(10)),
        )
        .await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total, 1);
    assert_eq!(page.page, i64::MAX as u64);

    Ok(())
}

/// Tests search treats `%` in the keyword as a literal character.
///
/// Expected: Ok with only the article containing a percent sign
#[tokio::test]
async fn search_matches_percent_literally() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hit = ArticleFactory::new(db).title("Cut build times by 40%").build().await?;
    ArticleFactory::new(db).title("Faster builds").build().await?;

    let page = ArticleService::new(db)
        .list(ArticleFilter::Keyword("0%".to_string()), PageRequest::default())
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, hit.id);

    Ok(())
}
