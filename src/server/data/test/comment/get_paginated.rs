use super::*;

/// Tests the admin listing pairs each comment with its article and filters by status.
///
/// Expected: Ok with the pending comment and its article title
#[tokio::test]
async fn filters_by_status_with_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::create_article(db).await?;
    let pending = factory::create_comment(db, article.id).await?;
    CommentFactory::new(db, article.id)
        .status(CommentStatus::Approved)
        .build()
        .await?;

    let (rows, total) = CommentRepository::new(db)
        .get_paginated(Some(CommentStatus::Pending), PageRequest::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(rows[0].0.id, pending.id);
    assert_eq!(rows[0].1.as_ref().map(|a| a.title.as_str()), Some(article.title.as_str()));

    Ok(())
}

/// Tests the unfiltered listing is newest first across articles.
///
/// Expected: Ok with total 3 and the newest comment first
#[tokio::test]
async fn lists_all_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_article(db).await?;
    let second = factory::create_article(db).await?;
    let now = Utc::now();

    CommentFactory::new(db, first.id)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    CommentFactory::new(db, second.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    let newest = CommentFactory::new(db, first.id)
        .status(CommentStatus::Rejected)
        .created_at(now)
        .build()
        .await?;

    let (rows, total) = CommentRepository::new(db)
        .get_paginated(None, PageRequest::clamped(Some(1), Some(2)))
        .await?;

    assert_eq!(total, 3);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0.id, newest.id);

    Ok(())
}
