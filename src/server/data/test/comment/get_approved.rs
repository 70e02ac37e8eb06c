use super::*;

/// Tests only approved top-level comments are returned, newest first.
///
/// Expected: Ok with [newer, older] and no pending or reply rows
#[tokio::test]
async fn returns_approved_top_level_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::create_article(db).await?;
    let now = Utc::now();

    let older = CommentFactory::new(db, article.id)
        .status(CommentStatus::Approved)
        .created_at(now - Duration::minutes(10))
        .build()
        .await?;
    let newer = CommentFactory::new(db, article.id)
        .status(CommentStatus::Approved)
        .created_at(now)
        .build()
        .await?;
    CommentFactory::new(db, article.id).build().await?;
    CommentFactory::new(db, article.id)
        .parent_id(Some(older.id))
        .status(CommentStatus::Approved)
        .build()
        .await?;

    let comments = CommentRepository::new(db)
        .get_approved_top_level(article.id)
        .await?;

    let ids: Vec<i32> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests approved replies come back oldest first.
///
/// Expected: Ok with [earlier, later] and the rejected reply excluded
#[tokio::test]
async fn returns_approved_replies_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::create_article(db).await?;
    let parent = CommentFactory::new(db, article.id)
        .status(CommentStatus::Approved)
        .build()
        .await?;
    let now = Utc::now();

    let later = CommentFactory::new(db, article.id)
        .parent_id(Some(parent.id))
        .status(CommentStatus::Approved)
        .created_at(now)
        .build()
        .await?;
    let earlier = CommentFactory::new(db, article.id)
        .parent_id(Some(parent.id))
        .status(CommentStatus::Approved)
        .created_at(now - Duration::minutes(5))
        .build()
        .await?;
    CommentFactory::new(db, article.id)
        .parent_id(Some(parent.id))
        .status(CommentStatus::Rejected)
        .build()
        .await?;

    let replies = CommentRepository::new(db)
        .get_approved_replies(vec![parent.id])
        .await?;

    let ids: Vec<i32> = replies.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);

    Ok(())
}

/// Tests an empty parent list short-circuits.
///
/// Expected: Ok with no replies
#[tokio::test]
async fn returns_no_replies_for_empty_parents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let replies = CommentRepository::new(db)
        .get_approved_replies(Vec::new())
        .await?;

    assert!(replies.is_empty());

    Ok(())
}
