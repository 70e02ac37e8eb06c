use super::*;

/// Tests deleting replies removes only direct children of the parent.
///
/// Expected: Ok with 2 rows removed and the parent intact
#[tokio::test]
async fn delete_replies_removes_children() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (article, parent, _) = factory::helpers::create_comment_thread(db).await?;
    CommentFactory::new(db, article.id)
        .parent_id(Some(parent.id))
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let removed = repo.delete_replies(parent.id).await?;

    assert_eq!(removed, 2);
    assert!(repo.find_by_id(parent.id).await?.is_some());

    Ok(())
}

/// Tests deleting by article removes every comment of that article.
///
/// Expected: Ok with the other article's comment untouched
#[tokio::test]
async fn delete_by_article_scopes_to_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (article, _, _) = factory::helpers::create_comment_thread(db).await?;
    let other = factory::create_article(db).await?;
    let kept = factory::create_comment(db, other.id).await?;

    let repo = CommentRepository::new(db);
    let removed = repo.delete_by_article(article.id).await?;

    assert_eq!(removed, 2);
    assert!(repo.find_by_id(kept.id).await?.is_some());

    Ok(())
}

/// Tests moderating a comment changes only its status.
///
/// Expected: Ok with status Approved and content unchanged
#[tokio::test]
async fn update_status_changes_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::create_article(db).await?;
    let comment = factory::create_comment(db, article.id).await?;

    let updated = CommentRepository::new(db)
        .update_status(comment.id, CommentStatus::Approved)
        .await?;

    assert_eq!(updated.status, CommentStatus::Approved);
    assert_eq!(updated.content, comment.content);

    Ok(())
}
