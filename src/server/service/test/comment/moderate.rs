use super::*;

/// Tests approving and rejecting, including repeating a transition.
///
/// Expected: Ok with status following the last call
#[tokio::test]
async fn approves_and_rejects() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::create_article(db).await?;
    let comment = factory::create_comment(db, article.id).await?;
    let service = CommentService::new(db);

    assert_eq!(
        service.approve(comment.id).await?.status,
        CommentStatus::Approved
    );
    assert_eq!(
        service.approve(comment.id).await?.status,
        CommentStatus::Approved
    );
    assert_eq!(
        service.reject(comment.id).await?.status,
        CommentStatus::Rejected
    );

    Ok(())
}

/// Tests moderating a missing comment.
///
/// Expected: Err(CommentNotFound)
#[tokio::test]
async fn fails_for_missing_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CommentService::new(db).approve(9).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::CommentNotFound))
    ));

    Ok(())
}
