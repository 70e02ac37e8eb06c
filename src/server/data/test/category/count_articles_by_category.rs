use super::*;

/// Tests per-category counts include articles of every status.
///
/// Expected: Ok with (category, 2) and uncategorized articles excluded
#[tokio::test]
async fn counts_articles_of_all_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    factory::create_category(db).await?;

    ArticleFactory::new(db)
        .category_id(Some(category.id))
        .build()
        .await?;
    ArticleFactory::new(db)
        .category_id(Some(category.id))
        .status(ArticleStatus::Draft)
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await?;
    factory::create_article(db).await?;

    let counts = CategoryRepository::new(db)
        .count_articles_by_category()
        .await?;

    assert_eq!(counts, vec![(category.id, 2)]);

    Ok(())
}
