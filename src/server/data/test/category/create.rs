use super::*;

/// Tests creating a category.
///
/// Expected: Ok with category stored
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = CategoryRepository::new(db)
        .create(CreateCategoryParams {
            name: "Rust".to_string(),
            description: "Systems programming".to_string(),
        })
        .await?;

    assert_eq!(category.name, "Rust");
    assert_eq!(category.description, "Systems programming");

    let stored = entity::prelude::Category::find_by_id(category.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests category names are unique.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CategoryFactory::new(db).name("Rust").build().await?;

    let result = CategoryRepository::new(db)
        .create(CreateCategoryParams {
            name: "Rust".to_string(),
            description: String::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests all categories come back ordered by name.
///
/// Expected: Ok with names in ascending order
#[tokio::test]
async fn gets_all_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CategoryFactory::new(db).name("Zig").build().await?;
    CategoryFactory::new(db).name("Go").build().await?;
    CategoryFactory::new(db).name("Rust").build().await?;

    let names: Vec<String> = CategoryRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(names, vec!["Go", "Rust", "Zig"]);

    Ok(())
}
