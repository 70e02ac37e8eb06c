use super::*;

/// Tests articles are returned newest first with ties broken by id descending.
///
/// Expected: Ok with ids ordered [newest, tie-high-id, tie-low-id, oldest]
#[tokio::test]
async fn orders_by_created_at_then_id_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let base = Utc::now();
    let oldest = ArticleFactory::new(db)
        .created_at(base - Duration::hours(2))
        .build()
        .await?;
    let tie_first = ArticleFactory::new(db)
        .created_at(base - Duration::hours(1))
        .build()
        .await?;
    let tie_second = ArticleFactory::new(db)
        .created_at(base - Duration::hours(1))
        .build()
        .await?;
    let newest = ArticleFactory::new(db).created_at(base).build().await?;

    let (articles, total) = ArticleRepository::new(db)
        .get_paginated(&ArticleFilter::All(None), PageRequest::default())
        .await?;

    let ids: Vec<i32> = articles.iter().map(|a| a.article.id).collect();
    assert_eq!(total, 4);
    assert_eq!(ids, vec![newest.id, tie_second.id, tie_first.id, oldest.id]);

    Ok(())
}

/// Tests the page slice and total count.
///
/// Expected: Ok with 2 articles on page 2 and total 5
#[tokio::test]
async fn returns_requested_page_and_total() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_article(db).await?;
    }

    let (articles, total) = ArticleRepository::new(db)
        .get_paginated(
            &ArticleFilter::All(None),
            PageRequest::clamped(Some(2), Some(3)),
        )
        .await?;

    assert_eq!(total, 5);
    assert_eq!(articles.len(), 2);

    Ok(())
}

/// Tests the status filter of the unfiltered listing.
///
/// Expected: Ok with only the draft article
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_article(db).await?;
    let draft = ArticleFactory::new(db)
        .status(ArticleStatus::Draft)
        .build()
        .await?;

    let (articles, total) = ArticleRepository::new(db)
        .get_paginated(
            &ArticleFilter::All(Some(ArticleStatus::Draft)),
            PageRequest::default(),
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(articles[0].article.id, draft.id);

    Ok(())
}

/// Tests the category filter only returns published articles of that category.
///
/// Expected: Ok with the single published article in the category
#[tokio::test]
async fn filters_published_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let other = factory::create_category(db).await?;

    let published = ArticleFactory::new(db)
        .category_id(Some(category.id))
        .build()
        .await?;
    ArticleFactory::new(db)
        .category_id(Some(category.id))
        .status(ArticleStatus::Draft)
        .build()
        .await?;
    ArticleFactory::new(db)
        .category_id(Some(other.id))
        .build()
        .await?;

    let (articles, total) = ArticleRepository::new(db)
        .get_paginated(&ArticleFilter::Category(category.id), PageRequest::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(articles[0].article.id, published.id);
    assert_eq!(
        articles[0].category.as_ref().map(|c| c.id),
        Some(category.id)
    );

    Ok(())
}

/// Tests the tag filter only returns published articles carrying the tag.
///
/// Expected: Ok with the single published tagged article
#[tokio::test]
async fn filters_published_by_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::create_tag(db).await?;

    let tagged = factory::create_article(db).await?;
    let tagged_draft = ArticleFactory::new(db)
        .status(ArticleStatus::Draft)
        .build()
        .await?;
    factory::create_article(db).await?;

    factory::attach_tags(db, tagged.id, &[tag.id]).await?;
    factory::attach_tags(db, tagged_draft.id, &[tag.id]).await?;

    let (articles, total) = ArticleRepository::new(db)
        .get_paginated(&ArticleFilter::Tag(tag.id), PageRequest::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(articles[0].article.id, tagged.id);
    assert_eq!(articles[0].tags.len(), 1);
    assert_eq!(articles[0].tags[0].id, tag.id);

    Ok(())
}

/// Tests keyword search matches title or content case-insensitively.
///
/// Expected: Ok with the two published matches and not the draft
#[tokio::test]
async fn searches_title_and_content_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let by_title = ArticleFactory::new(db)
        .title("Learning RUST the hard way")
        .build()
        .await?;
    let by_content = ArticleFactory::new(db)
        .content("Some notes on rust lifetimes")
        .build()
        .await?;
    ArticleFactory::new(db)
        .title("Rust draft")
        .status(ArticleStatus::Draft)
        .build()
        .await?;
    ArticleFactory::new(db).title("Go tips").build().await?;

    let (articles, total) = ArticleRepository::new(db)
        .get_paginated(
            &ArticleFilter::Keyword("Rust".to_string()),
            PageRequest::default(),
        )
        .await?;

    let mut ids: Vec<i32> = articles.iter().map(|a| a.article.id).collect();
    ids.sort_unstable();
    assert_eq!(total, 2);
    assert_eq!(ids, vec![by_title.id, by_content.id]);

    Ok(())
}

/// Tests a single article is loaded with its category and tags.
///
/// Expected: Ok(Some) with category and both tags
#[tokio::test]
async fn loads_relations_for_single_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, tags, article) =
        factory::helpers::create_article_with_dependencies(db, 2).await?;

    let loaded = ArticleRepository::new(db)
        .get_with_relations(article.id)
        .await?
        .unwrap();

    assert_eq!(loaded.category.map(|c| c.id), Some(category.id));
    let tag_ids: Vec<i32> = loaded.tags.iter().map(|t| t.id).collect();
    assert_eq!(tag_ids, tags.iter().map(|t| t.id).collect::<Vec<_>>());

    Ok(())
}

/// Tests `%` and `_` in a keyword match only themselves, not any character sequence.
///
/// Expected: Ok with only the articles literally containing the keyword
#[tokio::test]
async fn keyword_wildcards_match_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ArticleFactory::new(db)
        .title("plain title")
        .content("no special chars here")
        .build()
        .await?;
    ArticleFactory::new(db)
        .title("other")
        .content("body")
        .build()
        .await?;
    let percent = ArticleFactory::new(db)
        .title("100% coverage")
        .content("body")
        .build()
        .await?;
    let underscore = ArticleFactory::new(db)
        .title("naming")
        .content("prefer SNAKE_CASE for statics")
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let search = |keyword: &str| ArticleFilter::Keyword(keyword.to_string());

    let (articles, total) = repo
        .get_paginated(&search("%"), PageRequest::default())
        .await?;
    assert_eq!(total, 1);
    assert_eq!(articles[0].article.id, percent.id);

    let (articles, total) = repo
        .get_paginated(&search("_"), PageRequest::default())
        .await?;
    assert_eq!(total, 1);
    assert_eq!(articles[0].article.id, underscore.id);

    let (articles, total) = repo
        .get_paginated(&search("e_c"), PageRequest::default())
        .await?;
    assert_eq!(total, 1);
    assert_eq!(articles[0].article.id, underscore.id);

    let (_, total) = repo
        .get_paginated(&search("o_h"), PageRequest::default())
        .await?;
    assert_eq!(total, 0);

    let (_, total) = repo
        .get_paginated(&search("\\"), PageRequest::default())
        .await?;
    assert_eq!(total, 0);

    Ok(())
}

/// Tests a page far past the end returns no rows but the real total.
///
/// Expected: Ok with an empty slice and total 2
#[tokio::test]
async fn huge_page_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_article(db).await?;
    factory::create_article(db).await?;

    let (articles, total) = ArticleRepository::new(db)
        .get_paginated(
            &ArticleFilter::All(None),
            PageRequest::clamped(Some(i64::MAX), Some(10)),
        )
        .await?;

    assert!(articles.is_empty());
    assert_eq!(total, 2);

    Ok(())
}
