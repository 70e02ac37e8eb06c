use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::article_tag::ArticleTagRepository;


/// Tests deleting by tag removes only that tag's associations.
///
/// Expected: Ok with the other tag still attached
#[tokio::test]
async fn delete_by_tag_detaches_only_that_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, tags, article) = factory::helpers::create_article_with_dependencies(db, 2).await?;

    let repo = ArticleTagRepository::new(db);
    let removed = repo.delete_by_tag(tags[0].id).await?;

    assert_eq!(removed, 1);
    assert_eq!(
        factory::tag_ids_for_article(db, article.id).await?,
        vec![tags[1].id]
    );

    Ok(())
}
