//! Blog Backend Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the blog
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: In-memory entity models with sensible defaults (no database)
//! - **factory**: Builders that insert entities into the database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_article_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let category = factory::create_category(db).await?;
//!     let article = factory::article::ArticleFactory::new(db)
//!         .category_id(Some(category.id))
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
