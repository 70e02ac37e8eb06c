//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let category = factory::create_category(&db).await?;
//! let tag = factory::create_tag(&db).await?;
//! let article = factory::create_article(&db).await?;
//!
//! // Article with tags and category in one call
//! let (category, tags, article) =
//!     factory::helpers::create_article_with_dependencies(&db, 2).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let reply = factory::comment::CommentFactory::new(&db, article.id)
//!     .parent_id(Some(parent.id))
//!     .status(CommentStatus::Approved)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `category` - Create category entities
//! - `tag` - Create tag entities
//! - `article` - Create article entities and tag associations
//! - `comment` - Create comment entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod article;
pub mod category;
pub mod comment;
pub mod helpers;
pub mod tag;

pub use article::{attach_tags, create_article, tag_ids_for_article};
pub use category::create_category;
pub use comment::create_comment;
pub use tag::create_tag;
