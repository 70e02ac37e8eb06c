//! SeaORM entities for the blog backend.
//!
//! One module per table. The `prelude` re-exports every `Entity` under its
//! table-derived name so callers can write `entity::prelude::Article::find()`.

pub mod prelude;

pub mod article;
pub mod article_tag;
pub mod category;
pub mod comment;
pub mod tag;
