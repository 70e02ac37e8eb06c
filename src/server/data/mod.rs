//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and are generic
//! over `ConnectionTrait`, so the same repository runs against the connection pool or inside a
//! `DatabaseTransaction` opened by the service layer.

pub mod article;
pub mod article_tag;
pub mod category;
pub mod comment;
pub mod stats;
pub mod tag;

#[cfg(test)]
mod test;
