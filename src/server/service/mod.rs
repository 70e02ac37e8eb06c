//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing validation and the comment nesting rules
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-statement mutations atomically

pub mod article;
pub mod category;
pub mod comment;
pub mod stats;
pub mod tag;
pub mod tag_association;

#[cfg(test)]
mod test;
