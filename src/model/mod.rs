//! Data transfer objects exchanged with API clients.
//!
//! These types define the JSON wire format of the HTTP API and carry `utoipa`
//! schemas for the generated OpenAPI document. They hold no business logic.

pub mod api;
pub mod article;
pub mod category;
pub mod comment;
pub mod stats;
pub mod tag;
