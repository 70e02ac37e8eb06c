//! HTTP request handlers.
//!
//! Controllers check access, convert DTOs into params, call a service and wrap the
//! resulting domain model in the JSON envelope. Every handler carries a `utoipa::path`
//! annotation collected into the OpenAPI document by `router::ApiDoc`.

pub mod article;
pub mod category;
pub mod comment;
pub mod stats;
pub mod tag;
