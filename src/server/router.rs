use axum::{
    routing::{get, patch, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{article, category, comment, stats, tag},
    state::AppState,
};

/// OpenAPI document covering every HTTP endpoint.
#[derive(OpenApi)]
#[openapi(
    info(title = "Blog Backend API"),
    paths(
        article::list_articles,
        article::get_article,
        article::create_article,
        article::update_article,
        article::delete_article,
        category::get_categories,
        category::get_category_stats,
        category::get_category_by_id,
        category::create_category,
        category::update_category,
        category::delete_category,
        tag::get_tags,
        tag::get_tag_stats,
        tag::get_tag_by_id,
        tag::create_tag,
        tag::update_tag,
        tag::delete_tag,
        comment::create_comment,
        comment::get_article_comments,
        comment::get_comments,
        comment::approve_comment,
        comment::reject_comment,
        comment::delete_comment,
        stats::get_dashboard,
    ),
    tags(
        (name = "article", description = "Articles"),
        (name = "category", description = "Categories"),
        (name = "tag", description = "Tags"),
        (name = "comment", description = "Comments and moderation"),
        (name = "stats", description = "Admin dashboard"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let public = Router::new()
        .route("/api/articles", get(article::list_articles))
        .route("/api/articles/{id}", get(article::get_article))
        .route(
            "/api/articles/{id}/comments",
            get(comment::get_article_comments),
        )
        .route("/api/comments", post(comment::create_comment))
        .route("/api/categories", get(category::get_categories))
        .route("/api/categories/stats", get(category::get_category_stats))
        .route("/api/categories/{id}", get(category::get_category_by_id))
        .route("/api/tags", get(tag::get_tags))
        .route("/api/tags/stats", get(tag::get_tag_stats))
        .route("/api/tags/{id}", get(tag::get_tag_by_id));

    let admin = Router::new()
        .route("/api/admin/articles", post(article::create_article))
        .route(
            "/api/admin/articles/{id}",
            put(article::update_article).delete(article::delete_article),
        )
        .route("/api/admin/categories", post(category::create_category))
        .route(
            "/api/admin/categories/{id}",
            put(category::update_category).delete(category::delete_category),
        )
        .route("/api/admin/tags", post(tag::create_tag))
        .route(
            "/api/admin/tags/{id}",
            put(tag::update_tag).delete(tag::delete_tag),
        )
        .route("/api/admin/comments", get(comment::get_comments))
        .route(
            "/api/admin/comments/{id}",
            axum::routing::delete(comment::delete_comment),
        )
        .route(
            "/api/admin/comments/{id}/approve",
            patch(comment::approve_comment),
        )
        .route(
            "/api/admin/comments/{id}/reject",
            patch(comment::reject_comment),
        )
        .route("/api/admin/stats", get(stats::get_dashboard));

    Router::new()
        .merge(public)
        .merge(admin)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
