use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, MessageDto, PageDto},
        article::{ArticleDto, ArticleListQuery, CreateArticleDto, UpdateArticleDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AdminGuard, client_ip::ClientIp},
        model::{
            article::{Article, ArticleFilter, CreateArticleParams, UpdateArticleParams},
            pagination::PageRequest,
        },
        service::article::ArticleService,
        state::AppState,
    },
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "article";

/// List articles.
///
/// Filters are mutually exclusive and applied in priority order: `category_id`, then
/// `tag_id`, then a non-empty `keyword`. Filtered listings only contain published
/// articles. Without any filter every article is listed, optionally narrowed by `status`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Paging and filter parameters
///
/// # Returns
/// - `200 OK` - Page of articles with category and tags
/// - `400 Bad Request` - Blank search keyword
/// - `404 Not Found` - Referenced category or tag does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(ArticleListQuery),
    responses(
        (status = 200, description = "Successfully retrieved articles", body = ApiResponse<PageDto<ArticleDto>>),
        (status = 400, description = "Blank search keyword", body = MessageDto),
        (status = 404, description = "Category or tag not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<ArticleListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageRequest::clamped(query.page, query.page_size);

    let filter = if let Some(category_id) = query.category_id {
        ArticleFilter::Category(category_id)
    } else if let Some(tag_id) = query.tag_id {
        ArticleFilter::Tag(tag_id)
    } else if let Some(keyword) = query.keyword.filter(|k| !k.is_empty()) {
        ArticleFilter::Keyword(keyword)
    } else {
        ArticleFilter::All(query.status.map(Into::into))
    };

    let articles = ArticleService::new(&state.db).list(filter, page).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(articles.into_dto(Article::into_dto))),
    ))
}

/// Get an article by ID.
///
/// Also schedules a background increment of the article's view counter; the returned
/// view count does not include this read.
///
/// # Returns
/// - `200 OK` - Article with category and tags
/// - `404 Not Found` - Article does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    tag = ARTICLE_TAG,
    params(
        ("id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved article", body = ApiResponse<ArticleDto>),
        (status = 404, description = "Article not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let article = ArticleService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(article.into_dto()))))
}

/// Create an article.
///
/// # Access Control
/// - Requires the `X-Admin-Token` header
///
/// # Arguments
/// - `state` - Application state containing the database connection and admin token
/// - `headers` - Request headers carrying the admin token
/// - `payload` - Article fields and the tag ids to attach
///
/// # Returns
/// - `201 Created` - Created article
/// - `400 Bad Request` - Empty title or content, or unknown tag ids
/// - `401 Unauthorized` - Missing or invalid admin token
/// - `403 Forbidden` - Client address outside the configured allowlist
/// - `404 Not Found` - Referenced category does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/articles",
    tag = ARTICLE_TAG,
    request_body = CreateArticleDto,
    responses(
        (status = 201, description = "Successfully created article", body = ApiResponse<ArticleDto>),
        (status = 400, description = "Invalid article data", body = MessageDto),
        (status = 401, description = "Missing or invalid admin token", body = MessageDto),
        (status = 403, description = "Client address not allowed", body = MessageDto),
        (status = 404, description = "Category not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    client_ip: ClientIp,
    Json(payload): Json<CreateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::from_state(&state, &headers, &client_ip).require()?;

    let params = CreateArticleParams::from_dto(payload);

    let article = ArticleService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_msg(
            StatusCode::CREATED.as_u16(),
            "article created",
            article.into_dto(),
        )),
    ))
}

/// Replace an article and its tag set.
///
/// # Access Control
/// - Requires the `X-Admin-Token` header
///
/// # Returns
/// - `200 OK` - Updated article
/// - `400 Bad Request` - Empty title or content, or unknown tag ids
/// - `401 Unauthorized` - Missing or invalid admin token
/// - `403 Forbidden` - Client address outside the configured allowlist
/// - `404 Not Found` - Article or referenced category does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/articles/{id}",
    tag = ARTICLE_TAG,
    params(
        ("id" = i32, Path, description = "Article ID")
    ),
    request_body = UpdateArticleDto,
    responses(
        (status = 200, description = "Successfully updated article", body = ApiResponse<ArticleDto>),
        (status = 400, description = "Invalid article data", body = MessageDto),
        (status = 401, description = "Missing or invalid admin token", body = MessageDto),
        (status = 403, description = "Client address not allowed", body = MessageDto),
        (status = 404, description = "Article or category not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    client_ip: ClientIp,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::from_state(&state, &headers, &client_ip).require()?;

    let params = UpdateArticleParams::from_dto(id, payload);

    let article = ArticleService::new(&state.db).update(params).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_msg(
            StatusCode::OK.as_u16(),
            "article updated",
            article.into_dto(),
        )),
    ))
}

/// Delete an article with its tag associations and comments.
///
/// # Access Control
/// - Requires the `X-Admin-Token` header
///
/// # Returns
/// - `200 OK` - Article deleted
/// - `401 Unauthorized` - Missing or invalid admin token
/// - `403 Forbidden` - Client address outside the configured allowlist
/// - `404 Not Found` - Article does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/articles/{id}",
    tag = ARTICLE_TAG,
    params(
        ("id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted article", body = MessageDto),
        (status = 401, description = "Missing or invalid admin token", body = MessageDto),
        (status = 403, description = "Client address not allowed", body = MessageDto),
        (status = 404, description = "Article not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    client_ip: ClientIp,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::from_state(&state, &headers, &client_ip).require()?;

    ArticleService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(StatusCode::OK.as_u16(), "article deleted")),
    ))
}
