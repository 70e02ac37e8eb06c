use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, MessageDto, PageDto},
        comment::{AdminCommentDto, CommentDto, CommentListQuery, CommentThreadDto, CreateCommentDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AdminGuard, client_ip::ClientIp},
        model::{
            comment::{AdminComment, CommentThread, CreateCommentParams},
            pagination::PageRequest,
        },
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Submit a comment or a reply to a top-level comment.
///
/// The comment is stored as pending regardless of any status in the body. The submitter
/// address is taken from `X-Forwarded-For` or the peer address.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `ip` - Resolved client address
/// - `payload` - Comment data
///
/// # Returns
/// - `201 Created` - Comment stored and awaiting moderation
/// - `400 Bad Request` - Missing field, reply to a reply, or parent on another article
/// - `404 Not Found` - Article or parent comment does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment submitted for moderation", body = ApiResponse<CommentDto>),
        (status = 400, description = "Invalid comment data", body = MessageDto),
        (status = 404, description = "Article or parent comment not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateCommentParams::from_dto(payload, ip);

    let comment = CommentService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_msg(
            StatusCode::CREATED.as_u16(),
            "comment submitted, awaiting review",
            comment.into_dto(),
        )),
    ))
}

/// Get the approved comment threads of an article.
///
/// # Returns
/// - `200 OK` - Top-level comments, newest first, each with approved replies oldest first
/// - `404 Not Found` - Article does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles/{id}/comments",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = ApiResponse<Vec<CommentThreadDto>>),
        (status = 404, description = "Article not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_article_comments(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let threads = CommentService::new(&state.db)
        .list_by_article(article_id)
        .await?;

    let dtos: Vec<CommentThreadDto> = threads.into_iter().map(CommentThread::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::success(dtos))))
}

/// List comments for moderation.
///
/// # Access Control
/// - Requires the `X-Admin-Token` header
///
/// # Returns
/// - `200 OK` - Page of comments, newest first, with their article
/// - `401 Unauthorized` - Missing or invalid admin token
/// - `403 Forbidden` - Client address outside the configured allowlist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/comments",
    tag = COMMENT_TAG,
    params(CommentListQuery),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = ApiResponse<PageDto<AdminCommentDto>>),
        (status = 401, description = "Missing or invalid admin token", body = MessageDto),
        (status = 403, description = "Client address not allowed", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    headers: HeaderMap,
    client_ip: ClientIp,
    Query(query): Query<CommentListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::from_state(&state, &headers, &client_ip).require()?;

    let page = PageRequest::clamped(query.page, query.page_size);

    let comments = CommentService::new(&state.db)
        .list_all(query.status.map(Into::into), page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(comments.into_dto(AdminComment::into_dto))),
    ))
}

/// Approve a comment.
///
/// # Access Control
/// - Requires the `X-Admin-Token` header
#[utoipa::path(
    patch,
    path = "/api/admin/comments/{id}/approve",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment approved", body = MessageDto),
        (status = 401, description = "Missing or invalid admin token", body = MessageDto),
        (status = 403, description = "Client address not allowed", body = MessageDto),
        (status = 404, description = "Comment not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn approve_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    client_ip: ClientIp,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::from_state(&state, &headers, &client_ip).require()?;

    CommentService::new(&state.db).approve(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(StatusCode::OK.as_u16(), "comment approved")),
    ))
}

/// Reject a comment.
///
/// # Access Control
/// - Requires the `X-Admin-Token` header
#[utoipa::path(
    patch,
    path = "/api/admin/comments/{id}/reject",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment rejected", body = MessageDto),
        (status = 401, description = "Missing or invalid admin token", body = MessageDto),
        (status = 403, description = "Client address not allowed", body = MessageDto),
        (status = 404, description = "Comment not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn reject_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    client_ip: ClientIp,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::from_state(&state, &headers, &client_ip).require()?;

    CommentService::new(&state.db).reject(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(StatusCode::OK.as_u16(), "comment rejected")),
    ))
}

/// Delete a comment together with its replies.
///
/// # Access Control
/// - Requires the `X-Admin-Token` header
///
/// # Returns
/// - `200 OK` - Comment and replies deleted
/// - `401 Unauthorized` - Missing or invalid admin token
/// - `403 Forbidden` - Client address outside the configured allowlist
/// - `404 Not Found` - Comment does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/comments/{id}",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid admin token", body = MessageDto),
        (status = 403, description = "Client address not allowed", body = MessageDto),
        (status = 404, description = "Comment not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    client_ip: ClientIp,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::from_state(&state, &headers, &client_ip).require()?;

    CommentService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(StatusCode::OK.as_u16(), "comment deleted")),
    ))
}
