use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        tag::{CreateTagDto, TagDto, TagWithCountDto, UpdateTagDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AdminGuard, client_ip::ClientIp},
        model::tag::{CreateTagParams, Tag, TagWithCount, UpdateTagParams},
        service::tag::TagService,
        state::AppState,
    },
};

/// Tag for grouping tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tag";

/// List all tags ordered by name.
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "Successfully retrieved tags", body = ApiResponse<Vec<TagDto>>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_tags(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tags = TagService::new(&state.db).get_all().await?;

    let dtos: Vec<TagDto> = tags.into_iter().map(Tag::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::success(dtos))))
}

/// List all tags with the number of articles carrying each.
#[utoipa::path(
    get,
    path = "/api/tags/stats",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "Successfully retrieved tag counts", body = ApiResponse<Vec<TagWithCountDto>>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_tag_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tags = TagService::new(&state.db).get_all_with_counts().await?;

    let dtos: Vec<TagWithCountDto> = tags.into_iter().map(TagWithCount::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::success(dtos))))
}

/// Get a tag by ID.
#[utoipa::path(
    get,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tag", body = ApiResponse<TagDto>),
        (status = 404, description = "Tag not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_tag_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let tag = TagService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(tag.into_dto()))))
}

/// Create a tag.
///
/// # Access Control
/// - Requires the `X-Admin-Token` header
///
/// # Returns
/// - `201 Created` - Created tag
/// - `400 Bad Request` - Empty name
/// - `401 Unauthorized` - Missing or invalid admin token
/// - `403 Forbidden` - Client address outside the configured allowlist
/// - `409 Conflict` - Name already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/tags",
    tag = TAG_TAG,
    request_body = CreateTagDto,
    responses(
        (status = 201, description = "Successfully created tag", body = ApiResponse<TagDto>),
        (status = 400, description = "Invalid tag data", body = MessageDto),
        (status = 401, description = "Missing or invalid admin token", body = MessageDto),
        (status = 403, description = "Client address not allowed", body = MessageDto),
        (status = 409, description = "Tag name already exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    client_ip: ClientIp,
    Json(payload): Json<CreateTagDto>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::from_state(&state, &headers, &client_ip).require()?;

    let tag = TagService::new(&state.db)
        .create(CreateTagParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_msg(
            StatusCode::CREATED.as_u16(),
            "tag created",
            tag.into_dto(),
        )),
    ))
}

/// Rename a tag.
///
/// # Access Control
/// - Requires the `X-Admin-Token` header
#[utoipa::path(
    put,
    path = "/api/admin/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    request_body = UpdateTagDto,
    responses(
        (status = 200, description = "Successfully updated tag", body = ApiResponse<TagDto>),
        (status = 400, description = "Invalid tag data", body = MessageDto),
        (status = 401, description = "Missing or invalid admin token", body = MessageDto),
        (status = 403, description = "Client address not allowed", body = MessageDto),
        (status = 404, description = "Tag not found", body = MessageDto),
        (status = 409, description = "Tag name already exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    client_ip: ClientIp,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTagDto>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::from_state(&state, &headers, &client_ip).require()?;

    let tag = TagService::new(&state.db)
        .update(UpdateTagParams::from_dto(id, payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_msg(
            StatusCode::OK.as_u16(),
            "tag updated",
            tag.into_dto(),
        )),
    ))
}

/// Delete a tag and detach it from all articles.
///
/// # Access Control
/// - Requires the `X-Admin-Token` header
#[utoipa::path(
    delete,
    path = "/api/admin/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted tag", body = MessageDto),
        (status = 401, description = "Missing or invalid admin token", body = MessageDto),
        (status = 403, description = "Client address not allowed", body = MessageDto),
        (status = 404, description = "Tag not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    client_ip: ClientIp,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::from_state(&state, &headers, &client_ip).require()?;

    TagService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(StatusCode::OK.as_u16(), "tag deleted")),
    ))
}
