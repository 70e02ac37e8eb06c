use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        category::{CategoryDto, CategoryWithCountDto, CreateCategoryDto, UpdateCategoryDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AdminGuard, client_ip::ClientIp},
        model::category::{
            Category, CategoryWithCount, CreateCategoryParams, UpdateCategoryParams,
        },
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// List all categories ordered by name.
///
/// # Returns
/// - `200 OK` - All categories
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved categories", body = ApiResponse<Vec<CategoryDto>>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db).get_all().await?;

    let dtos: Vec<CategoryDto> = categories.into_iter().map(Category::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::success(dtos))))
}

/// List all categories with the number of articles in each.
///
/// # Returns
/// - `200 OK` - All categories with article counts
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories/stats",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved category counts", body = ApiResponse<Vec<CategoryWithCountDto>>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_category_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db)
        .get_all_with_counts()
        .await?;

    let dtos: Vec<CategoryWithCountDto> = categories
        .into_iter()
        .map(CategoryWithCount::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::success(dtos))))
}

/// Get a category by ID.
///
/// # Returns
/// - `200 OK` - Category details
/// - `404 Not Found` - Category does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved category", body = ApiResponse<CategoryDto>),
        (status = 404, description = "Category not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_category_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(category.into_dto()))))
}

/// Create a category.
///
/// # Access Control
/// - Requires the `X-Admin-Token` header
///
/// # Returns
/// - `201 Created` - Created category
/// - `400 Bad Request` - Empty name
/// - `401 Unauthorized` - Missing or invalid admin token
/// - `403 Forbidden` - Client address outside the configured allowlist
/// - `409 Conflict` - Name already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Successfully created category", body = ApiResponse<CategoryDto>),
        (status = 400, description = "Invalid category data", body = MessageDto),
        (status = 401, description = "Missing or invalid admin token", body = MessageDto),
        (status = 403, description = "Client address not allowed", body = MessageDto),
        (status = 409, description = "Category name already exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    client_ip: ClientIp,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::from_state(&state, &headers, &client_ip).require()?;

    let category = CategoryService::new(&state.db)
        .create(CreateCategoryParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_msg(
            StatusCode::CREATED.as_u16(),
            "category created",
            category.into_dto(),
        )),
    ))
}

/// Rename or re-describe a category.
///
/// # Access Control
/// - Requires the `X-Admin-Token` header
///
/// # Returns
/// - `200 OK` - Updated category
/// - `400 Bad Request` - Empty name
/// - `401 Unauthorized` - Missing or invalid admin token
/// - `403 Forbidden` - Client address outside the configured allowlist
/// - `404 Not Found` - Category does not exist
/// - `409 Conflict` - Name already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Successfully updated category", body = ApiResponse<CategoryDto>),
        (status = 400, description = "Invalid category data", body = MessageDto),
        (status = 401, description = "Missing or invalid admin token", body = MessageDto),
        (status = 403, description = "Client address not allowed", body = MessageDto),
        (status = 404, description = "Category not found", body = MessageDto),
        (status = 409, description = "Category name already exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    client_ip: ClientIp,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::from_state(&state, &headers, &client_ip).require()?;

    let category = CategoryService::new(&state.db)
        .update(UpdateCategoryParams::from_dto(id, payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_msg(
            StatusCode::OK.as_u16(),
            "category updated",
            category.into_dto(),
        )),
    ))
}

/// Delete a category that no article references.
///
/// # Access Control
/// - Requires the `X-Admin-Token` header
///
/// # Returns
/// - `200 OK` - Category deleted
/// - `400 Bad Request` - Articles still reference the category
/// - `401 Unauthorized` - Missing or invalid admin token
/// - `403 Forbidden` - Client address outside the configured allowlist
/// - `404 Not Found` - Category does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted category", body = MessageDto),
        (status = 400, description = "Category still has articles", body = MessageDto),
        (status = 401, description = "Missing or invalid admin token", body = MessageDto),
        (status = 403, description = "Client address not allowed", body = MessageDto),
        (status = 404, description = "Category not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    client_ip: ClientIp,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::from_state(&state, &headers, &client_ip).require()?;

    CategoryService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(StatusCode::OK.as_u16(), "category deleted")),
    ))
}
