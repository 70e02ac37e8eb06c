use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        stats::StatsDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AdminGuard, client_ip::ClientIp},
        service::stats::StatsService,
        state::AppState,
    },
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Get dashboard counters.
///
/// # Access Control
/// - Requires the `X-Admin-Token` header
///
/// # Returns
/// - `200 OK` - Article, category, tag, comment and view counters
/// - `401 Unauthorized` - Missing or invalid admin token
/// - `403 Forbidden` - Client address outside the configured allowlist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Successfully retrieved counters", body = ApiResponse<StatsDto>),
        (status = 401, description = "Missing or invalid admin token", body = MessageDto),
        (status = 403, description = "Client address not allowed", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    client_ip: ClientIp,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::from_state(&state, &headers, &client_ip).require()?;

    let stats = StatsService::new(&state.db).dashboard().await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(stats.into_dto()))))
}
