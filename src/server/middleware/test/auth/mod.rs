use axum::http::{HeaderMap, HeaderValue};

use crate::server::{
    error::auth::AuthError,
    middleware::auth::{AdminGuard, ADMIN_TOKEN_HEADER},
};


const TOKEN: &str = "s3cret-admin-token";

fn headers_with_token(token: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ADMIN_TOKEN_HEADER, HeaderValue::from_static(token));
    headers
}
