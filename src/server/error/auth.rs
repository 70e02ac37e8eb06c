use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::MessageDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The request carried no `X-Admin-Token` header, or it was empty.
    #[error("missing admin token")]
    MissingToken,

    /// The supplied token does not match the configured admin token.
    #[error("invalid admin token")]
    InvalidToken,

    /// An address allowlist is configured and the client address is not on it.
    #[error("ip not allowed")]
    IpNotAllowed,
}

/// Converts authentication errors into responses.
///
/// # Returns
/// - 401 Unauthorized - Missing or wrong token
/// - 403 Forbidden - Correct token from an address outside the allowlist
///
/// Rejections are logged at debug level; the body only carries the short reason.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected admin request: {}", self);

        let status = match self {
            Self::MissingToken | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::IpNotAllowed => StatusCode::FORBIDDEN,
        };
        (status, Json(MessageDto::new(status.as_u16(), self.to_string()))).into_response()
    }
}
