//! Response envelope shared by every endpoint.
//!
//! Successful responses wrap their payload in [`ApiResponse`], paginated payloads use
//! [`PageDto`], and errors or message-only responses use [`MessageDto`].

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default message attached to successful responses.
pub const SUCCESS_MSG: &str = "success";

/// Envelope for successful responses carrying a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// HTTP status code mirrored in the body.
    pub code: u16,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 200 response with the default `"success"` message.
    pub fn success(data: T) -> Self {
        Self {
            code: 200,
            msg: SUCCESS_MSG.to_string(),
            data: Some(data),
        }
    }

    /// Response with a custom status code and message.
    pub fn with_msg(code: u16, msg: impl Into<String>, data: T) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: Some(data),
        }
    }
}

/// One page of a paginated listing.
///
/// `page` and `page_size` echo the clamped values actually used by the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageDto<T> {
    pub list: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

/// Envelope without payload, used for errors and message-only responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub code: u16,
    pub msg: String,
}

impl MessageDto {
    pub fn new(code: u16, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }
}
