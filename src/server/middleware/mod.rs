//! Request guards and extractors.
//!
//! - `auth` - `AdminGuard`, checking the `X-Admin-Token` header and the optional address
//!   allowlist against configuration
//! - `client_ip` - `ClientIp` extractor resolving the submitter address of a request

pub mod auth;
pub mod client_ip;
