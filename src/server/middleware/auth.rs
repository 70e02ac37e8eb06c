use axum::http::HeaderMap;

use crate::server::{error::auth::AuthError, middleware::client_ip::ClientIp, state::AppState};

/// Header carrying the admin token on admin requests.
pub const ADMIN_TOKEN_HEADER: &str = "X-Admin-Token";

/// Guards admin endpoints by comparing the request's token with the configured one and,
/// when an allowlist is configured, the client address with the allowed addresses.
///
/// # Example
///
/// ```rust,ignore
/// AdminGuard::from_state(&state, &headers, &client_ip).require()?;
/// ```
pub struct AdminGuard<'a> {
    expected: &'a str,
    headers: &'a HeaderMap,
    allowed_ips: &'a [String],
    client_ip: &'a str,
}

impl<'a> AdminGuard<'a> {
    /// Creates a guard that only checks the token.
    pub fn new(expected: &'a str, headers: &'a HeaderMap) -> Self {
        Self {
            expected,
            headers,
            allowed_ips: &[],
            client_ip: "",
        }
    }

    /// Creates a guard from the configured token and address allowlist.
    pub fn from_state(
        state: &'a AppState,
        headers: &'a HeaderMap,
        client_ip: &'a ClientIp,
    ) -> Self {
        Self::new(&state.admin_token, headers)
            .allowed_ips(&state.admin_allowed_ips, &client_ip.0)
    }

    /// Restricts access to requests from `allowed_ips`. An empty list allows every address.
    pub fn allowed_ips(mut self, allowed_ips: &'a [String], client_ip: &'a str) -> Self {
        self.allowed_ips = allowed_ips;
        self.client_ip = client_ip;
        self
    }

    /// Checks the `X-Admin-Token` header, then the client address.
    ///
    /// # Returns
    /// - `Ok(())` - Header equal to the configured token and address allowed
    /// - `Err(AuthError::MissingToken)` - Header absent, empty or not valid UTF-8
    /// - `Err(AuthError::InvalidToken)` - Header does not match
    /// - `Err(AuthError::IpNotAllowed)` - Allowlist configured and the address is not on it
    pub fn require(&self) -> Result<(), AuthError> {
        let token = self
            .headers
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;

        if token != self.expected {
            return Err(AuthError::InvalidToken);
        }

        if !self.allowed_ips.is_empty() && !self.allowed_ips.iter().any(|ip| ip == self.client_ip) {
            return Err(AuthError::IpNotAllowed);
        }

        Ok(())
    }
}
