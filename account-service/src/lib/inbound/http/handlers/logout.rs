use axum::http::StatusCode;

use super::clear_token_cookie;
use super::ApiError;
use super::ApiSuccess;

/// Log the caller out by clearing the token cookie.
///
/// There is no server-side revocation list: a token presented via the
/// Authorization header keeps working until it expires naturally. The short
/// configured lifetime is what bounds that window.
pub async fn logout() -> Result<ApiSuccess<()>, ApiError> {
    Ok(
        ApiSuccess::message(StatusCode::OK, "Logged out successfully")
            .with_cookie(clear_token_cookie()),
    )
}
