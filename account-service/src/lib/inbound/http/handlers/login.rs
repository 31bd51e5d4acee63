use auth::AccessClaims;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::token_cookie;
use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::ports::UserServicePort;
use crate::domain::user::ports::UserStore;
use crate::inbound::http::router::AppState;

/// Single rejection message for every credential failure, so the endpoint
/// cannot be used as a user-existence oracle.
const BAD_CREDENTIALS: &str = "Incorrect email or password";

pub async fn login<S: UserStore>(
    State(state): State<AppState<S>>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let user = state
        .user_service
        .get_user_by_email(&body.email)
        .await?
        .ok_or_else(|| ApiError::Unauthenticated(BAD_CREDENTIALS.to_string()))?;

    let claims = AccessClaims::new(user.id, user.email.as_str(), state.token_ttl_seconds);

    let token = state
        .authenticator
        .authenticate(&body.password, &user.password_hash, claims)
        .map_err(|e| match e {
            auth::AuthError::InvalidCredentials => {
                ApiError::Unauthenticated(BAD_CREDENTIALS.to_string())
            }
            auth::AuthError::Password(err) => {
                ApiError::Internal(format!("Password verification failed: {}", err))
            }
            auth::AuthError::Token(err) => {
                ApiError::Internal(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData { user: (&user).into() },
    )
    .with_cookie(token_cookie(&token, state.token_ttl_seconds))
    .with_token(token))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub user: UserData,
}
