use auth::AccessClaims;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::token_cookie;
use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::ports::UserServicePort;
use crate::domain::user::ports::UserStore;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::PasswordPolicyError;

pub async fn signup<S: UserStore>(
    State(state): State<AppState<S>>,
    Json(body): Json<SignupRequestBody>,
) -> Result<ApiSuccess<SignupResponseData>, ApiError> {
    let command = body.try_into_command()?;

    let user = state.user_service.register(command).await?;

    let claims = AccessClaims::new(user.id, user.email.as_str(), state.token_ttl_seconds);
    let token = state
        .authenticator
        .issue_token(&claims)
        .map_err(|e| ApiError::Internal(format!("Token generation failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        SignupResponseData { user: (&user).into() },
    )
    .with_cookie(token_cookie(&token, state.token_ttl_seconds))
    .with_token(token))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequestBody {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    password_confirm: String,
}

#[derive(Debug, Clone, Error)]
enum ParseSignupRequestError {
    #[error("First name must not be empty")]
    EmptyFirstName,

    #[error("Last name must not be empty")]
    EmptyLastName,

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("{0}")]
    Password(#[from] PasswordPolicyError),

    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl SignupRequestBody {
    fn try_into_command(self) -> Result<SignupCommand, ParseSignupRequestError> {
        let first_name = self.first_name.trim().to_string();
        if first_name.is_empty() {
            return Err(ParseSignupRequestError::EmptyFirstName);
        }

        let last_name = self.last_name.trim().to_string();
        if last_name.is_empty() {
            return Err(ParseSignupRequestError::EmptyLastName);
        }

        let email = EmailAddress::new(self.email)?;

        if self.password != self.password_confirm {
            return Err(ParseSignupRequestError::PasswordMismatch);
        }
        let password = Password::new(self.password)?;

        Ok(SignupCommand::new(first_name, last_name, email, password))
    }
}

impl From<ParseSignupRequestError> for ApiError {
    fn from(err: ParseSignupRequestError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupResponseData {
    pub user: UserData,
}
