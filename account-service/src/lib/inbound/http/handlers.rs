use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::user::errors::UserError;
use crate::user::models::User;

pub mod list_users;
pub mod login;
pub mod logout;
pub mod me;
pub mod signup;

/// Name of the cookie carrying the access token.
pub const TOKEN_COOKIE: &str = "token";

/// Successful response envelope: `status` is always `"success"`, with the
/// token, message, and data fields present only when the endpoint uses them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuccessBody<T: Serialize + PartialEq> {
    status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiSuccess<T: Serialize + PartialEq> {
    status_code: StatusCode,
    body: SuccessBody<T>,
    cookie: Option<String>,
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code,
            body: SuccessBody {
                status: "success",
                token: None,
                message: None,
                data: Some(data),
            },
            cookie: None,
        }
    }

    /// Include the access token in the body (signup/login responses).
    pub fn with_token(mut self, token: String) -> Self {
        self.body.token = Some(token);
        self
    }

    /// Attach a `Set-Cookie` header to the response.
    pub fn with_cookie(mut self, cookie: String) -> Self {
        self.cookie = Some(cookie);
        self
    }
}

impl ApiSuccess<()> {
    /// Message-only success envelope (logout).
    pub fn message(status_code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code,
            body: SuccessBody {
                status: "success",
                token: None,
                message: Some(message.into()),
                data: None,
            },
            cookie: None,
        }
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        let mut response = (self.status_code, Json(self.body)).into_response();
        if let Some(cookie) = self.cookie {
            if let Ok(value) = cookie.parse() {
                response.headers_mut().append(SET_COOKIE, value);
            }
        }
        response
    }
}

/// Expected, recoverable request rejections plus the internal-error case.
///
/// Expected rejections (`Validation` through `Forbidden`) render as
/// `status: "fail"` with their message intact. `Internal` renders as
/// `status: "error"`; its detail is logged in full but withheld from the
/// response body in release builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed input (400). Duplicate email also lands here: this system
    /// reports conflicts as 400, not 409.
    Validation(String),
    /// Missing, invalid, or expired credentials (401).
    Unauthenticated(String),
    /// Authenticated but lacking the required role (403).
    Forbidden(String),
    /// Unexpected failure (500).
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "fail", msg),
            ApiError::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, "fail", msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "fail", msg),
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "Internal error while handling request");
                let message = if cfg!(debug_assertions) {
                    detail
                } else {
                    "Something went wrong".to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, "error", message)
            }
        };

        (
            status_code,
            Json(ErrorBody {
                status,
                message,
            }),
        )
            .into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    status: &'static str,
    message: String,
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailAlreadyInUse
            | UserError::InvalidUserId(_)
            | UserError::InvalidEmail(_)
            | UserError::WeakPassword(_)
            | UserError::InvalidRole(_)
            | UserError::NotFound(_) => ApiError::Validation(err.to_string()),
            UserError::Hashing(_) | UserError::Database(_) | UserError::Unknown(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

/// User representation shared by every endpoint that returns a user.
///
/// Built from the aggregate by reference; the password digest has no field
/// here and so can never be serialized out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.as_str().to_string(),
            role: user.role.to_string(),
        }
    }
}

/// Build the `Set-Cookie` value that stores the token client-side.
pub fn token_cookie(token: &str, max_age_seconds: i64) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        TOKEN_COOKIE, token, max_age_seconds
    )
}

/// Build the `Set-Cookie` value that clears the token cookie.
///
/// Client-side only: the token itself stays valid until natural expiry.
pub fn clear_token_cookie() -> String {
    format!("{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax", TOKEN_COOKIE)
}
