use auth::TokenError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use axum::Extension;

use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::domain::user::ports::UserStore;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::TOKEN_COOKIE;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Identity resolved by the access gate, attached to request extensions.
///
/// Lives only for the request: nothing is cached across requests, and the
/// role is whatever the store held at verification time.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// Access gate: extract, verify, resolve, attach.
///
/// Every failure mode is a 401; expiry is distinguished from other
/// invalidity only in the message, never in the status code.
pub async fn authenticate<S: UserStore>(
    State(state): State<AppState<S>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // 1. Extract: Authorization header first, token cookie as fallback
    let token = extract_token(&req).ok_or_else(|| {
        ApiError::Unauthenticated(
            "You are not logged in. Please log in to get access.".to_string(),
        )
    })?;

    // 2. Verify signature and expiry
    let claims = state.authenticator.verify_token(&token).map_err(|e| {
        tracing::warn!(cause = %e, "Token verification failed");
        match e {
            TokenError::Expired => ApiError::Unauthenticated(
                "Your token has expired. Please log in again.".to_string(),
            ),
            _ => ApiError::Unauthenticated("Invalid token. Please log in again.".to_string()),
        }
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(cause = %e, "Token subject is not a valid user id");
        ApiError::Unauthenticated("Invalid token. Please log in again.".to_string())
    })?;

    // 3. Resolve the subject against the user store; a valid signature for a
    // deleted account is rejected here
    let user = state
        .user_service
        .get_user(&user_id)
        .await
        .map_err(|e| match e {
            UserError::NotFound(_) => ApiError::Unauthenticated(
                "The user belonging to this token no longer exists.".to_string(),
            ),
            other => ApiError::from(other),
        })?;

    // 4. Attach the identity for the rest of the request's lifetime
    req.extensions_mut().insert(AuthenticatedUser { user });

    Ok(next.run(req).await)
}

/// Authorize stage: admin-only routes layer this after `authenticate`.
pub async fn require_admin(
    Extension(authenticated): Extension<AuthenticatedUser>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if authenticated.user.role != Role::Admin {
        return Err(ApiError::Forbidden(
            "You do not have permission to perform this action".to_string(),
        ));
    }

    Ok(next.run(req).await)
}

fn extract_token(req: &Request) -> Option<String> {
    bearer_token(req).or_else(|| cookie_token(req))
}

fn bearer_token(req: &Request) -> Option<String> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;

    value
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
}

fn cookie_token(req: &Request) -> Option<String> {
    for value in req.headers().get_all(header::COOKIE) {
        let Ok(cookies) = value.to_str() else {
            continue;
        };
        for pair in cookies.split(';') {
            let token = pair
                .trim()
                .strip_prefix(TOKEN_COOKIE)
                .and_then(|rest| rest.strip_prefix('='));
            if let Some(token) = token {
                if !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }
    None
}
