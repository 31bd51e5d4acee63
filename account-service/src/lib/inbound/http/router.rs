use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::me::me;
use super::handlers::signup::signup;
use super::middleware::authenticate as auth_gate;
use super::middleware::require_admin;
use crate::domain::user::ports::UserStore;
use crate::domain::user::service::UserService;

/// Shared application state.
///
/// Generic over the user store so integration tests can wire an in-memory
/// fake through the same router the binary uses. Everything here is an
/// immutable handle; cloning is cheap.
pub struct AppState<S: UserStore> {
    pub user_service: Arc<UserService<S>>,
    pub authenticator: Arc<Authenticator>,
    pub token_ttl_seconds: i64,
}

impl<S: UserStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            authenticator: Arc::clone(&self.authenticator),
            token_ttl_seconds: self.token_ttl_seconds,
        }
    }
}

pub fn create_router<S: UserStore>(
    user_service: Arc<UserService<S>>,
    authenticator: Arc<Authenticator>,
    token_ttl_seconds: i64,
) -> Router {
    let state = AppState {
        user_service,
        authenticator,
        token_ttl_seconds,
    };

    let public_routes = Router::new()
        .route("/api/auth/signup", post(signup::<S>))
        .route("/api/auth/login", post(login::<S>));

    let protected_routes = Router::new()
        .route("/api/auth/me", get(me))
        .route("/api/auth/logout", post(logout))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_gate::<S>,
        ));

    // Layers run outermost-last: the gate authenticates, then the role check
    let admin_routes = Router::new()
        .route("/api/users", get(list_users::<S>))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_gate::<S>,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
