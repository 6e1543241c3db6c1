//! Route definitions for the OCC HTTP API.
//!
//! REST routes are mounted under `/api`; the hub lives at `/ws`.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::state::AppState;

/// Builds the complete application: routes, middleware and state.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(request_logging))
}

/// Builds the router with all routes bound to the given state.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(presence_routes())
        .merge(relay_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .route("/ws", get(handlers::ws::ws_upgrade))
        .with_state(state)
}

/// Presence endpoints
fn presence_routes() -> Router<AppState> {
    Router::new()
        .route("/presence", get(handlers::presence::list_presence))
        .route(
            "/presence/{user_name}",
            get(handlers::presence::get_user_presence),
        )
}

/// Notification and broadcast relays
fn relay_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            post(handlers::broadcast::send_notification),
        )
        .route("/broadcast", post(handlers::broadcast::send_broadcast))
}

/// Health check endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
