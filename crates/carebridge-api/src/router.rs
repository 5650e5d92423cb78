//! Route definitions for the CareBridge HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use carebridge_core::config::server::CorsConfig;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(donor_routes())
        .merge(orphanage_routes())
        .merge(requirement_routes())
        .merge(donation_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: register, OTP verification, login, refresh, me.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/verify-otp", post(handlers::auth::verify_otp))
        .route("/auth/resend-otp", post(handlers::auth::resend_otp))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
        .route("/auth/me", put(handlers::auth::update_me))
}

/// Donor profile self-service.
fn donor_routes() -> Router<AppState> {
    Router::new()
        .route("/donors", post(handlers::donor::create_profile))
        .route("/donors/me", get(handlers::donor::get_my_profile))
        .route("/donors/me", put(handlers::donor::update_my_profile))
}

/// Orphanage profiles and public directory.
fn orphanage_routes() -> Router<AppState> {
    Router::new()
        .route("/orphanages", post(handlers::orphanage::create_profile))
        .route("/orphanages", get(handlers::orphanage::list))
        .route("/orphanages/me", get(handlers::orphanage::get_my_profile))
        .route("/orphanages/me", put(handlers::orphanage::update_my_profile))
        .route("/orphanages/{id}", get(handlers::orphanage::get_by_id))
}

/// Requirement postings and public need listings.
fn requirement_routes() -> Router<AppState> {
    Router::new()
        .route("/requirements", post(handlers::requirement::create))
        .route("/requirements/mine", get(handlers::requirement::list_mine))
        .route("/requirements/{id}", put(handlers::requirement::update))
        .route("/requirements/{id}", delete(handlers::requirement::delete))
        .route(
            "/requirements/public",
            get(handlers::requirement::list_public),
        )
        .route(
            "/requirements/orphanage/{id}",
            get(handlers::requirement::list_public_for_orphanage),
        )
}

/// Donation workflow.
fn donation_routes() -> Router<AppState> {
    Router::new()
        .route("/donations", post(handlers::donation::create))
        .route("/donations/mine", get(handlers::donation::list_mine))
        .route("/donations/received", get(handlers::donation::list_received))
        .route(
            "/donations/{id}/status",
            put(handlers::donation::update_status),
        )
}

/// Liveness probe.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    use http::Method;
    use tower_http::cors::{AllowOrigin, Any};

    let mut cors = CorsLayer::new();

    if config.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(AllowOrigin::list(origins));
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();

    cors.allow_methods(methods)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(config.max_age_seconds))
}
