//! HTTP boundary of the storefront: product search, reviews, testimonials and
//! review moderation. Ranking and synthetic content come from
//! `storefront-engine`; this crate owns catalog loading, auth and persistence.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use storefront_common::{CatalogItem, Config};

pub mod auth;
pub mod catalog;
pub mod error;
pub mod rest;
pub mod store;

use auth::JwtService;
use store::ReviewStore;

pub struct AppState {
    pub config: Config,
    /// Read-only snapshot loaded at startup.
    pub catalog: Arc<Vec<CatalogItem>>,
    pub store: Arc<dyn ReviewStore>,
    pub jwt: JwtService,
}

impl AppState {
    pub fn new(config: Config, catalog: Vec<CatalogItem>, store: Arc<dyn ReviewStore>) -> Self {
        let jwt = JwtService::new(&config.jwt_secret, config.jwt_issuer.clone());
        Self {
            config,
            catalog: Arc::new(catalog),
            store,
            jwt,
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // Storefront
        .route("/api/search", get(rest::api_search))
        .route("/api/testimonials", get(rest::api_testimonials))
        .route(
            "/api/reviews",
            get(rest::reviews::api_reviews).post(rest::reviews::api_create_review),
        )
        // Moderation
        .route(
            "/api/admin/reviews",
            get(rest::admin::api_admin_reviews).delete(rest::admin::api_admin_delete_review),
        )
        .route(
            "/api/admin/reviews/{id}",
            axum::routing::patch(rest::admin::api_admin_update_review),
        )
        .with_state(state)
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Search results and review lists are per-request; never cache
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Logging layer: method + path only (query strings carry search terms)
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}
