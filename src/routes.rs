// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{entries, score, stats, transfer},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (score, entries, transfer, stats).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (entry store, config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        HeaderValue::from_static("http://localhost:3000"),
        HeaderValue::from_static("http://127.0.0.1:3000"),
        HeaderValue::from_static("http://localhost:5173"),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    // Stateless previews for entry forms
    let score_routes = Router::new()
        .route("/", post(score::preview_sheet))
        .route("/subject", post(score::preview_subject));

    let entry_routes = Router::new()
        .route(
            "/",
            get(entries::list_entries)
                .post(entries::create_entry)
                .delete(entries::clear_entries),
        )
        .route(
            "/{id}",
            get(entries::get_entry)
                .put(entries::update_entry)
                .delete(entries::delete_entry),
        );

    let transfer_routes = Router::new()
        .route("/export", get(transfer::export_entries))
        .route("/import", post(transfer::import_entries));

    let stats_routes = Router::new()
        .route("/", get(stats::get_dashboard))
        .route("/errors", get(stats::get_error_analysis));

    Router::new()
        .nest("/api/score", score_routes)
        .nest("/api/entries", entry_routes)
        .nest("/api/transfer", transfer_routes)
        .nest("/api/stats", stats_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
