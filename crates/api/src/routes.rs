//! Router assembly for the registry API.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use depot_registry::RegistryService;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// State handed to every handler: the registry service, constructed
/// once in `main` with its store.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RegistryService>,
}

/// Build the application router.
pub fn router(registry: RegistryService) -> Router {
    let state = AppState {
        registry: Arc::new(registry),
    };

    Router::new()
        .route("/status", get(handlers::status))
        .route("/packages", get(handlers::list).post(handlers::create))
        .route(
            "/packages/{name}",
            get(handlers::fetch).delete(handlers::remove),
        )
        .route("/packages/search/{name}", get(handlers::search))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
