//! Route definitions

use std::path::Path;

use axum::{
    Router,
    http::HeaderValue,
    routing::get,
};
use infrastructure::ServerConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{debug, warn};

use crate::{handlers, middleware::NoCacheLayer, state::AppState};

/// Create the main router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let server = state.server.as_ref();

    let router = Router::new()
        // Data endpoints
        .route("/air-quality", get(handlers::air_quality::get_air_quality))
        .route("/weather", get(handlers::weather::get_weather))
        .route("/forecast", get(handlers::forecast::get_forecast))
        // Liveness
        .route("/health", get(handlers::health::health_check));

    let cors = cors_layer(server);

    // Add middleware (order matters: last added = outermost)
    with_static_frontend(router, Path::new(&server.static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(NoCacheLayer::new())
}

/// Mount the frontend build if `static_dir` holds one
///
/// `/` serves `index.html` when present and a JSON banner otherwise; any
/// unmatched path is looked up in `static_dir`.
fn with_static_frontend(router: Router<AppState>, static_dir: &Path) -> Router<AppState> {
    let index = static_dir.join("index.html");
    let router = if index.is_file() {
        debug!(path = %index.display(), "Serving frontend entry document at /");
        router.route_service("/", ServeFile::new(index))
    } else {
        router.route("/", get(handlers::health::root))
    };

    if static_dir.is_dir() {
        router.fallback_service(ServeDir::new(static_dir))
    } else {
        debug!(path = %static_dir.display(), "No static directory, serving API only");
        router
    }
}

/// Any origin when none are configured, otherwise only the listed ones
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if server.allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin
                .parse::<HeaderValue>()
                .inspect_err(|_| warn!(origin = %origin, "Ignoring invalid CORS origin"))
                .ok()
        })
        .collect();
    layer.allow_origin(origins)
}
