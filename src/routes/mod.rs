//! HTTP route handlers.
//!
//! Three literal routes. Handlers are mounted with `any` because the service
//! does not discriminate on method; everything else falls through to axum's
//! default 404. Probe routes carry `Cache-Control: no-store`.

pub mod health;
pub mod home;
pub mod version;

use axum::{middleware, routing::any, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{RoutesConfig, CACHE_CONTROL_PROBE};
use crate::middleware::trace_request;

/// Creates the Axum router. `/version` is mounted only when enabled.
pub fn create_router(config: &RoutesConfig) -> Router {
    let mut probe_routes = Router::new().route("/health", any(health::health));

    if config.version {
        probe_routes = probe_routes.route("/version", any(version::version));
    }

    let probe_routes = probe_routes.layer(SetResponseHeaderLayer::if_not_present(
        CACHE_CONTROL,
        HeaderValue::from_static(CACHE_CONTROL_PROBE),
    ));

    Router::new()
        .route("/", any(home::index))
        .merge(probe_routes)
        // Outermost, so unrouted requests are traced as well
        .layer(middleware::from_fn(trace_request))
}
