//! myservice: a minimal HTTP responder for validating deployment pipelines.
//!
//! Answers `/`, `/health` and `/version` with fixed text bodies on a single
//! plain-HTTP listener.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use config::AppConfig;
pub use error::{ConfigError, ServerError};
pub use http::Listener;
pub use routes::create_router;
