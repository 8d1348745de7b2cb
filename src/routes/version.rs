//! Version endpoint.
//!
//! Lets a deployment pipeline confirm which build is running in each
//! environment, e.g. `curl http://host:8080/version` after rolling out a new image.

use crate::config::VERSION_BODY;

/// Reports the crate version baked in at compile time.
pub async fn version() -> &'static str {
    VERSION_BODY
}
