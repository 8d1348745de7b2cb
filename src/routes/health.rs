//! Health check endpoint for container orchestration.
//!
//! A liveness probe: it answers 200 whenever the process can serve HTTP at all.
//! Used by Kubernetes, ECS, systemd and load balancers.

use crate::config::HEALTH_BODY;

/// Health check handler.
pub async fn health() -> &'static str {
    HEALTH_BODY
}
