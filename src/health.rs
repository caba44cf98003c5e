use chrono::Utc;

use crate::constants::HEALTH_SERVICE_NAME;
use crate::models::HealthStatus;

/// Liveness payload reported by the `health_check` tool
pub fn health_status() -> HealthStatus {
    HealthStatus {
        status: "healthy".to_string(),
        service: HEALTH_SERVICE_NAME.to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}
