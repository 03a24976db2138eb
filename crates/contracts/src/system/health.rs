use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
///
/// `status` is `healthy`, `degraded` or `unhealthy`; anything but `healthy`
/// comes back with a 503 and the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub database: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }

    pub fn database_connected(&self) -> bool {
        self.database == "connected"
    }
}
