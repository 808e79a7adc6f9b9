//! HTTP DTOs for monitor endpoints.

use serde::Serialize;

/// Health check payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    /// Seconds since the server was wired up.
    pub uptime: u64,
    pub version: &'static str,
    pub platform: &'static str,
    pub environment: String,
}

/// Static service description.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfoResponse {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub features: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_serializes_all_fields() {
        let health = HealthResponse {
            status: "healthy",
            timestamp: "2024-01-15T10:30:00Z".to_string(),
            uptime: 42,
            version: "0.1.0",
            platform: "SALOMÃO.AI",
            environment: "development".to_string(),
        };

        let json = serde_json::to_value(&health).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["uptime"], 42);
        assert_eq!(json["platform"], "SALOMÃO.AI");
        assert_eq!(json["environment"], "development");
    }
}
