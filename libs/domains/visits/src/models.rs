use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response of `GET /count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VisitsResponse {
    /// Counter value after this visit
    pub visits: i64,
}

/// Overall service status reported by `GET /health`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Ok,
    /// Serving, but without a working store
    Degraded,
    Error,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Degraded => "DEGRADED",
            Self::Error => "ERROR",
        }
    }
}

/// Store connectivity as seen by the last health probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RedisStatus {
    Connected,
    /// No connection was established at startup
    #[serde(rename = "not connected")]
    NotConnected,
    /// Ping timed out or the server refused the connection
    Unreachable,
    /// Server reachable but the ping failed
    Disconnected,
}

/// Response of `GET /health`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub redis: RedisStatus,
}

impl HealthReport {
    pub fn ok() -> Self {
        Self {
            status: HealthStatus::Ok,
            redis: RedisStatus::Connected,
        }
    }

    pub fn not_connected() -> Self {
        Self {
            status: HealthStatus::Degraded,
            redis: RedisStatus::NotConnected,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            status: HealthStatus::Degraded,
            redis: RedisStatus::Unreachable,
        }
    }

    pub fn disconnected() -> Self {
        Self {
            status: HealthStatus::Error,
            redis: RedisStatus::Disconnected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_health_report_wire_format() {
        assert_eq!(
            serde_json::to_value(HealthReport::ok()).unwrap(),
            json!({ "status": "OK", "redis": "connected" })
        );
        assert_eq!(
            serde_json::to_value(HealthReport::not_connected()).unwrap(),
            json!({ "status": "DEGRADED", "redis": "not connected" })
        );
        assert_eq!(
            serde_json::to_value(HealthReport::unreachable()).unwrap(),
            json!({ "status": "DEGRADED", "redis": "unreachable" })
        );
        assert_eq!(
            serde_json::to_value(HealthReport::disconnected()).unwrap(),
            json!({ "status": "ERROR", "redis": "disconnected" })
        );
    }

    #[test]
    fn test_status_label_matches_wire_value() {
        for status in [HealthStatus::Ok, HealthStatus::Degraded, HealthStatus::Error] {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, status.as_str());
        }
    }
}
