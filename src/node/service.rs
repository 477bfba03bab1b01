use crate::error::ParseError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Status of a single service running on a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Running,
    Degraded,
    Dead,
    Off,
    Unknown,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Running => "running",
            ServiceStatus::Degraded => "degraded",
            ServiceStatus::Dead => "dead",
            ServiceStatus::Off => "off",
            ServiceStatus::Unknown => "unknown",
        }
    }
}

impl FromStr for ServiceStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(ServiceStatus::Running),
            "degraded" => Ok(ServiceStatus::Degraded),
            "dead" => Ok(ServiceStatus::Dead),
            "off" => Ok(ServiceStatus::Off),
            "unknown" => Ok(ServiceStatus::Unknown),
            other => Err(ParseError::UnknownServiceStatus(other.to_string())),
        }
    }
}

/// The overall health of a controller, derived from its services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceHealth {
    Dead,
    Degraded,
    Running,
    Off,
    Unknown,
}

impl ServiceHealth {
    /// Icon class the status indicator renders with.
    pub fn icon(&self) -> &'static str {
        match self {
            ServiceHealth::Dead => "p-icon--power-error",
            ServiceHealth::Degraded => "p-icon--warning",
            ServiceHealth::Running => "p-icon--success",
            ServiceHealth::Off => "p-icon--power-off",
            ServiceHealth::Unknown => "p-icon--power-unknown",
        }
    }
}

// Worst state first; the first one with any service decides the health.
const SEVERITY: [(ServiceStatus, ServiceHealth); 4] = [
    (ServiceStatus::Dead, ServiceHealth::Dead),
    (ServiceStatus::Degraded, ServiceHealth::Degraded),
    (ServiceStatus::Running, ServiceHealth::Running),
    (ServiceStatus::Off, ServiceHealth::Off),
];

/// Collapses a controller's service statuses into a single health value.
pub fn controller_health(services: &[ServiceStatus]) -> ServiceHealth {
    SEVERITY
        .iter()
        .find(|(status, _)| services.contains(status))
        .map_or(ServiceHealth::Unknown, |(_, health)| *health)
}

/// Tooltip text listing how many services are in each known state,
/// e.g. `"2 dead, 1 running"`. `None` when no service is in a known state.
pub fn service_summary(services: &[ServiceStatus]) -> Option<String> {
    let counts = services.iter().counts();
    let parts = SEVERITY
        .iter()
        .filter_map(|(status, _)| {
            counts
                .get(status)
                .map(|count| format!("{} {}", count, status.as_str()))
        })
        .join(", ");

    if parts.is_empty() { None } else { Some(parts) }
}
