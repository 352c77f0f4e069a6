use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::ObjectKind;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindCountResponse {
    pub kind: ObjectKind,
    pub label: String,
    pub count: i64,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// Number of buildings
    pub buildings: i64,
    /// Number of rooms
    pub rooms: i64,
    /// Number of room objects across every kind
    pub devices: i64,
    /// Estimated number of active devices
    pub active_devices: i64,
    /// Largest per-kind count, used to scale bar charts
    pub max_kind_count: i64,
    /// Count per object kind
    pub by_kind: Vec<KindCountResponse>,
    /// Time the figures were computed
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
}
