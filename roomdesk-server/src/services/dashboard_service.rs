use std::sync::Arc;

use roomdesk_api::models::{DashboardResponse, KindCountResponse, ObjectKind};
use time::OffsetDateTime;

use crate::configs::Storage;
use crate::services::{BuildingService, Manager, RoomObjectService, RoomService};

/// Share of all devices reported as active.
pub const ACTIVE_DEVICE_PERCENT: i64 = 85;

#[derive(Debug, Clone, PartialEq)]
pub struct Kpis {
    pub buildings: i64,
    pub rooms: i64,
    pub by_kind: Vec<(ObjectKind, i64)>,
    pub devices: i64,
    pub active_devices: i64,
    pub max_kind_count: i64,
    pub generated_at: OffsetDateTime,
}

impl From<Kpis> for DashboardResponse {
    fn from(kpis: Kpis) -> Self {
        DashboardResponse {
            buildings: kpis.buildings,
            rooms: kpis.rooms,
            devices: kpis.devices,
            active_devices: kpis.active_devices,
            max_kind_count: kpis.max_kind_count,
            by_kind: kpis
                .by_kind
                .into_iter()
                .map(|(kind, count)| KindCountResponse {
                    kind,
                    label: kind.label().to_string(),
                    count,
                })
                .collect(),
            generated_at: kpis.generated_at,
        }
    }
}

pub struct DashboardService {
    buildings: Arc<BuildingService>,
    rooms: Arc<RoomService>,
    objects: Vec<Arc<RoomObjectService>>,
}

impl DashboardService {
    pub fn new(
        buildings: Arc<BuildingService>,
        rooms: Arc<RoomService>,
        objects: Vec<Arc<RoomObjectService>>,
    ) -> Self {
        Self {
            buildings,
            rooms,
            objects,
        }
    }

    pub fn from_storage(storage: Arc<Storage>) -> Self {
        Self::new(
            Arc::new(BuildingService::new(storage.clone())),
            Arc::new(RoomService::new(storage.clone())),
            RoomObjectService::all(storage),
        )
    }

    /// Aggregate counts for the home page. A failing manager only zeroes
    /// its own figure.
    pub async fn kpis(&self) -> Kpis {
        let buildings = count_or_zero(self.buildings.as_ref()).await;
        let rooms = count_or_zero(self.rooms.as_ref()).await;

        let mut by_kind = Vec::with_capacity(self.objects.len());
        for service in self.objects.iter() {
            by_kind.push((service.kind(), count_or_zero(service.as_ref()).await));
        }

        let devices: i64 = by_kind.iter().map(|(_, count)| count).sum();
        let max_kind_count = by_kind.iter().map(|(_, count)| *count).max().unwrap_or(0);

        Kpis {
            buildings,
            rooms,
            by_kind,
            devices,
            active_devices: devices * ACTIVE_DEVICE_PERCENT / 100,
            max_kind_count,
            generated_at: OffsetDateTime::now_utc(),
        }
    }
}

async fn count_or_zero<M: Manager + ?Sized>(manager: &M) -> i64 {
    match manager.count().await {
        Ok(count) => count,
        Err(e) => {
            tracing::warn!("counting {} failed, reporting zero: {}", manager.entity_name(), e);
            0
        }
    }
}
