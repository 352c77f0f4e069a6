use std::sync::Arc;

use async_trait::async_trait;
use roomdesk_api::models::ObjectKind;

use crate::configs::Storage;
use crate::errors::ManagerError;
use crate::models::RoomObject;
use crate::repositories::RoomObjectRepository;
use crate::services::Manager;

/// Manager for one [`ObjectKind`]. Doors, lamps, sensors and the rest all go
/// through this type; only the kind differs.
#[derive(Clone)]
pub struct RoomObjectService {
    repository: RoomObjectRepository,
}

impl RoomObjectService {
    pub fn new(storage: Arc<Storage>, kind: ObjectKind) -> Self {
        Self {
            repository: RoomObjectRepository::new(storage, kind),
        }
    }

    /// One service per kind, in [`ObjectKind::ALL`] order.
    pub fn all(storage: Arc<Storage>) -> Vec<Arc<RoomObjectService>> {
        ObjectKind::ALL
            .into_iter()
            .map(|kind| Arc::new(RoomObjectService::new(storage.clone(), kind)))
            .collect()
    }

    pub fn kind(&self) -> ObjectKind {
        self.repository.kind()
    }

    /// Accepts both `i32` and `i64` room ids; both compare against the same column.
    pub async fn find_by_room_id(
        &self,
        room_id: impl Into<i64> + Send,
    ) -> Result<Vec<RoomObject>, ManagerError> {
        Ok(self.repository.find_by_room_id(room_id.into()).await?)
    }

    pub async fn find_by_custom_name(&self, name: &str) -> Result<Vec<RoomObject>, ManagerError> {
        Ok(self.repository.find_by_custom_name(name).await?)
    }

    pub async fn delete_by_custom_name(&self, name: &str) -> Result<u64, ManagerError> {
        let mut tx = self.repository.get_pool().begin().await?;
        let removed = self.repository.delete_by_custom_name(name, &mut tx).await?;
        tx.commit().await?;

        tracing::info!(kind = %self.kind(), name, removed, "room objects deleted by name");

        Ok(removed)
    }
}

#[async_trait]
impl Manager for RoomObjectService {
    type Entity = RoomObject;

    fn entity_name(&self) -> &'static str {
        self.kind().as_str()
    }

    async fn save(&self, item: RoomObject) -> Result<RoomObject, ManagerError> {
        let mut tx = self.repository.get_pool().begin().await?;
        let id = self.repository.save(&item, &mut tx).await?;
        tx.commit().await?;

        tracing::info!(kind = %self.kind(), id, room_id = ?item.room_id, "room object saved");

        self.find_by_id(id).await
    }

    async fn save_all(&self, items: Vec<RoomObject>) -> Result<Vec<RoomObject>, ManagerError> {
        let mut tx = self.repository.get_pool().begin().await?;
        let mut ids = Vec::with_capacity(items.len());
        for item in items.iter() {
            ids.push(self.repository.save(item, &mut tx).await?);
        }
        tx.commit().await?;

        tracing::info!(kind = %self.kind(), saved = ids.len(), "room objects saved");

        let mut saved = Vec::with_capacity(ids.len());
        for id in ids {
            saved.push(self.find_by_id(id).await?);
        }

        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<RoomObject>, ManagerError> {
        Ok(self.repository.find_all().await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<RoomObject, ManagerError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ManagerError::not_found(self.entity_name(), id))
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, ManagerError> {
        Ok(self.repository.exists_by_id(id).await?)
    }

    async fn count(&self) -> Result<i64, ManagerError> {
        Ok(self.repository.count().await?)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ManagerError> {
        let mut tx = self.repository.get_pool().begin().await?;
        let removed = self.repository.delete(id, &mut tx).await?;
        tx.commit().await?;

        tracing::info!(kind = %self.kind(), id, removed, "room object deleted");

        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, ManagerError> {
        let mut tx = self.repository.get_pool().begin().await?;
        let removed = self.repository.delete_all(&mut tx).await?;
        tx.commit().await?;

        tracing::warn!(kind = %self.kind(), removed, "all room objects deleted");

        Ok(removed)
    }
}
