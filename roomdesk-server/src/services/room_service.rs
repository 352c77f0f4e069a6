use std::sync::Arc;

use async_trait::async_trait;

use crate::configs::Storage;
use crate::errors::ManagerError;
use crate::models::Room;
use crate::repositories::RoomRepository;
use crate::services::Manager;

#[derive(Clone)]
pub struct RoomService {
    repository: RoomRepository,
}

impl RoomService {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self {
            repository: RoomRepository::new(storage),
        }
    }

    /// Rooms offered for selection by the object editor.
    pub async fn get_all_rooms(&self) -> Result<Vec<Room>, ManagerError> {
        self.find_all().await
    }

    pub async fn find_by_building_id(&self, building_id: i32) -> Result<Vec<Room>, ManagerError> {
        Ok(self.repository.find_by_building_id(building_id).await?)
    }
}

#[async_trait]
impl Manager for RoomService {
    type Entity = Room;

    fn entity_name(&self) -> &'static str {
        "room"
    }

    async fn save(&self, item: Room) -> Result<Room, ManagerError> {
        let mut tx = self.repository.get_pool().begin().await?;
        let id = self.repository.save(&item, &mut tx).await?;
        tx.commit().await?;

        tracing::info!(room_id = id, building_id = item.building_id, "room saved");

        self.find_by_id(id).await
    }

    async fn save_all(&self, items: Vec<Room>) -> Result<Vec<Room>, ManagerError> {
        let mut tx = self.repository.get_pool().begin().await?;
        let mut ids = Vec::with_capacity(items.len());
        for item in items.iter() {
            ids.push(self.repository.save(item, &mut tx).await?);
        }
        tx.commit().await?;

        let mut saved = Vec::with_capacity(ids.len());
        for id in ids {
            saved.push(self.find_by_id(id).await?);
        }

        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<Room>, ManagerError> {
        Ok(self.repository.find_all().await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Room, ManagerError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ManagerError::not_found(self.entity_name(), id))
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, ManagerError> {
        Ok(self.repository.find_by_id(id).await?.is_some())
    }

    async fn count(&self) -> Result<i64, ManagerError> {
        Ok(self.repository.count().await?)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ManagerError> {
        let mut tx = self.repository.get_pool().begin().await?;
        let removed = self.repository.delete(id, &mut tx).await?;
        tx.commit().await?;

        tracing::info!(room_id = id, removed, "room deleted");

        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, ManagerError> {
        let mut tx = self.repository.get_pool().begin().await?;
        let removed = self.repository.delete_all(&mut tx).await?;
        tx.commit().await?;

        tracing::warn!(removed, "all rooms deleted");

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use crate::configs::{Database, SchemaManager};
    use crate::models::Building;
    use crate::services::BuildingService;

    use super::*;

    async fn setup_test_db() -> Arc<Storage> {
        Arc::new(
            Storage::new(
                Database {
                    migration_path: None,
                    clean_start: true,
                    url: String::from("sqlite::memory:"),
                },
                SchemaManager::default(),
            )
            .await
            .unwrap(),
        )
    }

    fn room(building_id: i32, name: &str) -> Room {
        Room {
            id: 0,
            building_id,
            room_type_id: None,
            name: name.to_string(),
            width: 4.0,
            length: 6.0,
            height: 2.8,
        }
    }

    #[tokio::test]
    async fn test_rooms_by_building() {
        let storage = setup_test_db().await;
        let buildings = BuildingService::new(storage.clone());
        let service = RoomService::new(storage);

        let north = buildings
            .save(Building { id: 0, name: "North".to_string() })
            .await
            .unwrap();
        let south = buildings
            .save(Building { id: 0, name: "South".to_string() })
            .await
            .unwrap();

        service
            .save_all(vec![room(north.id, "Lab"), room(north.id, "Office"), room(south.id, "Hall")])
            .await
            .unwrap();

        assert_eq!(service.find_by_building_id(north.id).await.unwrap().len(), 2);
        assert_eq!(service.get_all_rooms().await.unwrap().len(), 3);
        assert_eq!(service.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_room_with_unknown_building_is_rejected() {
        let storage = setup_test_db().await;
        let service = RoomService::new(storage);

        let error = service.save(room(77, "Ghost")).await.unwrap_err();
        assert!(matches!(error, ManagerError::Reference(_)));
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_save_all_is_atomic() {
        let storage = setup_test_db().await;
        let buildings = BuildingService::new(storage.clone());
        let service = RoomService::new(storage);

        let hq = buildings
            .save(Building { id: 0, name: "HQ".to_string() })
            .await
            .unwrap();

        let result = service.save_all(vec![room(hq.id, "Lab"), room(hq.id + 100, "Ghost")]).await;

        assert!(result.is_err());
        assert_eq!(service.count().await.unwrap(), 0);
    }
}
