use std::sync::Arc;

use async_trait::async_trait;

use crate::configs::Storage;
use crate::errors::ManagerError;
use crate::models::Building;
use crate::repositories::BuildingRepository;
use crate::services::Manager;

#[derive(Clone)]
pub struct BuildingService {
    repository: BuildingRepository,
}

impl BuildingService {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self {
            repository: BuildingRepository::new(storage),
        }
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Building>, ManagerError> {
        Ok(self.repository.find_by_name(name).await?)
    }
}

#[async_trait]
impl Manager for BuildingService {
    type Entity = Building;

    fn entity_name(&self) -> &'static str {
        "building"
    }

    async fn save(&self, item: Building) -> Result<Building, ManagerError> {
        let mut tx = self.repository.get_pool().begin().await?;
        let id = self.repository.save(&item, &mut tx).await?;
        tx.commit().await?;

        tracing::info!(building_id = id, "building saved");

        self.find_by_id(id).await
    }

    async fn save_all(&self, items: Vec<Building>) -> Result<Vec<Building>, ManagerError> {
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

    async fn find_all(&self) -> Result<Vec<Building>, ManagerError> {
        Ok(self.repository.find_all().await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Building, ManagerError> {
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

        tracing::info!(building_id = id, removed, "building deleted");

        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, ManagerError> {
        let mut tx = self.repository.get_pool().begin().await?;
        let removed = self.repository.delete_all(&mut tx).await?;
        tx.commit().await?;

        tracing::warn!(removed, "all buildings deleted");

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use crate::configs::{Database, SchemaManager};
    use crate::models::Room;
    use crate::services::RoomService;

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

    fn building(name: &str) -> Building {
        Building {
            id: 0,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_id() {
        let storage = setup_test_db().await;
        let service = BuildingService::new(storage);

        let saved = service.save(building("HQ")).await.unwrap();

        assert!(saved.id > 0);
        assert_eq!(service.find_by_id(saved.id).await.unwrap(), saved);
    }

    #[tokio::test]
    async fn test_save_all_and_count() {
        let storage = setup_test_db().await;
        let service = BuildingService::new(storage);

        let saved = service
            .save_all(vec![building("North"), building("South")])
            .await
            .unwrap();

        assert_eq!(saved.len(), 2);
        assert_eq!(service.count().await.unwrap(), 2);
        assert_eq!(service.find_all().await.unwrap().len(), 2);
        assert_eq!(service.find_by_name("South").await.unwrap()[0].id, saved[1].id);
    }

    #[tokio::test]
    async fn test_find_missing_building_is_not_found() {
        let storage = setup_test_db().await;
        let service = BuildingService::new(storage);

        let error = service.find_by_id(999).await.unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_referenced_building_is_rejected() {
        let storage = setup_test_db().await;
        let service = BuildingService::new(storage.clone());
        let rooms = RoomService::new(storage);

        let hq = service.save(building("HQ")).await.unwrap();
        rooms
            .save(Room {
                id: 0,
                building_id: hq.id,
                room_type_id: None,
                name: "Lab".to_string(),
                width: 4.0,
                length: 4.0,
                height: 3.0,
            })
            .await
            .unwrap();

        let error = service.delete(&hq).await.unwrap_err();
        assert!(matches!(error, ManagerError::Reference(_)));
        assert!(service.exists_by_id(hq.id).await.unwrap());
    }
}
