use std::sync::Arc;

use async_trait::async_trait;

use crate::configs::Storage;
use crate::errors::ManagerError;
use crate::models::RoomType;
use crate::repositories::RoomTypeRepository;
use crate::services::Manager;

#[derive(Clone)]
pub struct RoomTypeService {
    repository: RoomTypeRepository,
}

impl RoomTypeService {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self {
            repository: RoomTypeRepository::new(storage),
        }
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<RoomType>, ManagerError> {
        Ok(self.repository.find_by_name(name).await?)
    }
}

#[async_trait]
impl Manager for RoomTypeService {
    type Entity = RoomType;

    fn entity_name(&self) -> &'static str {
        "room type"
    }

    async fn save(&self, item: RoomType) -> Result<RoomType, ManagerError> {
        let mut tx = self.repository.get_pool().begin().await?;
        let id = self.repository.save(&item, &mut tx).await?;
        tx.commit().await?;

        tracing::info!(room_type_id = id, "room type saved");

        self.find_by_id(id).await
    }

    async fn save_all(&self, items: Vec<RoomType>) -> Result<Vec<RoomType>, ManagerError> {
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

    async fn find_all(&self) -> Result<Vec<RoomType>, ManagerError> {
        Ok(self.repository.find_all().await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<RoomType, ManagerError> {
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

        tracing::info!(room_type_id = id, removed, "room type deleted");

        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, ManagerError> {
        let mut tx = self.repository.get_pool().begin().await?;
        let removed = self.repository.delete_all(&mut tx).await?;
        tx.commit().await?;

        tracing::warn!(removed, "all room types deleted");

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use crate::configs::{Database, SchemaManager};

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

    #[tokio::test]
    async fn test_room_type_lifecycle() {
        let storage = setup_test_db().await;
        let service = RoomTypeService::new(storage);

        let lab = service
            .save(RoomType {
                id: 0,
                name: "Laboratory".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(service.find_by_name("Laboratory").await.unwrap(), Some(lab.clone()));

        let renamed = service
            .save(RoomType {
                id: lab.id,
                name: "Clean Room".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(renamed.id, lab.id);
        assert_eq!(service.count().await.unwrap(), 1);

        service.delete_by_id(lab.id).await.unwrap();
        assert!(!service.exists_by_id(lab.id).await.unwrap());
        // Missing ids are ignored
        service.delete_by_id(lab.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_name_is_a_conflict() {
        let storage = setup_test_db().await;
        let service = RoomTypeService::new(storage);

        service
            .save(RoomType { id: 0, name: "Office".to_string() })
            .await
            .unwrap();
        let error = service
            .save(RoomType { id: 0, name: "Office".to_string() })
            .await
            .unwrap_err();

        assert!(matches!(error, ManagerError::Duplicate(_)));
        assert_eq!(error.status_code(), axum::http::StatusCode::CONFLICT);
        assert_eq!(service.count().await.unwrap(), 1);
    }
}
