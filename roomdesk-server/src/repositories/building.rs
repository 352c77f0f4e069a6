use std::sync::Arc;

use sqlx::{Error, Pool, Sqlite, Transaction};

use crate::configs::Storage;
use crate::models::Building;
use crate::repositories::inserted_id;

#[derive(Clone)]
pub struct BuildingRepository {
    storage: Arc<Storage>,
}

impl BuildingRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn get_pool(&self) -> &Pool<Sqlite> {
        self.storage.get_pool()
    }
}

impl BuildingRepository {
    /// Insert when `item.id` is unset, otherwise insert-or-update that id.
    pub async fn save(
        &self,
        item: &Building,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<i32, Error> {
        if item.id <= 0 {
            let id = sqlx::query("INSERT INTO buildings (name) VALUES ($1)")
                .bind(&item.name)
                .execute(&mut **transaction)
                .await?
                .last_insert_rowid();

            return inserted_id(id);
        }

        sqlx::query(
            r#"
            INSERT INTO buildings (id, name)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET name = excluded.name
            "#,
        )
        .bind(item.id)
        .bind(&item.name)
        .execute(&mut **transaction)
        .await?;

        Ok(item.id)
    }

    pub async fn find_all(&self) -> Result<Vec<Building>, Error> {
        let buildings: Vec<Building> = sqlx::query_as("SELECT * FROM buildings ORDER BY id")
            .fetch_all(self.storage.get_pool())
            .await?;

        Ok(buildings)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Building>, Error> {
        let building: Option<Building> = sqlx::query_as("SELECT * FROM buildings WHERE id = $1")
            .bind(id)
            .fetch_optional(self.storage.get_pool())
            .await?;

        Ok(building)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Building>, Error> {
        let buildings: Vec<Building> =
            sqlx::query_as("SELECT * FROM buildings WHERE name = $1 ORDER BY id")
                .bind(name)
                .fetch_all(self.storage.get_pool())
                .await?;

        Ok(buildings)
    }

    pub async fn count(&self) -> Result<i64, Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM buildings")
            .fetch_one(self.storage.get_pool())
            .await
    }

    pub async fn delete(
        &self,
        id: i32,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM buildings WHERE id = $1")
            .bind(id)
            .execute(&mut **transaction)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_all(&self, transaction: &mut Transaction<'_, Sqlite>) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM buildings")
            .execute(&mut **transaction)
            .await?;

        Ok(result.rows_affected())
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
    async fn test_save_and_find_building() {
        let storage = setup_test_db().await;
        let repo = BuildingRepository::new(storage.clone());

        let building = Building {
            id: 0,
            name: "HQ".to_string(),
        };

        let mut tx = storage.get_pool().begin().await.unwrap();
        let id = repo.save(&building, &mut tx).await.unwrap();
        tx.commit().await.unwrap();

        let found = repo.find_by_id(id).await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "HQ");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_save_existing_id_updates() {
        let storage = setup_test_db().await;
        let repo = BuildingRepository::new(storage.clone());

        let mut tx = storage.get_pool().begin().await.unwrap();
        let id = repo
            .save(&Building { id: 0, name: "Old Wing".to_string() }, &mut tx)
            .await
            .unwrap();
        repo.save(&Building { id, name: "New Wing".to_string() }, &mut tx)
            .await
            .unwrap();
        tx.commit().await.unwrap();

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.name, "New Wing");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_rowid_beyond_i32_is_an_error() {
        let storage = setup_test_db().await;
        let repo = BuildingRepository::new(storage.clone());

        sqlx::query("INSERT INTO buildings (id, name) VALUES ($1, 'Tower')")
            .bind(i64::from(i32::MAX))
            .execute(storage.get_pool())
            .await
            .unwrap();

        let mut tx = storage.get_pool().begin().await.unwrap();
        let result = repo
            .save(&Building { id: 0, name: "Overflow".to_string() }, &mut tx)
            .await;

        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[tokio::test]
    async fn test_delete_building() {
        let storage = setup_test_db().await;
        let repo = BuildingRepository::new(storage.clone());

        let mut tx = storage.get_pool().begin().await.unwrap();
        let id = repo
            .save(&Building { id: 0, name: "Annex".to_string() }, &mut tx)
            .await
            .unwrap();
        tx.commit().await.unwrap();

        let mut tx = storage.get_pool().begin().await.unwrap();
        assert_eq!(repo.delete(id, &mut tx).await.unwrap(), 1);
        assert_eq!(repo.delete(id, &mut tx).await.unwrap(), 0);
        tx.commit().await.unwrap();

        assert!(repo.find_by_id(id).await.unwrap().is_none());
    }
}
