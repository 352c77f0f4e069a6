use std::sync::Arc;

use sqlx::{Error, Pool, Sqlite, Transaction};

use crate::configs::Storage;
use crate::models::RoomType;
use crate::repositories::inserted_id;

#[derive(Clone)]
pub struct RoomTypeRepository {
    storage: Arc<Storage>,
}

impl RoomTypeRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn get_pool(&self) -> &Pool<Sqlite> {
        self.storage.get_pool()
    }
}

impl RoomTypeRepository {
    /// Insert when `item.id` is unset, otherwise insert-or-update that id.
    pub async fn save(
        &self,
        item: &RoomType,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<i32, Error> {
        if item.id <= 0 {
            let id = sqlx::query("INSERT INTO room_types (name) VALUES ($1)")
                .bind(&item.name)
                .execute(&mut **transaction)
                .await?
                .last_insert_rowid();

            return inserted_id(id);
        }

        sqlx::query(
            r#"
            INSERT INTO room_types (id, name)
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

    pub async fn find_all(&self) -> Result<Vec<RoomType>, Error> {
        let room_types: Vec<RoomType> = sqlx::query_as("SELECT * FROM room_types ORDER BY id")
            .fetch_all(self.storage.get_pool())
            .await?;

        Ok(room_types)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<RoomType>, Error> {
        let room_type: Option<RoomType> = sqlx::query_as("SELECT * FROM room_types WHERE id = $1")
            .bind(id)
            .fetch_optional(self.storage.get_pool())
            .await?;

        Ok(room_type)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<RoomType>, Error> {
        let room_type: Option<RoomType> =
            sqlx::query_as("SELECT * FROM room_types WHERE name = $1")
                .bind(name)
                .fetch_optional(self.storage.get_pool())
                .await?;

        Ok(room_type)
    }

    pub async fn count(&self) -> Result<i64, Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM room_types")
            .fetch_one(self.storage.get_pool())
            .await
    }

    pub async fn delete(
        &self,
        id: i32,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM room_types WHERE id = $1")
            .bind(id)
            .execute(&mut **transaction)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_all(&self, transaction: &mut Transaction<'_, Sqlite>) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM room_types")
            .execute(&mut **transaction)
            .await?;

        Ok(result.rows_affected())
    }
}
