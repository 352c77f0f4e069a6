use std::sync::Arc;

use sqlx::{Error, Pool, Sqlite, Transaction};

use crate::configs::Storage;
use crate::models::Room;
use crate::repositories::inserted_id;

#[derive(Clone)]
pub struct RoomRepository {
    storage: Arc<Storage>,
}

impl RoomRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn get_pool(&self) -> &Pool<Sqlite> {
        self.storage.get_pool()
    }
}

impl RoomRepository {
    pub async fn save(
        &self,
        item: &Room,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<i32, Error> {
        if item.id <= 0 {
            let id = sqlx::query(
                r#"
                INSERT INTO rooms (building_id, room_type_id, name, width, length, height)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(item.building_id)
            .bind(item.room_type_id)
            .bind(&item.name)
            .bind(item.width)
            .bind(item.length)
            .bind(item.height)
            .execute(&mut **transaction)
            .await?
            .last_insert_rowid();

            return inserted_id(id);
        }

        sqlx::query(
            r#"
            INSERT INTO rooms (id, building_id, room_type_id, name, width, length, height)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                building_id = excluded.building_id,
                room_type_id = excluded.room_type_id,
                name = excluded.name,
                width = excluded.width,
                length = excluded.length,
                height = excluded.height
            "#,
        )
        .bind(item.id)
        .bind(item.building_id)
        .bind(item.room_type_id)
        .bind(&item.name)
        .bind(item.width)
        .bind(item.length)
        .bind(item.height)
        .execute(&mut **transaction)
        .await?;

        Ok(item.id)
    }

    pub async fn find_all(&self) -> Result<Vec<Room>, Error> {
        let rooms: Vec<Room> = sqlx::query_as("SELECT * FROM rooms ORDER BY id")
            .fetch_all(self.storage.get_pool())
            .await?;

        Ok(rooms)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Room>, Error> {
        let room: Option<Room> = sqlx::query_as("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(self.storage.get_pool())
            .await?;

        Ok(room)
    }

    pub async fn find_by_building_id(&self, building_id: i32) -> Result<Vec<Room>, Error> {
        let rooms: Vec<Room> =
            sqlx::query_as("SELECT * FROM rooms WHERE building_id = $1 ORDER BY id")
                .bind(building_id)
                .fetch_all(self.storage.get_pool())
                .await?;

        Ok(rooms)
    }

    pub async fn count(&self) -> Result<i64, Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM rooms")
            .fetch_one(self.storage.get_pool())
            .await
    }

    pub async fn delete(
        &self,
        id: i32,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&mut **transaction)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_all(&self, transaction: &mut Transaction<'_, Sqlite>) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM rooms")
            .execute(&mut **transaction)
            .await?;

        Ok(result.rows_affected())
    }
}
