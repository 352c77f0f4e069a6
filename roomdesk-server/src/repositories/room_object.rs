use std::sync::Arc;

use roomdesk_api::models::ObjectKind;
use sqlx::{Error, Pool, Sqlite, Transaction};

use crate::configs::Storage;
use crate::models::{RoomObject, RoomObjectTable};
use crate::repositories::inserted_id;

const POSITION_COLUMNS: [&str; 5] = ["room_id", "custom_name", "pos_x", "pos_y", "pos_z"];
const SIZE_COLUMNS: [&str; 3] = ["size_x", "size_y", "size_z"];

/// Storage for one object kind. Every kind shares this code and differs only
/// in table name and whether the size columns exist.
#[derive(Clone)]
pub struct RoomObjectRepository {
    storage: Arc<Storage>,
    table: RoomObjectTable,
}

impl RoomObjectRepository {
    pub fn new(storage: Arc<Storage>, kind: ObjectKind) -> Self {
        Self {
            storage,
            table: RoomObjectTable(kind),
        }
    }

    pub fn get_pool(&self) -> &Pool<Sqlite> {
        self.storage.get_pool()
    }

    pub fn kind(&self) -> ObjectKind {
        self.table.0
    }

    fn writable_columns(&self) -> Vec<&'static str> {
        let mut columns = POSITION_COLUMNS.to_vec();
        if self.kind().has_size() {
            columns.extend(SIZE_COLUMNS);
        }
        columns
    }

    fn select(&self, clause: &str) -> String {
        format!(
            "SELECT {} FROM {} {clause}",
            self.table.select_columns(),
            self.kind().table()
        )
    }
}

impl RoomObjectRepository {
    /// Insert when `item.id` is unset, otherwise insert-or-update that id.
    pub async fn save(
        &self,
        item: &RoomObject,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<i32, Error> {
        let table = self.kind().table();
        let mut columns = self.writable_columns();
        let upsert = item.id > 0;

        let updates = columns
            .iter()
            .map(|column| format!("{column} = excluded.{column}"))
            .collect::<Vec<_>>()
            .join(", ");
        if upsert {
            columns.insert(0, "id");
        }
        let placeholders = (1..=columns.len())
            .map(|i| format!("${i}"))
            .collect::<Vec<_>>()
            .join(", ");

        let mut sql = format!(
            "INSERT INTO {table} ({}) VALUES ({placeholders})",
            columns.join(", ")
        );
        if upsert {
            sql.push_str(&format!(" ON CONFLICT (id) DO UPDATE SET {updates}"));
        }

        let mut query = sqlx::query(&sql);
        if upsert {
            query = query.bind(item.id);
        }
        query = query
            .bind(item.room_id)
            .bind(&item.custom_name)
            .bind(item.position.x)
            .bind(item.position.y)
            .bind(item.position.z);
        if self.kind().has_size() {
            let size = item.size.unwrap_or_default();
            query = query.bind(size.x).bind(size.y).bind(size.z);
        }

        let result = query.execute(&mut **transaction).await?;

        if upsert {
            Ok(item.id)
        } else {
            inserted_id(result.last_insert_rowid())
        }
    }

    pub async fn find_all(&self) -> Result<Vec<RoomObject>, Error> {
        let objects: Vec<RoomObject> = sqlx::query_as(&self.select("ORDER BY id"))
            .fetch_all(self.storage.get_pool())
            .await?;

        Ok(objects)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<RoomObject>, Error> {
        let object: Option<RoomObject> = sqlx::query_as(&self.select("WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.storage.get_pool())
            .await?;

        Ok(object)
    }

    pub async fn find_by_room_id(&self, room_id: i64) -> Result<Vec<RoomObject>, Error> {
        let objects: Vec<RoomObject> =
            sqlx::query_as(&self.select("WHERE room_id = $1 ORDER BY id"))
                .bind(room_id)
                .fetch_all(self.storage.get_pool())
                .await?;

        Ok(objects)
    }

    pub async fn find_by_custom_name(&self, name: &str) -> Result<Vec<RoomObject>, Error> {
        let objects: Vec<RoomObject> =
            sqlx::query_as(&self.select("WHERE custom_name = $1 ORDER BY id"))
                .bind(name)
                .fetch_all(self.storage.get_pool())
                .await?;

        Ok(objects)
    }

    pub async fn exists_by_id(&self, id: i32) -> Result<bool, Error> {
        let sql = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE id = $1)",
            self.kind().table()
        );

        let exists: i64 = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_one(self.storage.get_pool())
            .await?;

        Ok(exists != 0)
    }

    pub async fn count(&self) -> Result<i64, Error> {
        let sql = format!("SELECT COUNT(*) FROM {}", self.kind().table());

        sqlx::query_scalar(&sql)
            .fetch_one(self.storage.get_pool())
            .await
    }

    pub async fn delete(
        &self,
        id: i32,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<u64, Error> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.kind().table());
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&mut **transaction)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_by_custom_name(
        &self,
        name: &str,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<u64, Error> {
        let sql = format!("DELETE FROM {} WHERE custom_name = $1", self.kind().table());
        let result = sqlx::query(&sql)
            .bind(name)
            .execute(&mut **transaction)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_all(&self, transaction: &mut Transaction<'_, Sqlite>) -> Result<u64, Error> {
        let sql = format!("DELETE FROM {}", self.kind().table());
        let result = sqlx::query(&sql).execute(&mut **transaction).await?;

        Ok(result.rows_affected())
    }
}
