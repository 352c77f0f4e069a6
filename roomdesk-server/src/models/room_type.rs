use roomdesk_api::models::RoomTypeResponse;
use serde::{Deserialize, Serialize};

use crate::models::Table;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RoomType {
    pub id: i32,
    pub name: String,
}

impl From<RoomType> for RoomTypeResponse {
    fn from(room_type: RoomType) -> Self {
        RoomTypeResponse {
            id: room_type.id,
            name: room_type.name,
        }
    }
}

#[derive(Clone)]
pub struct RoomTypeTable;

impl Table for RoomTypeTable {
    fn name(&self) -> &'static str {
        "room_types"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS room_types (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS room_types;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
