use roomdesk_api::models::RoomResponse;
use serde::{Deserialize, Serialize};

use crate::models::Table;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Room {
    pub id: i32,
    pub building_id: i32,
    pub room_type_id: Option<i32>,
    pub name: String,
    pub width: f64,
    pub length: f64,
    pub height: f64,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        RoomResponse {
            id: room.id,
            building_id: room.building_id,
            room_type_id: room.room_type_id,
            name: room.name,
            width: room.width,
            length: room.length,
            height: room.height,
        }
    }
}

#[derive(Clone)]
pub struct RoomTable;

impl Table for RoomTable {
    fn name(&self) -> &'static str {
        "rooms"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS rooms (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                building_id INTEGER NOT NULL,
                room_type_id INTEGER,
                name TEXT NOT NULL,
                width REAL NOT NULL DEFAULT 0,
                length REAL NOT NULL DEFAULT 0,
                height REAL NOT NULL DEFAULT 0,
                FOREIGN KEY (building_id) REFERENCES buildings (id),
                FOREIGN KEY (room_type_id) REFERENCES room_types (id) ON DELETE SET NULL
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS rooms;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["buildings", "room_types"]
    }
}
