use std::fmt;

use roomdesk_api::models::{ObjectKind, PositionData, SizeData};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use crate::models::Table;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

impl From<PositionData> for Position {
    fn from(data: PositionData) -> Self {
        Position::new(data.x, data.y, data.z)
    }
}

impl From<Position> for PositionData {
    fn from(position: Position) -> Self {
        PositionData {
            x: position.x,
            y: position.y,
            z: position.z,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Size {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<SizeData> for Size {
    fn from(data: SizeData) -> Self {
        Size::new(data.x, data.y, data.z)
    }
}

impl From<Size> for SizeData {
    fn from(size: Size) -> Self {
        SizeData {
            x: size.x,
            y: size.y,
            z: size.z,
        }
    }
}

/// A door, lamp, sensor or any other fixture placed in a room.
///
/// The kind is not stored on the record: it is implied by the table the
/// object lives in. Only sized kinds ever read back a `size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomObject {
    pub id: i32,
    pub room_id: Option<i32>,
    pub custom_name: Option<String>,
    pub position: Position,
    pub size: Option<Size>,
}

impl RoomObject {
    pub fn new(room_id: i32, custom_name: &str, position: Position) -> Self {
        Self {
            id: 0,
            room_id: Some(room_id),
            custom_name: Some(custom_name.to_string()),
            position,
            size: None,
        }
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }
}

impl<'r> FromRow<'r, SqliteRow> for RoomObject {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let size = if row.try_column("size_x").is_ok() {
            Some(Size::new(
                real(row, "size_x")?,
                real(row, "size_y")?,
                real(row, "size_z")?,
            ))
        } else {
            None
        };

        Ok(RoomObject {
            id: row.try_get("id")?,
            room_id: row.try_get("room_id")?,
            custom_name: row.try_get("custom_name")?,
            position: Position::new(real(row, "pos_x")?, real(row, "pos_y")?, real(row, "pos_z")?),
            size,
        })
    }
}

/// SQLite stores a bound NaN as NULL; read it back as NaN.
fn real(row: &SqliteRow, column: &str) -> Result<f64, sqlx::Error> {
    Ok(row.try_get::<Option<f64>, _>(column)?.unwrap_or(f64::NAN))
}

/// One table per object kind, sharing a column layout.
#[derive(Clone, Copy)]
pub struct RoomObjectTable(pub ObjectKind);

impl RoomObjectTable {
    /// Column list for reads; size columns only for sized kinds.
    pub fn select_columns(&self) -> &'static str {
        if self.0.has_size() {
            "id, room_id, custom_name, pos_x, pos_y, pos_z, size_x, size_y, size_z"
        } else {
            "id, room_id, custom_name, pos_x, pos_y, pos_z"
        }
    }
}

impl Table for RoomObjectTable {
    fn name(&self) -> &'static str {
        self.0.table()
    }

    fn create(&self) -> String {
        let table = self.0.table();
        let size_columns = if self.0.has_size() {
            r#"
                size_x REAL DEFAULT 0,
                size_y REAL DEFAULT 0,
                size_z REAL DEFAULT 0,"#
        } else {
            ""
        };

        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                room_id INTEGER,
                custom_name TEXT,
                pos_x REAL DEFAULT 0,
                pos_y REAL DEFAULT 0,
                pos_z REAL DEFAULT 0,{size_columns}
                FOREIGN KEY (room_id) REFERENCES rooms (id)
            );
            CREATE INDEX IF NOT EXISTS idx_{table}_room_id ON {table} (room_id);
            "#
        )
    }

    fn dispose(&self) -> String {
        format!("DROP TABLE IF EXISTS {};", self.0.table())
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["rooms"]
    }
}
