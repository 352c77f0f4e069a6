use roomdesk_api::models::BuildingResponse;
use serde::{Deserialize, Serialize};

use crate::models::Table;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Building {
    pub id: i32,
    pub name: String,
}

impl From<Building> for BuildingResponse {
    fn from(building: Building) -> Self {
        BuildingResponse {
            id: building.id,
            name: building.name,
        }
    }
}

#[derive(Clone)]
pub struct BuildingTable;

impl Table for BuildingTable {
    fn name(&self) -> &'static str {
        "buildings"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS buildings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS buildings;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
