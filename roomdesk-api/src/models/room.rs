use serde::{Deserialize, Serialize};

use super::Id;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTypeRequest {
    /// Room type name, e.g. "Laboratory"
    pub name: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomTypeResponse {
    pub id: Id,
    pub name: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRequest {
    /// Parent building identifier
    pub building_id: Id,
    /// Optional room type identifier
    #[serde(default)]
    pub room_type_id: Option<Id>,
    /// Room name
    pub name: String,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub length: f64,
    #[serde(default)]
    pub height: f64,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomResponse {
    /// Room identifier
    pub id: Id,
    /// Parent building identifier
    pub building_id: Id,
    /// Room type identifier, if assigned
    pub room_type_id: Option<Id>,
    /// Room name
    pub name: String,
    pub width: f64,
    pub length: f64,
    pub height: f64,
}
