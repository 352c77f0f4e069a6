use serde::{Deserialize, Serialize};

use super::{Id, ObjectKind, PositionData, SizeData};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomObjectRequest {
    /// Display name of the object
    #[serde(default)]
    pub custom_name: Option<String>,
    /// Room holding the object
    #[serde(default)]
    pub room_id: Option<Id>,
    /// Position inside the room
    #[serde(default)]
    pub position: PositionData,
    /// Dimensions, only kept for doors, windows, heaters and data tables
    #[serde(default)]
    pub size: Option<SizeData>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomObjectResponse {
    /// Object identifier, unique per kind
    pub id: Id,
    /// Object kind
    pub kind: ObjectKind,
    /// Display name of the object
    pub custom_name: Option<String>,
    /// Room holding the object
    pub room_id: Option<Id>,
    /// Name of the room holding the object
    pub room_name: Option<String>,
    pub position: PositionData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeData>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    /// Number of removed rows
    pub deleted: u64,
}
