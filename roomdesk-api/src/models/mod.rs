mod building;
mod dashboard;
mod kind;
mod room;
mod room_object;

pub use building::*;
pub use dashboard::*;
pub use kind::*;
pub use room::*;
pub use room_object::*;

use serde::{Deserialize, Serialize};

pub type Id = i32;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionData {
    /// Offset along the room width
    pub x: f64,
    /// Offset along the room length
    pub y: f64,
    /// Height above the floor
    pub z: f64,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeData {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
