mod building_service;
mod dashboard_service;
mod editor;
mod listing;
mod manager;
mod room_object_service;
mod room_service;
mod room_type_service;

pub use building_service::*;
pub use dashboard_service::*;
pub use editor::*;
pub use listing::*;
pub use manager::*;
pub use room_object_service::*;
pub use room_service::*;
pub use room_type_service::*;
