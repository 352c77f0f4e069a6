mod building_handle;
mod dashboard_handle;
mod docs_handle;
mod room_handle;
mod room_object_handle;
mod room_type_handle;

pub use building_handle::*;
pub use dashboard_handle::*;
pub use docs_handle::*;
pub use room_handle::*;
pub use room_object_handle::*;
pub use room_type_handle::*;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive substring filter
    pub search: Option<String>,
}

impl ListQuery {
    pub fn term(&self) -> &str {
        self.search.as_deref().unwrap_or_default()
    }
}
