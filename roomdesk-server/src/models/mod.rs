mod building;
mod room;
mod room_object;
mod room_type;

pub use building::{Building, BuildingTable};
pub use room::{Room, RoomTable};
pub use room_object::{Position, RoomObject, RoomObjectTable, Size};
pub use room_type::{RoomType, RoomTypeTable};

pub trait Table {
    /// The name of the table
    fn name(&self) -> &'static str;

    /// The SQL statement to create the table
    fn create(&self) -> String;

    /// The SQL statement to dispose the table
    fn dispose(&self) -> String;

    /// The dependencies of the table
    fn dependencies(&self) -> Vec<&'static str>;
}
