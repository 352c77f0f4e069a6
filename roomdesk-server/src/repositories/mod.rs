mod building;
mod room;
mod room_object;
mod room_type;

pub use building::BuildingRepository;
pub use room::RoomRepository;
pub use room_object::RoomObjectRepository;
pub use room_type::RoomTypeRepository;

/// Narrow a SQLite rowid to the `i32` ids used by the models.
fn inserted_id(rowid: i64) -> Result<i32, sqlx::Error> {
    i32::try_from(rowid).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}
