use async_trait::async_trait;

use crate::errors::ManagerError;
use crate::models::{Building, Room, RoomObject, RoomType};

/// Anything with a database-assigned identity.
pub trait Entity {
    fn id(&self) -> i32;
}

impl Entity for Building {
    fn id(&self) -> i32 {
        self.id
    }
}

impl Entity for RoomType {
    fn id(&self) -> i32 {
        self.id
    }
}

impl Entity for Room {
    fn id(&self) -> i32 {
        self.id
    }
}

impl Entity for RoomObject {
    fn id(&self) -> i32 {
        self.id
    }
}

/// CRUD contract shared by every entity type.
///
/// Managers store what they are given: field validation belongs to the
/// caller. `find_by_id` is the only lookup that fails on a missing row.
#[async_trait]
pub trait Manager: Send + Sync {
    type Entity: Entity + Send + Sync + 'static;

    /// Name used in not-found errors and logs.
    fn entity_name(&self) -> &'static str;

    /// Insert or update, returning the row as persisted.
    async fn save(&self, item: Self::Entity) -> Result<Self::Entity, ManagerError>;

    /// Like [`Manager::save`] for a batch, in one transaction.
    async fn save_all(&self, items: Vec<Self::Entity>) -> Result<Vec<Self::Entity>, ManagerError>;

    async fn find_all(&self) -> Result<Vec<Self::Entity>, ManagerError>;

    async fn find_by_id(&self, id: i32) -> Result<Self::Entity, ManagerError>;

    async fn exists_by_id(&self, id: i32) -> Result<bool, ManagerError>;

    async fn count(&self) -> Result<i64, ManagerError>;

    /// Deleting an id that does not exist is not an error.
    async fn delete_by_id(&self, id: i32) -> Result<(), ManagerError>;

    async fn delete_all(&self) -> Result<u64, ManagerError>;

    async fn delete(&self, item: &Self::Entity) -> Result<(), ManagerError> {
        self.delete_by_id(item.id()).await
    }
}
