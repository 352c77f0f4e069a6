use roomdesk_api::models::{ObjectKind, RoomObjectRequest};

use crate::errors::{EditorError, ObjectError};
use crate::models::{Position, Room, RoomObject, Size};
use crate::services::{Manager, RoomObjectService, RoomService};

const POSITION_FIELDS: [&str; 3] = ["pos_x", "pos_y", "pos_z"];
const SIZE_FIELDS: [&str; 3] = ["size_x", "size_y", "size_z"];

/// Raw input of the object editor, one string per input widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectForm {
    pub custom_name: String,
    pub room_id: Option<i32>,
    pub position: [String; 3],
    pub size: [String; 3],
}

impl ObjectForm {
    pub fn from_object(object: &RoomObject) -> Self {
        let size = object.size.unwrap_or_default();

        Self {
            custom_name: object.custom_name.clone().unwrap_or_default(),
            room_id: object.room_id,
            position: [
                object.position.x.to_string(),
                object.position.y.to_string(),
                object.position.z.to_string(),
            ],
            size: [size.x.to_string(), size.y.to_string(), size.z.to_string()],
        }
    }

    pub fn from_request(request: &RoomObjectRequest) -> Self {
        let size = request.size.unwrap_or_default();

        Self {
            custom_name: request.custom_name.clone().unwrap_or_default(),
            room_id: request.room_id,
            position: [
                request.position.x.to_string(),
                request.position.y.to_string(),
                request.position.z.to_string(),
            ],
            size: [size.x.to_string(), size.y.to_string(), size.z.to_string()],
        }
    }

    /// Check the form and build the object it describes. Name and room are
    /// required, the room must be one of `rooms`, and every number must be
    /// finite. Sizes may not be negative; positions may.
    pub fn validate(&self, kind: ObjectKind, rooms: &[Room]) -> Result<RoomObject, ObjectError> {
        let name = self.custom_name.trim();
        if name.is_empty() {
            return Err(ObjectError::MissingName);
        }

        let room_id = self.room_id.ok_or(ObjectError::MissingRoom)?;
        if !rooms.iter().any(|room| room.id == room_id) {
            return Err(ObjectError::UnknownRoom(room_id));
        }

        let [x, y, z] = parse_fields(&self.position, POSITION_FIELDS)?;
        let size = if kind.has_size() {
            let [sx, sy, sz] = parse_fields(&self.size, SIZE_FIELDS)?;
            for (value, field) in [sx, sy, sz].into_iter().zip(SIZE_FIELDS) {
                if value < 0.0 {
                    return Err(ObjectError::NegativeSize(field));
                }
            }
            Some(Size::new(sx, sy, sz))
        } else {
            None
        };

        Ok(RoomObject {
            id: 0,
            room_id: Some(room_id),
            custom_name: Some(name.to_string()),
            position: Position::new(x, y, z),
            size,
        })
    }
}

fn parse_fields(values: &[String; 3], fields: [&'static str; 3]) -> Result<[f64; 3], ObjectError> {
    let mut parsed = [0.0; 3];
    for (slot, (value, field)) in parsed.iter_mut().zip(values.iter().zip(fields)) {
        let number: f64 = value
            .trim()
            .parse()
            .map_err(|_| ObjectError::InvalidNumber(field))?;
        if !number.is_finite() {
            return Err(ObjectError::NonFiniteNumber(field));
        }
        *slot = number;
    }
    Ok(parsed)
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorMode {
    Add,
    Edit(RoomObject),
    Delete(RoomObject),
}

/// Add/edit/delete dialog for one object kind.
///
/// Opening for edit or delete without a target is refused with
/// [`ObjectError::NoSelection`]. After a successful save or delete the
/// caller's `on_done` callback runs, typically to reload its list.
#[derive(Debug)]
pub struct ObjectEditor {
    kind: ObjectKind,
    mode: EditorMode,
    form: ObjectForm,
    rooms: Vec<Room>,
}

impl ObjectEditor {
    pub async fn open_add(kind: ObjectKind, rooms: &RoomService) -> Result<Self, EditorError> {
        Ok(Self {
            kind,
            mode: EditorMode::Add,
            form: ObjectForm::default(),
            rooms: rooms.get_all_rooms().await?,
        })
    }

    pub async fn open_edit(
        kind: ObjectKind,
        target: Option<RoomObject>,
        rooms: &RoomService,
    ) -> Result<Self, EditorError> {
        let Some(target) = target else {
            tracing::warn!("no {} selected for editing", kind);
            return Err(ObjectError::NoSelection.into());
        };

        Ok(Self {
            kind,
            form: ObjectForm::from_object(&target),
            mode: EditorMode::Edit(target),
            rooms: rooms.get_all_rooms().await?,
        })
    }

    pub fn open_delete(kind: ObjectKind, target: Option<RoomObject>) -> Result<Self, EditorError> {
        let Some(target) = target else {
            tracing::warn!("no {} selected for deletion", kind);
            return Err(ObjectError::NoSelection.into());
        };

        Ok(Self {
            kind,
            form: ObjectForm::from_object(&target),
            mode: EditorMode::Delete(target),
            rooms: Vec::new(),
        })
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    /// Rooms offered for selection.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn form(&self) -> &ObjectForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ObjectForm {
        &mut self.form
    }

    /// Validate the form and persist it. Nothing is written when validation fails.
    pub async fn save<F>(self, manager: &RoomObjectService, on_done: F) -> Result<RoomObject, EditorError>
    where
        F: FnOnce(),
    {
        let id = match &self.mode {
            EditorMode::Add => 0,
            EditorMode::Edit(target) => target.id,
            EditorMode::Delete(_) => return Err(EditorError::WrongMode("saving")),
        };

        let mut object = self.form.validate(self.kind, &self.rooms)?;
        object.id = id;

        let saved = manager.save(object).await?;
        on_done();

        Ok(saved)
    }

    pub async fn confirm_delete<F>(self, manager: &RoomObjectService, on_done: F) -> Result<(), EditorError>
    where
        F: FnOnce(),
    {
        let EditorMode::Delete(target) = &self.mode else {
            return Err(EditorError::WrongMode("deletion"));
        };

        manager.delete_by_id(target.id).await?;
        on_done();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::sync::Arc;

    use crate::configs::{Database, SchemaManager, Storage};
    use crate::models::Building;
    use crate::services::BuildingService;

    use super::*;

    async fn setup() -> (Arc<Storage>, RoomService, Room) {
        let storage = Arc::new(
            Storage::new(
                Database {
                    migration_path: None,
                    clean_start: true,
                    url: String::from("sqlite::memory:"),
                },
                SchemaManager::default(),
            )
            .await
            .unwrap(),
        );

        let buildings = BuildingService::new(storage.clone());
        let rooms = RoomService::new(storage.clone());
        let hq = buildings
            .save(Building { id: 0, name: "HQ".to_string() })
            .await
            .unwrap();
        let lab = rooms
            .save(Room {
                id: 0,
                building_id: hq.id,
                room_type_id: None,
                name: "Lab".to_string(),
                width: 5.0,
                length: 5.0,
                height: 3.0,
            })
            .await
            .unwrap();

        (storage, rooms, lab)
    }

    fn filled_form(room_id: i32) -> ObjectForm {
        ObjectForm {
            custom_name: "Front Door".to_string(),
            room_id: Some(room_id),
            position: ["1".to_string(), "0".to_string(), "0".to_string()],
            size: ["0.9".to_string(), "0.1".to_string(), "2.1".to_string()],
        }
    }

    fn lab_room(id: i32) -> Room {
        Room {
            id,
            building_id: 1,
            room_type_id: None,
            name: "Lab".to_string(),
            width: 1.0,
            length: 1.0,
            height: 1.0,
        }
    }

    #[test]
    fn test_validate_requires_name_and_room() {
        let rooms = vec![lab_room(1)];

        let mut form = filled_form(1);
        form.custom_name = "   ".to_string();
        assert_eq!(form.validate(ObjectKind::Door, &rooms), Err(ObjectError::MissingName));

        let mut form = filled_form(1);
        form.room_id = None;
        assert_eq!(form.validate(ObjectKind::Door, &rooms), Err(ObjectError::MissingRoom));

        let form = filled_form(5);
        assert_eq!(form.validate(ObjectKind::Door, &rooms), Err(ObjectError::UnknownRoom(5)));
    }

    #[test]
    fn test_validate_rejects_malformed_numbers() {
        let rooms = vec![lab_room(1)];

        let mut form = filled_form(1);
        form.position[1] = "abc".to_string();
        assert_eq!(
            form.validate(ObjectKind::Door, &rooms),
            Err(ObjectError::InvalidNumber("pos_y"))
        );

        let mut form = filled_form(1);
        form.position[2] = "NaN".to_string();
        assert_eq!(
            form.validate(ObjectKind::Door, &rooms),
            Err(ObjectError::NonFiniteNumber("pos_z"))
        );

        let mut form = filled_form(1);
        form.size[0] = "inf".to_string();
        assert_eq!(
            form.validate(ObjectKind::Door, &rooms),
            Err(ObjectError::NonFiniteNumber("size_x"))
        );

        let mut form = filled_form(1);
        form.size[2] = "-2".to_string();
        assert_eq!(
            form.validate(ObjectKind::Door, &rooms),
            Err(ObjectError::NegativeSize("size_z"))
        );
    }

    #[test]
    fn test_validate_allows_negative_position_and_ignores_size_of_unsized_kind() {
        let rooms = vec![lab_room(1)];

        let mut form = filled_form(1);
        form.position[0] = "-3.5".to_string();
        form.size[0] = "garbage".to_string();

        let lamp = form.validate(ObjectKind::Lamp, &rooms).unwrap();
        assert_eq!(lamp.position, Position::new(-3.5, 0.0, 0.0));
        assert_eq!(lamp.size, None);
        assert_eq!(lamp.custom_name.as_deref(), Some("Front Door"));
    }

    #[tokio::test]
    async fn test_add_then_save_invokes_callback() {
        let (storage, rooms, lab) = setup().await;
        let doors = RoomObjectService::new(storage, ObjectKind::Door);

        let mut editor = ObjectEditor::open_add(ObjectKind::Door, &rooms).await.unwrap();
        assert_eq!(editor.form(), &ObjectForm::default());
        assert_eq!(editor.rooms().len(), 1);

        *editor.form_mut() = filled_form(lab.id);

        let refreshed = Cell::new(0);
        let saved = editor
            .save(&doors, || refreshed.set(refreshed.get() + 1))
            .await
            .unwrap();

        assert_eq!(refreshed.get(), 1);
        assert!(saved.id > 0);
        assert_eq!(saved.size, Some(Size::new(0.9, 0.1, 2.1)));
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_saved() {
        let (storage, rooms, _) = setup().await;
        let doors = RoomObjectService::new(storage, ObjectKind::Door);

        let editor = ObjectEditor::open_add(ObjectKind::Door, &rooms).await.unwrap();
        let refreshed = Cell::new(false);
        let result = editor.save(&doors, || refreshed.set(true)).await;

        assert!(matches!(result, Err(EditorError::Invalid(ObjectError::MissingName))));
        assert!(!refreshed.get());
        assert_eq!(doors.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_edit_keeps_identity() {
        let (storage, rooms, lab) = setup().await;
        let lamps = RoomObjectService::new(storage, ObjectKind::Lamp);
        let lamp = lamps
            .save(RoomObject::new(lab.id, "Desk Lamp", Position::new(1.0, 2.0, 3.0)))
            .await
            .unwrap();

        let mut editor = ObjectEditor::open_edit(ObjectKind::Lamp, Some(lamp.clone()), &rooms)
            .await
            .unwrap();
        assert_eq!(editor.form().custom_name, "Desk Lamp");
        assert_eq!(editor.form().position[2], "3");

        editor.form_mut().custom_name = "Reading Lamp".to_string();
        let saved = editor.save(&lamps, || {}).await.unwrap();

        assert_eq!(saved.id, lamp.id);
        assert_eq!(saved.custom_name.as_deref(), Some("Reading Lamp"));
        assert_eq!(lamps.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_open_without_target_is_refused() {
        let (_, rooms, _) = setup().await;

        let edit = ObjectEditor::open_edit(ObjectKind::Plug, None, &rooms).await;
        assert!(matches!(edit, Err(EditorError::Invalid(ObjectError::NoSelection))));

        let delete = ObjectEditor::open_delete(ObjectKind::Plug, None);
        assert!(matches!(delete, Err(EditorError::Invalid(ObjectError::NoSelection))));
    }

    #[tokio::test]
    async fn test_confirm_delete() {
        let (storage, _, lab) = setup().await;
        let plugs = RoomObjectService::new(storage, ObjectKind::Plug);
        let plug = plugs
            .save(RoomObject::new(lab.id, "Wall Plug", Position::default()))
            .await
            .unwrap();

        let editor = ObjectEditor::open_delete(ObjectKind::Plug, Some(plug.clone())).unwrap();
        let refreshed = Cell::new(false);
        editor
            .confirm_delete(&plugs, || refreshed.set(true))
            .await
            .unwrap();

        assert!(refreshed.get());
        assert!(!plugs.exists_by_id(plug.id).await.unwrap());
    }
}
