use std::collections::HashMap;
use std::future::Future;

use roomdesk_api::models::{ObjectKind, RoomObjectResponse};

use crate::errors::ManagerError;
use crate::models::{Building, Room, RoomObject, RoomType};

/// A row that can be matched by the list search box.
pub trait Searchable {
    fn row_id(&self) -> i32;

    /// Texts the search term is matched against.
    fn search_terms(&self) -> Vec<String>;
}

impl Searchable for Building {
    fn row_id(&self) -> i32 {
        self.id
    }

    fn search_terms(&self) -> Vec<String> {
        vec![self.name.clone(), self.id.to_string()]
    }
}

impl Searchable for RoomType {
    fn row_id(&self) -> i32 {
        self.id
    }

    fn search_terms(&self) -> Vec<String> {
        vec![self.name.clone(), self.id.to_string()]
    }
}

impl Searchable for Room {
    fn row_id(&self) -> i32 {
        self.id
    }

    fn search_terms(&self) -> Vec<String> {
        vec![self.name.clone(), self.id.to_string()]
    }
}

/// A room object joined with the name of its room.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectRow {
    pub object: RoomObject,
    pub room_name: Option<String>,
}

impl ObjectRow {
    pub fn join(objects: Vec<RoomObject>, rooms: &[Room]) -> Vec<ObjectRow> {
        let names: HashMap<i32, &str> = rooms
            .iter()
            .map(|room| (room.id, room.name.as_str()))
            .collect();

        objects
            .into_iter()
            .map(|object| {
                let room_name = object
                    .room_id
                    .and_then(|id| names.get(&id))
                    .map(|name| name.to_string());
                ObjectRow { object, room_name }
            })
            .collect()
    }

    pub fn into_response(self, kind: ObjectKind) -> RoomObjectResponse {
        RoomObjectResponse {
            id: self.object.id,
            kind,
            custom_name: self.object.custom_name,
            room_id: self.object.room_id,
            room_name: self.room_name,
            position: self.object.position.into(),
            size: self.object.size.map(Into::into),
        }
    }
}

impl Searchable for ObjectRow {
    fn row_id(&self) -> i32 {
        self.object.id
    }

    fn search_terms(&self) -> Vec<String> {
        let mut terms = Vec::with_capacity(4);
        if let Some(name) = &self.object.custom_name {
            terms.push(name.clone());
        }
        if let Some(room_name) = &self.room_name {
            terms.push(room_name.clone());
        }
        terms.push(self.object.position.to_string());
        terms.push(self.object.id.to_string());
        terms
    }
}

/// Case-insensitive substring match over the row's search terms.
/// A blank term matches every row.
pub fn matches_term<T: Searchable>(row: &T, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    row.search_terms()
        .iter()
        .any(|text| text.to_lowercase().contains(&needle))
}

pub fn filter_rows<T: Searchable>(rows: Vec<T>, term: &str) -> Vec<T> {
    rows.into_iter().filter(|row| matches_term(row, term)).collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowActions {
    pub edit: bool,
    pub delete: bool,
}

/// State behind a tabular listing of one entity type: the loaded snapshot,
/// the active search term and at most one selected row.
pub struct ListView<T> {
    title: &'static str,
    rows: Vec<T>,
    term: String,
    selected: Option<i32>,
    error: Option<String>,
}

impl<T: Searchable> ListView<T> {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            rows: Vec::new(),
            term: String::new(),
            selected: None,
            error: None,
        }
    }

    /// Replace the snapshot with the result of `fetch`. On failure the
    /// previous rows stay and a message is kept for display.
    pub async fn load<F, Fut>(&mut self, fetch: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, ManagerError>>,
    {
        match fetch().await {
            Ok(rows) => {
                self.rows = rows;
                self.error = None;
                self.retain_visible_selection();
                true
            }
            Err(e) => {
                tracing::warn!("failed to load {}: {}", self.title, e);
                self.error = Some(format!("Could not load {}: {}", self.title, e));
                false
            }
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Every loaded row, ignoring the filter.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Rows matching the active filter, in load order.
    pub fn visible(&self) -> Vec<&T> {
        self.rows
            .iter()
            .filter(|row| matches_term(*row, &self.term))
            .collect()
    }

    pub fn filter(&mut self, term: &str) {
        self.term = term.trim().to_string();
        self.retain_visible_selection();
    }

    pub fn clear_filter(&mut self) {
        self.filter("");
    }

    /// Select a visible row; returns `false` and leaves the selection alone otherwise.
    pub fn select(&mut self, id: i32) -> bool {
        let visible = self.visible().iter().any(|row| row.row_id() == id);
        if visible {
            self.selected = Some(id);
        }
        visible
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&T> {
        let id = self.selected?;
        self.rows.iter().find(|row| row.row_id() == id)
    }

    pub fn actions(&self) -> RowActions {
        let enabled = self.selected().is_some();
        RowActions {
            edit: enabled,
            delete: enabled,
        }
    }

    fn retain_visible_selection(&mut self) {
        if let Some(id) = self.selected {
            if !self.visible().iter().any(|row| row.row_id() == id) {
                self.selected = None;
            }
        }
    }
}
