//! List container
//!
//! [`TodoStore`] owns the authoritative [`TodoList`] together with the per-row
//! editors and applies intents to both. Every applied intent is reported to
//! the subscribers; intents that refer to a position that no longer exists are
//! logged and dropped.

use crate::list_state::TodoList;
use crate::row::{RowEditor, RowIntent, RowView};
use crate::tui::input::InputOperation;
use crate::types::{Item, ItemId, RowIdentity};
use std::collections::HashMap;
use std::fmt;

/// Request issued by a row (or the UI on its behalf)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoIntent {
    Edit { index: usize, text: String },
    Commit { index: usize },
    Delete { index: usize },
    ToggleEditMode { index: usize },
    EditDraft { index: usize, op: InputOperation },
}

impl TodoIntent {
    pub fn index(&self) -> usize {
        match self {
            TodoIntent::Edit { index, .. }
            | TodoIntent::Commit { index }
            | TodoIntent::Delete { index }
            | TodoIntent::ToggleEditMode { index }
            | TodoIntent::EditDraft { index, .. } => *index,
        }
    }
}

/// Change applied to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    ItemEdited {
        index: usize,
        id: ItemId,
        previous: String,
        text: String,
    },
    ItemDeleted {
        index: usize,
        item: Item,
    },
    EditModeToggled {
        index: usize,
        editing: bool,
    },
    DraftChanged {
        index: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(&StoreEvent, &TodoList)>;

#[derive(Debug, Clone)]
enum RowStates {
    Stable(HashMap<ItemId, RowEditor>),
    Positional(Vec<RowEditor>),
}

pub struct TodoStore {
    list: TodoList,
    rows: RowStates,
    kill_ring: String,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: u64,
}

impl fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoStore")
            .field("list", &self.list)
            .field("rows", &self.rows)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl TodoStore {
    pub fn new(list: TodoList, identity: RowIdentity) -> Self {
        let rows = match identity {
            RowIdentity::Stable => RowStates::Stable(
                list.iter()
                    .map(|item| (item.id, RowEditor::new(&item.text)))
                    .collect(),
            ),
            RowIdentity::Positional => RowStates::Positional(
                list.iter().map(|item| RowEditor::new(&item.text)).collect(),
            ),
        };

        Self {
            list,
            rows,
            kill_ring: String::new(),
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    pub fn seeded(count: usize, identity: RowIdentity) -> Self {
        Self::new(TodoList::seeded(count), identity)
    }

    pub fn identity(&self) -> RowIdentity {
        match self.rows {
            RowStates::Stable(_) => RowIdentity::Stable,
            RowStates::Positional(_) => RowIdentity::Positional,
        }
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn texts(&self) -> Vec<String> {
        self.list.texts()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn is_editing(&self, index: usize) -> bool {
        self.row(index).is_some_and(RowEditor::is_editing)
    }

    pub fn draft(&self, index: usize) -> Option<&str> {
        self.row(index).map(RowEditor::draft)
    }

    /// Render models for every row in display order
    pub fn rows(&self) -> Vec<RowView> {
        self.list
            .iter()
            .enumerate()
            .map(|(index, item)| match self.row(index) {
                Some(row) => row.view(index, &item.text),
                None => RowEditor::new(&item.text).view(index, &item.text),
            })
            .collect()
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&StoreEvent, &TodoList) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(candidate, _)| *candidate != id);
        self.subscribers.len() != before
    }

    /// Apply an intent. Returns the resulting event, or `None` when the intent
    /// had nothing to act on.
    pub fn dispatch(&mut self, intent: TodoIntent) -> Option<StoreEvent> {
        let index = intent.index();
        if index >= self.list.len() {
            log::warn!(
                "Ignoring stale intent {:?}: list has {} items",
                intent,
                self.list.len()
            );
            return None;
        }

        log::debug!("Dispatching {:?}", intent);
        let event = match intent {
            TodoIntent::Edit { index, text } => self.apply_edit(index, text),
            TodoIntent::Commit { index } => match self.row(index).and_then(RowEditor::confirm) {
                Some(RowIntent::Edit(text)) => self.apply_edit(index, text),
                _ => {
                    log::debug!("Row {} is not editing; nothing to commit", index);
                    None
                }
            },
            TodoIntent::Delete { index } => self.apply_delete(index),
            TodoIntent::ToggleEditMode { index } => self.row_mut(index).map(|row| {
                row.toggle_edit_mode();
                StoreEvent::EditModeToggled {
                    index,
                    editing: row.is_editing(),
                }
            }),
            TodoIntent::EditDraft { index, op } => {
                let mut kill_ring = std::mem::take(&mut self.kill_ring);
                let changed = self
                    .row_mut(index)
                    .is_some_and(|row| row.edit_draft(op, &mut kill_ring));
                self.kill_ring = kill_ring;
                changed.then_some(StoreEvent::DraftChanged { index })
            }
        };

        if let Some(event) = &event {
            self.notify(event);
        }
        event
    }

    fn apply_edit(&mut self, index: usize, text: String) -> Option<StoreEvent> {
        let id = self.list.id_at(index)?;
        match self.list.replace(index, text.clone()) {
            Ok(previous) => {
                if let Some(row) = self.row_mut(index) {
                    row.finish_editing();
                }
                Some(StoreEvent::ItemEdited {
                    index,
                    id,
                    previous,
                    text,
                })
            }
            Err(e) => {
                log::warn!("Edit failed: {}", e);
                None
            }
        }
    }

    fn apply_delete(&mut self, index: usize) -> Option<StoreEvent> {
        match self.list.remove(index) {
            Ok(item) => {
                match &mut self.rows {
                    RowStates::Stable(rows) => {
                        rows.remove(&item.id);
                    }
                    // Per-position state stays put; only the trailing slot goes away.
                    RowStates::Positional(rows) => {
                        rows.truncate(self.list.len());
                    }
                }
                Some(StoreEvent::ItemDeleted { index, item })
            }
            Err(e) => {
                log::warn!("Delete failed: {}", e);
                None
            }
        }
    }

    fn notify(&mut self, event: &StoreEvent) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(event, &self.list);
        }
    }

    fn row(&self, index: usize) -> Option<&RowEditor> {
        match &self.rows {
            RowStates::Stable(rows) => self.list.id_at(index).and_then(|id| rows.get(&id)),
            RowStates::Positional(rows) => rows.get(index),
        }
    }

    fn row_mut(&mut self, index: usize) -> Option<&mut RowEditor> {
        let text = self.list.get(index)?;
        match &mut self.rows {
            RowStates::Stable(rows) => {
                let id = self.list.id_at(index)?;
                Some(rows.entry(id).or_insert_with(|| RowEditor::new(text)))
            }
            RowStates::Positional(rows) => {
                while rows.len() <= index {
                    rows.push(RowEditor::new(text));
                }
                rows.get_mut(index)
            }
        }
    }
}
