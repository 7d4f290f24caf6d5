//! Authoritative list of to-do items
//!
//! Items live in an arena keyed by [`ItemId`] while a separate display order
//! decides their positions. Positions are always contiguous `0..len`.

use crate::error::{Result, TodoError};
use crate::types::{seed_text, Item, ItemId};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct TodoList {
    items: HashMap<ItemId, String>,
    order: Vec<ItemId>,
    next_id: u64,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// List of `count` placeholder items: "To Do 1" .. "To Do {count}"
    pub fn seeded(count: usize) -> Self {
        Self::from_texts((0..count).map(seed_text))
    }

    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for text in texts {
            list.push(text.into());
        }
        list
    }

    fn push(&mut self, text: String) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.insert(id, text);
        self.order.push(id);
        id
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Text at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.order
            .get(index)
            .and_then(|id| self.items.get(id))
            .map(String::as_str)
    }

    pub fn id_at(&self, index: usize) -> Option<ItemId> {
        self.order.get(index).copied()
    }

    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.order.iter().position(|candidate| *candidate == id)
    }

    /// Items in display order
    pub fn iter(&self) -> impl Iterator<Item = Item> + '_ {
        self.order.iter().map(move |id| Item {
            id: *id,
            text: self.items.get(id).cloned().unwrap_or_default(),
        })
    }

    /// Texts in display order
    pub fn texts(&self) -> Vec<String> {
        self.iter().map(|item| item.text).collect()
    }

    /// Replace the text at `index`, returning the previous text
    pub fn replace(&mut self, index: usize, text: impl Into<String>) -> Result<String> {
        let id = self.checked_id(index)?;
        let len = self.order.len();
        let slot = self
            .items
            .get_mut(&id)
            .ok_or(TodoError::IndexOutOfBounds { index, len })?;
        Ok(std::mem::replace(slot, text.into()))
    }

    /// Remove the item at `index`; later items shift down by one
    pub fn remove(&mut self, index: usize) -> Result<Item> {
        let id = self.checked_id(index)?;
        self.order.remove(index);
        let text = self.items.remove(&id).unwrap_or_default();
        Ok(Item { id, text })
    }

    fn checked_id(&self, index: usize) -> Result<ItemId> {
        self.id_at(index).ok_or(TodoError::IndexOutOfBounds {
            index,
            len: self.order.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_list() {
        let list = TodoList::seeded(100);
        assert_eq!(list.len(), 100);
        assert_eq!(list.get(0), Some("To Do 1"));
        assert_eq!(list.get(99), Some("To Do 100"));
        assert_eq!(list.get(100), None);
    }

    #[test]
    fn test_replace_only_touches_target() {
        let mut list = TodoList::from_texts(["A", "B", "C"]);
        let previous = list.replace(1, "Z").unwrap();
        assert_eq!(previous, "B");
        assert_eq!(list.texts(), vec!["A", "Z", "C"]);
    }

    #[test]
    fn test_remove_shifts_later_items() {
        let mut list = TodoList::from_texts(["A", "B", "C", "D"]);
        let removed = list.remove(1).unwrap();
        assert_eq!(removed.text, "B");
        assert_eq!(list.texts(), vec!["A", "C", "D"]);
        assert_eq!(list.position_of(removed.id), None);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut list = TodoList::from_texts(["A"]);
        assert!(matches!(
            list.replace(1, "x"),
            Err(TodoError::IndexOutOfBounds { index: 1, len: 1 })
        ));
        assert!(matches!(
            list.remove(3),
            Err(TodoError::IndexOutOfBounds { index: 3, len: 1 })
        ));
        assert_eq!(list.texts(), vec!["A"]);
    }

    #[test]
    fn test_ids_follow_items() {
        let mut list = TodoList::from_texts(["A", "B", "C"]);
        let c = list.id_at(2).unwrap();
        list.remove(0).unwrap();
        assert_eq!(list.position_of(c), Some(1));
        assert_eq!(list.id_at(1), Some(c));
    }

    #[test]
    fn test_remove_last_leaves_empty_list() {
        let mut list = TodoList::from_texts(["only"]);
        list.remove(0).unwrap();
        assert!(list.is_empty());
        assert!(list.texts().is_empty());
    }
}
