use crate::config::TodoConfig;
use crate::store::{StoreEvent, TodoIntent, TodoStore};
use crate::tui::input::InputOperation;
use crate::tui::keymap::map_key;
use crate::tui::ToastType;
use crossterm::event::KeyEvent;

/// Rows skipped by PageUp / PageDown
pub const PAGE_SIZE: usize = 10;

/// UI state for the TUI application.
/// Holds screen state and the store; no rendering logic.
#[derive(Debug)]
pub struct TuiState {
    pub store: TodoStore,
    pub title: String,
    pub selected_index: usize,
    pub show_help: bool,
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(store: TodoStore, title: impl Into<String>) -> Self {
        Self {
            store,
            title: title.into(),
            selected_index: 0,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn from_config(config: &TodoConfig) -> Self {
        Self::new(
            TodoStore::seeded(config.seed_count, config.row_identity),
            config.title.clone(),
        )
    }

    /// Selected row, if the list is not empty
    pub fn selected(&self) -> Option<usize> {
        (!self.store.is_empty()).then_some(self.selected_index)
    }

    pub fn selected_is_editing(&self) -> bool {
        self.selected().is_some_and(|index| self.store.is_editing(index))
    }

    /// Translate a key press and apply it
    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<TuiAction> {
        if self.show_help {
            self.show_help = false;
            return Vec::new();
        }
        match map_key(key, self.selected_is_editing()) {
            Some(input) => self.handle_input(input),
            None => Vec::new(),
        }
    }

    /// Handle user input to update state
    pub fn handle_input(&mut self, input: TuiInput) -> Vec<TuiAction> {
        let mut actions = Vec::new();

        match input {
            TuiInput::Quit => {
                self.should_quit = true;
                actions.push(TuiAction::Quit);
            }
            TuiInput::ToggleHelp => {
                self.show_help = !self.show_help;
            }
            TuiInput::NavigateUp => {
                self.selected_index = self.selected_index.saturating_sub(1);
            }
            TuiInput::NavigateDown => {
                self.select_clamped(self.selected_index + 1);
            }
            TuiInput::PageUp => {
                self.selected_index = self.selected_index.saturating_sub(PAGE_SIZE);
            }
            TuiInput::PageDown => {
                self.select_clamped(self.selected_index + PAGE_SIZE);
            }
            TuiInput::First => {
                self.selected_index = 0;
            }
            TuiInput::Last => {
                self.select_clamped(usize::MAX);
            }
            TuiInput::ToggleEditMode => {
                if let Some(index) = self.selected() {
                    self.store.dispatch(TodoIntent::ToggleEditMode { index });
                }
            }
            TuiInput::Confirm => {
                if let Some(index) = self.selected() {
                    if let Some(StoreEvent::ItemEdited { text, .. }) =
                        self.store.dispatch(TodoIntent::Commit { index })
                    {
                        actions.push(TuiAction::Toast {
                            message: format!("Saved \"{}\"", text),
                            toast_type: ToastType::Success,
                        });
                    }
                }
            }
            TuiInput::Delete => {
                if let Some(index) = self.selected() {
                    match self.store.dispatch(TodoIntent::Delete { index }) {
                        Some(StoreEvent::ItemDeleted { item, .. }) => {
                            actions.push(TuiAction::Toast {
                                message: format!("Deleted \"{}\"", item.text),
                                toast_type: ToastType::Info,
                            });
                        }
                        _ => {
                            actions.push(TuiAction::Toast {
                                message: "Nothing to delete".to_string(),
                                toast_type: ToastType::Warning,
                            });
                        }
                    }
                    self.select_clamped(self.selected_index);
                }
            }
            TuiInput::Edit(op) => {
                if let Some(index) = self.selected() {
                    self.store.dispatch(TodoIntent::EditDraft { index, op });
                }
            }
        }

        actions
    }

    fn select_clamped(&mut self, index: usize) {
        self.selected_index = index.min(self.store.len().saturating_sub(1));
    }
}

/// Input events that can be sent to TUI state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiInput {
    Quit,
    ToggleHelp,
    NavigateUp,
    NavigateDown,
    PageUp,
    PageDown,
    First,
    Last,
    ToggleEditMode,
    Confirm,
    Delete,
    Edit(InputOperation),
}

/// Actions that should be taken as a result of state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiAction {
    Quit,
    Toast { message: String, toast_type: ToastType },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_state::TodoList;
    use crate::types::RowIdentity;

    fn state(texts: &[&str]) -> TuiState {
        TuiState::new(
            TodoStore::new(TodoList::from_texts(texts.iter().copied()), RowIdentity::Stable),
            "ToDo List",
        )
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut state = state(&["A", "B", "C"]);
        state.handle_input(TuiInput::NavigateUp);
        assert_eq!(state.selected_index, 0);
        state.handle_input(TuiInput::PageDown);
        assert_eq!(state.selected_index, 2);
        state.handle_input(TuiInput::First);
        assert_eq!(state.selected_index, 0);
        state.handle_input(TuiInput::Last);
        assert_eq!(state.selected_index, 2);
    }

    #[test]
    fn test_delete_last_row_moves_selection_up() {
        let mut state = state(&["A", "B"]);
        state.handle_input(TuiInput::Last);
        let actions = state.handle_input(TuiInput::Delete);
        assert_eq!(state.store.texts(), vec!["A"]);
        assert_eq!(state.selected_index, 0);
        assert_eq!(
            actions,
            vec![TuiAction::Toast {
                message: "Deleted \"B\"".to_string(),
                toast_type: ToastType::Info,
            }]
        );
    }

    #[test]
    fn test_row_inputs_on_empty_list_are_noops() {
        let mut state = state(&[]);
        assert!(state.handle_input(TuiInput::Delete).is_empty());
        assert!(state.handle_input(TuiInput::ToggleEditMode).is_empty());
        assert!(state.handle_input(TuiInput::Confirm).is_empty());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_confirm_saves_and_toasts() {
        let mut state = state(&["A"]);
        state.handle_input(TuiInput::ToggleEditMode);
        state.handle_input(TuiInput::Edit(InputOperation::InsertChar('!')));
        let actions = state.handle_input(TuiInput::Confirm);
        assert_eq!(state.store.texts(), vec!["A!"]);
        assert!(!state.selected_is_editing());
        assert!(matches!(
            actions.as_slice(),
            [TuiAction::Toast { toast_type: ToastType::Success, .. }]
        ));
    }

    #[test]
    fn test_quit() {
        let mut state = state(&["A"]);
        assert_eq!(state.handle_input(TuiInput::Quit), vec![TuiAction::Quit]);
        assert!(state.should_quit);
    }
}
