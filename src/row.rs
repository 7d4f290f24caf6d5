//! Row editor: transient per-row state and its render model

use crate::tui::input::{InputHandler, InputOperation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowMode {
    #[default]
    Viewing,
    Editing,
}

/// Interactive affordances a row exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    ToggleEdit,
    Confirm,
    Delete,
}

/// What the row shows in its main area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowContent {
    Label(String),
    Input {
        label: String,
        value: String,
        cursor: usize,
    },
}

/// Render model for a single row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub index: usize,
    pub content: RowContent,
    pub affordances: Vec<Affordance>,
}

impl RowView {
    pub fn is_editing(&self) -> bool {
        matches!(self.content, RowContent::Input { .. })
    }
}

/// Intent a row reports to the list container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIntent {
    Edit(String),
    Delete,
}

/// Transient state of one row.
///
/// The draft is copied from the item text when the editor is created and is
/// never re-synchronised afterwards. Toggling the mode leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEditor {
    mode: RowMode,
    draft: String,
    cursor: usize,
}

impl RowEditor {
    pub fn new(text: &str) -> Self {
        Self {
            mode: RowMode::Viewing,
            draft: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    pub fn mode(&self) -> RowMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == RowMode::Editing
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn toggle_edit_mode(&mut self) {
        self.mode = match self.mode {
            RowMode::Viewing => {
                self.cursor = self.draft.chars().count();
                RowMode::Editing
            }
            RowMode::Editing => RowMode::Viewing,
        };
    }

    /// Leave edit mode after the container accepted an edit
    pub fn finish_editing(&mut self) {
        self.mode = RowMode::Viewing;
    }

    /// Apply a text operation to the draft. Returns false while viewing.
    pub fn edit_draft(&mut self, operation: InputOperation, kill_ring: &mut String) -> bool {
        if !self.is_editing() {
            return false;
        }
        InputHandler::apply_operation(operation, &mut self.draft, &mut self.cursor, kill_ring);
        true
    }

    /// Confirm affordance; only exists while editing
    pub fn confirm(&self) -> Option<RowIntent> {
        self.is_editing().then(|| RowIntent::Edit(self.draft.clone()))
    }

    pub fn delete(&self) -> RowIntent {
        RowIntent::Delete
    }

    pub fn view(&self, index: usize, text: &str) -> RowView {
        match self.mode {
            RowMode::Viewing => RowView {
                index,
                content: RowContent::Label(text.to_string()),
                affordances: vec![Affordance::ToggleEdit, Affordance::Delete],
            },
            RowMode::Editing => RowView {
                index,
                content: RowContent::Input {
                    label: format!("Edit To Do {}", index + 1),
                    value: self.draft.clone(),
                    cursor: self.cursor,
                },
                affordances: vec![Affordance::Confirm, Affordance::Delete],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_row_is_viewing() {
        let row = RowEditor::new("To Do 1");
        let view = row.view(0, "To Do 1");
        assert_eq!(row.mode(), RowMode::Viewing);
        assert_eq!(view.content, RowContent::Label("To Do 1".to_string()));
        assert_eq!(view.affordances, vec![Affordance::ToggleEdit, Affordance::Delete]);
    }

    #[test]
    fn test_editing_view_has_input_and_confirm() {
        let mut row = RowEditor::new("To Do 3");
        row.toggle_edit_mode();
        let view = row.view(2, "To Do 3");
        assert_eq!(
            view.content,
            RowContent::Input {
                label: "Edit To Do 3".to_string(),
                value: "To Do 3".to_string(),
                cursor: 7,
            }
        );
        assert_eq!(view.affordances, vec![Affordance::Confirm, Affordance::Delete]);
    }

    #[test]
    fn test_confirm_only_while_editing() {
        let mut row = RowEditor::new("a");
        assert_eq!(row.confirm(), None);
        row.toggle_edit_mode();
        assert_eq!(row.confirm(), Some(RowIntent::Edit("a".to_string())));
    }

    #[test]
    fn test_draft_survives_toggle() {
        let mut kill_ring = String::new();
        let mut row = RowEditor::new("milk");
        row.toggle_edit_mode();
        row.edit_draft(InputOperation::InsertChar('!'), &mut kill_ring);
        row.toggle_edit_mode();
        assert_eq!(row.mode(), RowMode::Viewing);
        row.toggle_edit_mode();
        assert_eq!(row.draft(), "milk!");
    }

    #[test]
    fn test_draft_ignores_edits_while_viewing() {
        let mut kill_ring = String::new();
        let mut row = RowEditor::new("milk");
        assert!(!row.edit_draft(InputOperation::InsertChar('x'), &mut kill_ring));
        assert_eq!(row.draft(), "milk");
    }

    #[test]
    fn test_view_label_uses_passed_text_not_draft() {
        let mut kill_ring = String::new();
        let mut row = RowEditor::new("old");
        row.toggle_edit_mode();
        row.edit_draft(InputOperation::KillLine, &mut kill_ring);
        row.edit_draft(InputOperation::MoveCursorToStart, &mut kill_ring);
        row.edit_draft(InputOperation::KillLine, &mut kill_ring);
        row.toggle_edit_mode();
        assert_eq!(row.view(0, "old").content, RowContent::Label("old".to_string()));
        assert_eq!(row.draft(), "");
    }
}
