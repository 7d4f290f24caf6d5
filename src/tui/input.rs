//! Draft text editing
//!
//! Emacs-style editing operations applied to a row's draft. The cursor is a
//! char index, so multi-byte text edits cleanly.

/// Input operations for unified input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOperation {
    InsertChar(char),
    MoveCursorToStart,
    MoveCursorToEnd,
    MoveCursorLeft,
    MoveCursorRight,
    DeleteCharForward,
    DeleteCharBackward,
    KillLine,
    Yank,
}

/// Input handler for managing text editing state
pub struct InputHandler;

impl InputHandler {
    /// Apply an input operation to the given text and cursor state
    pub fn apply_operation(
        operation: InputOperation,
        text: &mut String,
        cursor_position: &mut usize,
        kill_ring: &mut String,
    ) {
        let char_count = text.chars().count();
        *cursor_position = (*cursor_position).min(char_count);

        match operation {
            InputOperation::InsertChar(c) => {
                text.insert(byte_offset(text, *cursor_position), c);
                *cursor_position += 1;
            }
            InputOperation::MoveCursorToStart => {
                *cursor_position = 0;
            }
            InputOperation::MoveCursorToEnd => {
                *cursor_position = char_count;
            }
            InputOperation::MoveCursorLeft => {
                *cursor_position = cursor_position.saturating_sub(1);
            }
            InputOperation::MoveCursorRight => {
                if *cursor_position < char_count {
                    *cursor_position += 1;
                }
            }
            InputOperation::DeleteCharForward => {
                if *cursor_position < char_count {
                    text.remove(byte_offset(text, *cursor_position));
                }
            }
            InputOperation::DeleteCharBackward => {
                if *cursor_position > 0 {
                    *cursor_position -= 1;
                    text.remove(byte_offset(text, *cursor_position));
                }
            }
            InputOperation::KillLine => {
                if *cursor_position < char_count {
                    let start = byte_offset(text, *cursor_position);
                    *kill_ring = text[start..].to_string();
                    text.truncate(start);
                }
            }
            InputOperation::Yank => {
                if !kill_ring.is_empty() {
                    text.insert_str(byte_offset(text, *cursor_position), kill_ring);
                    *cursor_position += kill_ring.chars().count();
                }
            }
        }
    }
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_operations() {
        let mut text = "hello".to_string();
        let mut cursor = 2; // Between 'e' and 'l'
        let mut kill_ring = String::new();

        InputHandler::apply_operation(
            InputOperation::InsertChar('X'),
            &mut text,
            &mut cursor,
            &mut kill_ring,
        );
        assert_eq!(text, "heXllo");
        assert_eq!(cursor, 3);

        InputHandler::apply_operation(
            InputOperation::MoveCursorToStart,
            &mut text,
            &mut cursor,
            &mut kill_ring,
        );
        assert_eq!(cursor, 0);

        InputHandler::apply_operation(
            InputOperation::MoveCursorToEnd,
            &mut text,
            &mut cursor,
            &mut kill_ring,
        );
        assert_eq!(cursor, 6);
    }

    #[test]
    fn test_kill_and_yank() {
        let mut text = "buy milk today".to_string();
        let mut cursor = 9; // After "buy milk "
        let mut kill_ring = String::new();

        InputHandler::apply_operation(
            InputOperation::KillLine,
            &mut text,
            &mut cursor,
            &mut kill_ring,
        );
        assert_eq!(text, "buy milk ");
        assert_eq!(kill_ring, "today");
        assert_eq!(cursor, 9);

        cursor = 0;
        InputHandler::apply_operation(InputOperation::Yank, &mut text, &mut cursor, &mut kill_ring);
        assert_eq!(text, "todaybuy milk ");
        assert_eq!(cursor, 5);
    }

    #[test]
    fn test_cursor_movement_boundaries() {
        let mut text = "test".to_string();
        let mut cursor = 0;
        let mut kill_ring = String::new();

        InputHandler::apply_operation(
            InputOperation::MoveCursorLeft,
            &mut text,
            &mut cursor,
            &mut kill_ring,
        );
        assert_eq!(cursor, 0);

        cursor = 4;
        InputHandler::apply_operation(
            InputOperation::MoveCursorRight,
            &mut text,
            &mut cursor,
            &mut kill_ring,
        );
        assert_eq!(cursor, 4);
    }

    #[test]
    fn test_delete_operations() {
        let mut text = "hello".to_string();
        let mut cursor = 2;
        let mut kill_ring = String::new();

        // C-d
        InputHandler::apply_operation(
            InputOperation::DeleteCharForward,
            &mut text,
            &mut cursor,
            &mut kill_ring,
        );
        assert_eq!(text, "helo");
        assert_eq!(cursor, 2);

        // Backspace
        InputHandler::apply_operation(
            InputOperation::DeleteCharBackward,
            &mut text,
            &mut cursor,
            &mut kill_ring,
        );
        assert_eq!(text, "hlo");
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_multibyte_text() {
        let mut text = "やること".to_string();
        let mut cursor = 4;
        let mut kill_ring = String::new();

        InputHandler::apply_operation(
            InputOperation::DeleteCharBackward,
            &mut text,
            &mut cursor,
            &mut kill_ring,
        );
        assert_eq!(text, "やるこ");
        assert_eq!(cursor, 3);

        InputHandler::apply_operation(
            InputOperation::InsertChar('!'),
            &mut text,
            &mut cursor,
            &mut kill_ring,
        );
        assert_eq!(text, "やるこ!");
    }

    #[test]
    fn test_cursor_clamped_to_text() {
        let mut text = "ab".to_string();
        let mut cursor = 10;
        let mut kill_ring = String::new();

        InputHandler::apply_operation(
            InputOperation::InsertChar('c'),
            &mut text,
            &mut cursor,
            &mut kill_ring,
        );
        assert_eq!(text, "abc");
        assert_eq!(cursor, 3);
    }
}
