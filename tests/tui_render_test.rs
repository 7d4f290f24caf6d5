use ratatui::{backend::TestBackend, Terminal};
use std::time::Duration;
use todo_list::tui::{ToastState, ToastType, TuiRenderer};
use todo_list::{RowIdentity, TodoList, TodoStore, TuiInput, TuiState};

fn render(state: &TuiState, toast: &ToastState) -> Vec<String> {
    let backend = TestBackend::new(70, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| TuiRenderer::render(f, state, toast))
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer.get(x, y).symbol.clone())
                .collect::<String>()
        })
        .collect()
}

fn contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

fn state(texts: &[&str]) -> TuiState {
    TuiState::new(
        TodoStore::new(TodoList::from_texts(texts.iter().copied()), RowIdentity::Stable),
        "ToDo List",
    )
}

#[test]
fn test_initial_screen() {
    let state = TuiState::new(TodoStore::seeded(100, RowIdentity::Stable), "ToDo List");
    let lines = render(&state, &ToastState::new());

    assert!(contains(&lines, "ToDo List"));
    assert!(contains(&lines, "Items (100)"));
    assert!(contains(&lines, "To Do 1  [e] Edit  [d] Delete"));
    assert!(contains(&lines, "To Do 2  [e] Edit  [d] Delete"));
    assert!(!contains(&lines, "Edit To Do"));
}

#[test]
fn test_editing_row_shows_input_and_save() {
    let mut state = state(&["milk", "eggs"]);
    state.handle_input(TuiInput::ToggleEditMode);
    let lines = render(&state, &ToastState::new());

    assert!(contains(&lines, "Edit To Do 1: milk█  [⏎] Save  [^X] Delete"));
    assert!(contains(&lines, "eggs  [e] Edit  [d] Delete"));
    assert!(contains(&lines, "Enter: Save"));
}

#[test]
fn test_empty_list_renders_without_rows() {
    let mut state = state(&["only"]);
    state.handle_input(TuiInput::Delete);
    let lines = render(&state, &ToastState::new());

    assert!(contains(&lines, "Items (0)"));
    assert!(!contains(&lines, "[d] Delete"));
}

#[test]
fn test_toast_and_help_overlays() {
    let mut state = state(&["A"]);
    let mut toast = ToastState::new();
    toast.show(
        "Deleted \"B\"".to_string(),
        ToastType::Info,
        Duration::from_secs(5),
    );
    state.handle_input(TuiInput::ToggleHelp);
    let lines = render(&state, &toast);

    assert!(contains(&lines, "Deleted \"B\""));
    assert!(contains(&lines, "ToDo List - Help"));
}
