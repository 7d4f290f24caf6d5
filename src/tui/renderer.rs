//! TUI rendering
//!
//! Draws the title bar, the to-do rows, the key hint bar and the optional
//! toast / help overlays from [`TuiState`]. Rows are drawn from their
//! [`RowView`] render models only.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{ToastState, ToastType};
use crate::row::{Affordance, RowContent, RowView};
use crate::tui_state::TuiState;

const CURSOR: char = '█';

pub struct TuiRenderer;

impl TuiRenderer {
    /// Render the complete TUI interface
    pub fn render(f: &mut Frame, state: &TuiState, toast_state: &ToastState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Min(1),    // Rows
                Constraint::Length(3), // Key hints
            ])
            .split(f.size());

        Self::render_title_bar(f, chunks[0], &state.title);
        Self::render_rows(f, chunks[1], state);
        Self::render_key_hints(f, chunks[2], state.selected_is_editing());

        if toast_state.visible {
            Self::render_toast(f, toast_state);
        }

        if state.show_help {
            Self::render_help_popup(f);
        }
    }

    fn render_title_bar(f: &mut Frame, area: Rect, title: &str) {
        let title_bar = Paragraph::new(Span::styled(
            title.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        f.render_widget(title_bar, area);
    }

    fn render_rows(f: &mut Frame, area: Rect, state: &TuiState) {
        let rows = state.store.rows();
        let divider = "─".repeat(area.width.saturating_sub(2) as usize);
        let last = rows.len().saturating_sub(1);

        let items: Vec<ListItem> = rows
            .iter()
            .map(|row| {
                let mut lines = vec![Self::row_line(row)];
                if row.index != last {
                    lines.push(Line::from(Span::styled(
                        divider.clone(),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                ListItem::new(Text::from(lines))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Items ({})", rows.len()))
                    .border_style(Style::default().fg(Color::Green)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));

        let mut list_state = ListState::default();
        list_state.select(state.selected());

        f.render_stateful_widget(list, area, &mut list_state);
    }

    /// One row: label or input, then the affordance markers
    pub fn row_line(row: &RowView) -> Line<'static> {
        let mut spans = match &row.content {
            RowContent::Label(text) => vec![Span::raw(text.clone())],
            RowContent::Input {
                label,
                value,
                cursor,
            } => vec![
                Span::styled(format!("{}: ", label), Style::default().fg(Color::Cyan)),
                Span::styled(
                    Self::with_cursor(value, *cursor),
                    Style::default().fg(Color::Yellow),
                ),
            ],
        };

        for affordance in &row.affordances {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                Self::affordance_marker(*affordance, row.is_editing()),
                Style::default().fg(Color::Gray),
            ));
        }

        Line::from(spans)
    }

    fn affordance_marker(affordance: Affordance, editing: bool) -> &'static str {
        match affordance {
            Affordance::ToggleEdit => "[e] Edit",
            Affordance::Confirm => "[⏎] Save",
            Affordance::Delete if editing => "[^X] Delete",
            Affordance::Delete => "[d] Delete",
        }
    }

    /// Insert a block cursor at the given char position
    pub fn with_cursor(text: &str, cursor: usize) -> String {
        let mut chars: Vec<char> = text.chars().collect();
        let position = cursor.min(chars.len());
        chars.insert(position, CURSOR);
        chars.into_iter().collect()
    }

    fn render_key_hints(f: &mut Frame, area: Rect, editing: bool) {
        let hints = if editing {
            "Enter: Save | Esc: Stop editing | C-x: Delete | C-a/e: Start/End | C-k/y: Kill/Yank | F1: Help"
        } else {
            "↑↓/j/k: Navigate | e/Enter: Edit | d: Delete | ?: Help | q/Esc: Quit"
        };
        let bar = Paragraph::new(hints)
            .block(Block::default().borders(Borders::ALL).title("Keys"))
            .style(Style::default().fg(Color::Gray));
        f.render_widget(bar, area);
    }

    fn render_toast(f: &mut Frame, toast_state: &ToastState) {
        let (width, height) = Self::calculate_toast_size(toast_state, f.size());
        let popup_area = Self::top_right_rect(width, height, f.size());

        f.render_widget(Clear, popup_area);

        let (border_color, title) = match toast_state.toast_type {
            ToastType::Info => (Color::Blue, "Info"),
            ToastType::Success => (Color::Green, "Saved"),
            ToastType::Warning => (Color::Yellow, "Warning"),
            ToastType::Error => (Color::Red, "Error"),
        };

        let toast = Paragraph::new(toast_state.message.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(border_color)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });

        f.render_widget(toast, popup_area);
    }

    fn render_help_popup(f: &mut Frame) {
        let popup_area = Self::centered_rect(60, 70, f.size());

        let help_text = Text::from(vec![
            Line::from("ToDo List - Help"),
            Line::from(""),
            Line::from("Viewing a row:"),
            Line::from("  ↑/↓, j/k, C-p/C-n - Move selection"),
            Line::from("  PgUp/PgDn, g/G     - Jump"),
            Line::from("  e / Enter          - Edit the row"),
            Line::from("  d / Delete         - Delete the row"),
            Line::from("  q / Esc / C-c      - Quit"),
            Line::from(""),
            Line::from("Editing a row:"),
            Line::from("  Enter              - Save"),
            Line::from("  Esc                - Stop editing (draft is kept)"),
            Line::from("  C-x                - Delete the row"),
            Line::from("  C-a/C-e, C-b/C-f   - Move cursor"),
            Line::from("  C-d/C-h, C-k/C-y   - Delete, kill, yank"),
            Line::from(""),
            Line::from("Press any key to close help"),
        ]);

        let help_popup = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help")
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().bg(Color::Black));

        f.render_widget(Clear, popup_area);
        f.render_widget(help_popup, popup_area);
    }

    /// Toast size in characters, borders included
    pub fn calculate_toast_size(toast_state: &ToastState, screen_size: Rect) -> (u16, u16) {
        let max_width = screen_size.width.saturating_sub(4);
        let min_width = 20;

        let content_width = toast_state.message.chars().count() as u16;
        let width = content_width.saturating_add(4).max(min_width).min(max_width);

        let text_area_width = width.saturating_sub(4) as usize;
        let height = Self::calculate_wrapped_lines(&toast_state.message, text_area_width) as u16 + 2;

        (width, height)
    }

    pub fn top_right_rect(width: u16, height: u16, r: Rect) -> Rect {
        let x = r.width.saturating_sub(width.saturating_add(1));
        Rect {
            x: r.x + x,
            y: r.y + 1,
            width: width.min(r.width),
            height: height.min(r.height),
        }
    }

    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    pub fn calculate_wrapped_lines(text: &str, width: usize) -> usize {
        if width == 0 {
            return text.lines().count().max(1);
        }

        text.lines()
            .map(|line| {
                let char_count = line.chars().count();
                if char_count == 0 {
                    1
                } else {
                    (char_count + width - 1) / width
                }
            })
            .sum::<usize>()
            .max(1)
    }
}
