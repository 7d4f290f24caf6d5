//! Terminal UI
//!
//! Terminal setup and the event loop live here; state handling is in
//! [`crate::tui_state`], drawing in [`renderer`].

pub mod input;
pub mod keymap;
pub mod renderer;
pub mod rendering_controller;
pub mod toast;

pub use input::{InputHandler, InputOperation};
pub use renderer::TuiRenderer;
pub use rendering_controller::RenderingController;
pub use toast::{ToastState, ToastType};

use crate::config::TodoConfig;
use crate::tui_state::{TuiAction, TuiState};
use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(50);

/// Run the to-do list until the user quits
pub async fn run_tui(config: TodoConfig) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = TuiState::from_config(&config);
    state.store.subscribe(|event, list| {
        log::info!("{:?} (items: {})", event, list.len());
    });

    let result = run_app(&mut terminal, &mut state, &config).await;

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut TuiState,
    config: &TodoConfig,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK);
    let mut toast = ToastState::new();
    let mut rendering = RenderingController::with_fps(config.fps);
    rendering.force_redraw();

    loop {
        if rendering.should_draw() {
            terminal.draw(|f| TuiRenderer::render(f, state, &toast))?;
            rendering.mark_drawn();
        }

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => {
                        for action in state.handle_key(key) {
                            apply_action(action, &mut toast, config);
                        }
                        rendering.request_redraw();
                    }
                    Some(Ok(Event::Resize(width, height))) => {
                        log::debug!("Terminal resized to {}x{}", width, height);
                        rendering.force_redraw();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                    None => break,
                }
            }
            _ = ticker.tick() => {
                if toast.update() {
                    rendering.request_redraw();
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

fn apply_action(action: TuiAction, toast: &mut ToastState, config: &TodoConfig) {
    match action {
        TuiAction::Quit => log::debug!("Quit requested"),
        TuiAction::Toast {
            message,
            toast_type,
        } => toast.show(message, toast_type, config.toast_duration()),
    }
}
