//! Toast notifications
//!
//! Short-lived messages drawn in the top-right corner after a save, a delete
//! or an ignored action. A toast hides itself once its deadline passes.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct ToastState {
    pub visible: bool,
    pub message: String,
    pub toast_type: ToastType,
    pub show_until: Option<Instant>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastType {
    Info,
    Success,
    Warning,
    Error,
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            visible: false,
            message: String::new(),
            toast_type: ToastType::Info,
            show_until: None,
        }
    }

    pub fn show(&mut self, message: String, toast_type: ToastType, duration: Duration) {
        self.visible = true;
        self.message = message;
        self.toast_type = toast_type;
        self.show_until = Some(Instant::now() + duration);
    }

    /// Hide the toast if it expired. Returns true when it was just hidden.
    pub fn update(&mut self) -> bool {
        match self.show_until {
            Some(until) if Instant::now() >= until => {
                self.hide();
                true
            }
            _ => false,
        }
    }

    /// Time left before the toast expires
    pub fn expires_in(&self) -> Option<Duration> {
        self.show_until
            .map(|until| until.saturating_duration_since(Instant::now()))
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.show_until = None;
    }
}
