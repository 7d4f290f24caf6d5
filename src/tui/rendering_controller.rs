//! Redraw throttling
//!
//! Input and toast expiry request a redraw; the event loop only draws once
//! the throttle interval since the previous frame has passed.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct RenderingController {
    /// Whether a redraw is needed
    pub needs_redraw: bool,

    /// Last time the UI was drawn
    pub last_draw_time: Instant,

    /// Minimum time between redraws
    pub draw_throttle_duration: Duration,
}

impl RenderingController {
    /// 60 FPS
    pub fn new() -> Self {
        Self::with_fps(60)
    }

    pub fn with_fps(fps: u32) -> Self {
        let frame_duration = Duration::from_millis(1000 / u64::from(fps.max(1)));
        Self {
            needs_redraw: true,
            last_draw_time: Instant::now(),
            draw_throttle_duration: frame_duration,
        }
    }

    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// True when a redraw is pending and the throttle interval has passed
    pub fn should_draw(&self) -> bool {
        self.needs_redraw && self.last_draw_time.elapsed() >= self.draw_throttle_duration
    }

    pub fn mark_drawn(&mut self) {
        self.needs_redraw = false;
        self.last_draw_time = Instant::now();
    }

    pub fn time_until_next_draw(&self) -> Duration {
        self.draw_throttle_duration
            .saturating_sub(self.last_draw_time.elapsed())
    }

    /// Bypass the throttle for the next draw (first frame, resize)
    pub fn force_redraw(&mut self) {
        self.needs_redraw = true;
        self.last_draw_time = Instant::now()
            .checked_sub(self.draw_throttle_duration)
            .unwrap_or_else(Instant::now);
    }
}

impl Default for RenderingController {
    fn default() -> Self {
        Self::new()
    }
}
