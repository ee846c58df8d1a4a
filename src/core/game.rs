/// Core game interface for the unscramble engine
use crossterm::event::KeyEvent;
use std::time::Duration;

/// What the engine should do after a game handled an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Main game trait driven by the engine loop.
/// The engine owns the terminal; games only translate input and draw.
pub trait Game {
    /// Handle a single key press from the player
    fn handle_input(&mut self, event: KeyEvent) -> Flow;

    /// Render the current state into the Ratatui Frame
    fn render(&self, frame: &mut ratatui::Frame);

    /// How often `on_tick` fires. `None` disables ticking.
    fn tick_rate(&self) -> Option<Duration> {
        None
    }

    fn on_tick(&mut self, _dt: Duration) {}
}
