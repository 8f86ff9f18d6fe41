use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Runtime;

/// Trait for TUI applications executed by [`Runtime::run`].
pub trait App {
    /// Initializes the application; use this to configure tick/frame rates.
    fn init(&mut self, runtime: &mut Runtime);

    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    /// Draws the screen (called once per render frame).
    fn draw(&self, frame: &mut Frame);

    /// Updates application logic (called once per tick).
    fn update(&mut self, runtime: &mut Runtime);
}
