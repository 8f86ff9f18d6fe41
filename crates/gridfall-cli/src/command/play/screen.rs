use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode};
use gridfall_engine::{GameSession, GameSnapshot, PieceSeed};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};

use crate::ui::widgets::GameDisplay;

#[derive(Debug)]
pub struct PlayScreen {
    session: GameSession,
    show_ghost: bool,
    paused: bool,
    exiting: bool,
    last_tick: Option<Instant>,
    play_time: Duration,
}

impl PlayScreen {
    pub fn new(seed: Option<PieceSeed>, show_ghost: bool) -> Self {
        let session = match seed {
            Some(seed) => GameSession::with_seed(seed),
            None => GameSession::new(),
        };
        Self {
            session,
            show_ghost,
            paused: false,
            exiting: false,
            last_tick: None,
            play_time: Duration::ZERO,
        }
    }

    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    pub fn into_snapshot(self) -> GameSnapshot {
        self.session.snapshot()
    }

    pub fn handle_event(&mut self, event: &Event) {
        let is_playing = !self.paused;

        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Left if is_playing => self.session.move_left(),
                KeyCode::Right if is_playing => self.session.move_right(),
                KeyCode::Down if is_playing => self.session.soft_drop(),
                KeyCode::Up | KeyCode::Char('x') if is_playing => self.session.rotate_cw(),
                KeyCode::Char('z') if is_playing => self.session.rotate_ccw(),
                KeyCode::Char(' ') if is_playing => self.session.hard_drop(),
                KeyCode::Char('p') => self.paused = !self.paused,
                KeyCode::Char('q') => self.exiting = true,
                _ => {}
            }
        }
    }

    /// Feeds game time to the session.
    ///
    /// Wall-clock time elapsed while paused never reaches the session, so
    /// unpausing does not release a burst of queued gravity drops.
    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = self.last_tick.map_or(Duration::ZERO, |last| now - last);
        self.last_tick = Some(now);
        if !self.paused {
            self.play_time += delta;
            self.session.advance(self.play_time);
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let game_display = GameDisplay::new(&self.session)
            .show_ghost(self.show_ghost)
            .paused(self.paused);
        let help_text = if self.paused {
            "Controls: P (Resume) | Q (Quit)"
        } else {
            "Controls: ← → (Move) | ↓ (Soft Drop) | ↑ X (Rotate) | Z (Rotate CCW) | Space (Hard Drop) | P (Pause) | Q (Quit)"
        };
        let help_text = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(23), Constraint::Length(1)])
                .areas::<2>(frame.area());
        frame.render_widget(game_display, main_area);
        frame.render_widget(help_text, help_area);
    }
}
