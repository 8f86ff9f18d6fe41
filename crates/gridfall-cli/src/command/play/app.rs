use crossterm::event::Event;
use gridfall_engine::{GameSnapshot, PieceSeed};
use ratatui::Frame;

use crate::{
    command::play::screen::PlayScreen,
    tui::{App, Runtime},
};

const FPS: f64 = 60.0;

#[derive(Debug)]
pub struct PlayApp {
    screen: PlayScreen,
}

impl PlayApp {
    pub fn new(seed: Option<PieceSeed>, show_ghost: bool) -> Self {
        Self {
            screen: PlayScreen::new(seed, show_ghost),
        }
    }

    pub fn into_snapshot(self) -> GameSnapshot {
        self.screen.into_snapshot()
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_rate(FPS);
        runtime.set_frame_rate(FPS);
    }

    fn should_exit(&self) -> bool {
        self.screen.is_exiting()
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: Event) {
        self.screen.handle_event(&event);
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }

    fn update(&mut self, _runtime: &mut Runtime) {
        self.screen.update();
    }
}
