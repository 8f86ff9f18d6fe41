use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event as CrosstermEvent};

/// Events the runtime feeds to an application.
#[derive(Debug, Clone, derive_more::From)]
pub(super) enum TuiEvent {
    /// Logic update timing (based on the tick interval).
    Tick,
    /// Screen render timing (based on the frame interval).
    Render,
    /// Terminal events such as key input, mouse, and resize.
    Input(CrosstermEvent),
}

/// Produces tick, render, and input events in deadline order.
///
/// Ticks and renders fire at fixed intervals; between deadlines the loop
/// polls the terminal so input is handled as soon as it arrives. An interval
/// left unset never fires.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    frame_interval: Option<Duration>,
    last_tick: Instant,
    last_render: Instant,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub(super) fn new() -> Self {
        // Anchor in the past so the first tick and render fire immediately.
        let now = Instant::now();
        let past_time = now.checked_sub(Duration::from_secs(86400)).unwrap_or(now);
        Self {
            tick_interval: None,
            frame_interval: None,
            last_tick: past_time,
            last_render: past_time,
        }
    }

    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.tick_interval = interval;
    }

    pub(super) fn set_frame_interval(&mut self, interval: Option<Duration>) {
        self.frame_interval = interval;
    }

    /// Returns the next event, blocking until a deadline passes or the
    /// terminal delivers input.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(tick_interval) = self.tick_interval
                && now.duration_since(self.last_tick) >= tick_interval
            {
                self.last_tick = now;
                return Ok(TuiEvent::Tick);
            }
            if let Some(frame_interval) = self.frame_interval
                && now.duration_since(self.last_render) >= frame_interval
            {
                self.last_render = now;
                return Ok(TuiEvent::Render);
            }

            if let Some(timeout) = self.compute_timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            return Ok(event::read()?.into());
        }
    }

    /// Time until the earliest pending deadline, or `None` when neither
    /// interval is set (wait for input indefinitely).
    fn compute_timeout(&self, now: Instant) -> Option<Duration> {
        let next_tick_at = self.tick_interval.map(|interval| self.last_tick + interval);
        let next_render_at = self
            .frame_interval
            .map(|interval| self.last_render + interval);
        let next_deadline = [next_tick_at, next_render_at].into_iter().flatten().min()?;
        Some(next_deadline.saturating_duration_since(now))
    }
}
