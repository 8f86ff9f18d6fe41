use serde::{Deserialize, Serialize};

/// Score and progress counters for a running game.
///
/// Scoring is a flat bonus per cleared row; there are no combos, level
/// multipliers, or drop bonuses. All counters reset together when a spawned
/// piece collides immediately (the silent top-out reset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    score: usize,
    locked_pieces: usize,
    cleared_rows: usize,
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    /// Points awarded per cleared row.
    pub const POINTS_PER_ROW: usize = 10;

    /// Creates a tracker with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            locked_pieces: 0,
            cleared_rows: 0,
        }
    }

    /// Current score.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Total pieces locked into the arena.
    #[must_use]
    pub const fn locked_pieces(&self) -> usize {
        self.locked_pieces
    }

    /// Total rows cleared.
    #[must_use]
    pub const fn cleared_rows(&self) -> usize {
        self.cleared_rows
    }

    /// Updates the counters after a piece locks.
    pub const fn record_lock(&mut self, cleared_rows: usize) {
        self.locked_pieces += 1;
        self.cleared_rows += cleared_rows;
        self.score += Self::POINTS_PER_ROW * cleared_rows;
    }

    /// Zeroes every counter (top-out reset).
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
