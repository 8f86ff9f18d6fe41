use std::time::Duration;

use rand::Rng as _;

use crate::core::{Arena, FallingPiece, PieceKind, Spin};

use super::{
    game_field::{DropProgress, GameField, LockOutcome},
    game_stats::GameStats,
    gravity::GravityClock,
    piece_source::{PieceSeed, PieceSource},
    snapshot::GameSnapshot,
};

/// A complete single-player game: field, score, and gravity timing.
///
/// This is the type a frontend talks to. Input events map one-to-one onto
/// the methods here and mutate the game synchronously; `advance` is called
/// once per frame with a monotonically increasing timestamp and applies
/// gravity. Rendering reads the accessors and never mutates anything.
///
/// Invalid moves and rotations are silently ignored. A top-out (a piece
/// colliding the moment it spawns) silently clears the arena and the stats
/// and play continues; there is no game-over state to observe or dismiss.
#[derive(Debug, Clone)]
pub struct GameSession {
    field: GameField,
    stats: GameStats,
    gravity: GravityClock,
    seed: PieceSeed,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Starts a session with a random piece seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Starts a session whose piece sequence is determined by `seed`.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self {
            field: GameField::new(PieceSource::with_seed(seed)),
            stats: GameStats::new(),
            gravity: GravityClock::new(),
            seed,
        }
    }

    #[must_use]
    pub fn arena(&self) -> &Arena {
        self.field.arena()
    }

    #[must_use]
    pub fn falling_piece(&self) -> &FallingPiece {
        self.field.falling_piece()
    }

    #[must_use]
    pub fn next_kind(&self) -> PieceKind {
        self.field.next_kind()
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn seed(&self) -> PieceSeed {
        self.seed
    }

    /// Where the falling piece would land right now (ghost overlay).
    #[must_use]
    pub fn drop_preview(&self) -> FallingPiece {
        self.field.drop_preview()
    }

    pub fn move_left(&mut self) {
        self.field.move_left();
    }

    pub fn move_right(&mut self) {
        self.field.move_right();
    }

    pub fn rotate_cw(&mut self) {
        self.field.rotate(Spin::Clockwise);
    }

    pub fn rotate_ccw(&mut self) {
        self.field.rotate(Spin::CounterClockwise);
    }

    /// One descent step, player-driven or on behalf of gravity.
    ///
    /// Also restarts the gravity accumulator, so soft-dropping postpones the
    /// next automatic drop.
    pub fn soft_drop(&mut self) {
        if let DropProgress::Locked(outcome) = self.field.soft_drop() {
            self.apply_lock(outcome);
        }
        self.gravity.reset();
    }

    /// Sends the piece straight down and locks it.
    pub fn hard_drop(&mut self) {
        let outcome = self.field.hard_drop();
        self.apply_lock(outcome);
        self.gravity.reset();
    }

    /// Feeds one frame timestamp to the gravity clock, soft-dropping when
    /// enough time has accumulated.
    ///
    /// `now` must grow monotonically across calls (frames); the caller
    /// decides what clock it comes from.
    pub fn advance(&mut self, now: Duration) {
        if self.gravity.observe(now) {
            self.soft_drop();
        }
    }

    /// Captures the current state for serialization.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            seed: self.seed,
            arena: self.field.arena().clone(),
            stats: self.stats.clone(),
            falling: self.field.falling_piece().kind(),
            next: self.field.next_kind(),
        }
    }

    fn apply_lock(&mut self, outcome: LockOutcome) {
        self.stats.record_lock(outcome.cleared_rows);
        if outcome.spawn_blocked {
            self.stats.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn session() -> GameSession {
        GameSession::with_seed("5c".repeat(16).parse().unwrap())
    }

    /// Replaces the falling piece so a test controls exactly what locks.
    fn force_falling(session: &mut GameSession, kind: PieceKind) {
        session.field.set_falling(FallingPiece::spawn(kind));
    }

    #[test]
    fn test_gravity_drops_after_one_second() {
        let mut session = session();
        session.advance(ms(0));
        session.advance(ms(600));
        assert_eq!(session.falling_piece().pos().y, 0);
        session.advance(ms(1200));
        assert_eq!(session.falling_piece().pos().y, 1);
        // The accumulator restarted; another short frame does nothing.
        session.advance(ms(1300));
        assert_eq!(session.falling_piece().pos().y, 1);
    }

    #[test]
    fn test_soft_drop_postpones_gravity() {
        let mut session = session();
        session.advance(ms(0));
        session.advance(ms(900));
        session.soft_drop();
        assert_eq!(session.falling_piece().pos().y, 1);
        // 900ms had accumulated; the manual drop discarded them.
        session.advance(ms(1500));
        assert_eq!(session.falling_piece().pos().y, 1);
        session.advance(ms(2000));
        assert_eq!(session.falling_piece().pos().y, 2);
    }

    #[test]
    fn test_lock_scores_ten_per_cleared_row() {
        let mut session = session();
        force_falling(&mut session, PieceKind::O);
        for x in 0..Arena::WIDTH {
            if x != 4 && x != 5 {
                session
                    .field
                    .arena_mut()
                    .fill(x, 19, Cell::Filled(PieceKind::J));
            }
        }

        session.hard_drop();
        assert_eq!(session.stats().score(), GameStats::POINTS_PER_ROW);
        assert_eq!(session.stats().cleared_rows(), 1);
        assert_eq!(session.stats().locked_pieces(), 1);
    }

    #[test]
    fn test_lock_without_clear_scores_nothing() {
        let mut session = session();
        session.hard_drop();
        assert_eq!(session.stats().score(), 0);
        assert_eq!(session.stats().locked_pieces(), 1);
    }

    #[test]
    fn test_top_out_resets_score_and_arena() {
        let mut session = session();
        session.hard_drop();
        force_falling(&mut session, PieceKind::O);
        for y in 2..Arena::HEIGHT {
            for x in 0..Arena::WIDTH {
                session
                    .field
                    .arena_mut()
                    .fill(x, y, Cell::Filled(PieceKind::Z));
            }
        }

        session.hard_drop();
        assert_eq!(session.stats(), &GameStats::new());
        assert_eq!(session.arena(), &Arena::EMPTY);
    }

    #[test]
    fn test_snapshot_reflects_the_session() {
        let mut session = session();
        session.hard_drop();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.seed, session.seed());
        assert_eq!(&snapshot.arena, session.arena());
        assert_eq!(snapshot.stats, *session.stats());
        assert_eq!(snapshot.falling, session.falling_piece().kind());
        assert_eq!(snapshot.next, session.next_kind());
    }

    #[test]
    fn test_sessions_with_the_same_seed_agree() {
        let seed: PieceSeed = "99".repeat(16).parse().unwrap();
        let mut a = GameSession::with_seed(seed);
        let mut b = GameSession::with_seed(seed);
        for _ in 0..8 {
            a.hard_drop();
            b.hard_drop();
        }
        assert_eq!(a.arena(), b.arena());
        assert_eq!(a.falling_piece(), b.falling_piece());
    }
}
