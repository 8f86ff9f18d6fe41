use crate::core::{Arena, FallingPiece, PieceKind, Spin};

use super::piece_source::PieceSource;

/// What a descent step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropProgress {
    /// The piece moved down one row.
    Fell,
    /// The piece could not descend and was locked in.
    Locked(LockOutcome),
}

/// Result of locking a piece into the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOutcome {
    /// Full rows swept away by this lock.
    pub cleared_rows: usize,
    /// The next piece collided the moment it spawned; the arena has been
    /// cleared (the silent top-out reset).
    pub spawn_blocked: bool,
}

/// The playfield plus the piece falling through it.
///
/// Owns the [`Arena`], the single [`FallingPiece`], the pending next kind,
/// and the [`PieceSource`] that refills it. Player moves that would collide
/// are silently reverted; only a failed descent has a visible consequence
/// (the lock sequence).
#[derive(Debug, Clone)]
pub struct GameField {
    arena: Arena,
    falling: FallingPiece,
    next_kind: PieceKind,
    source: PieceSource,
}

impl Default for GameField {
    fn default() -> Self {
        Self::new(PieceSource::new())
    }
}

impl GameField {
    #[must_use]
    pub fn new(mut source: PieceSource) -> Self {
        let falling = FallingPiece::spawn(source.draw());
        let next_kind = source.draw();
        Self {
            arena: Arena::EMPTY,
            falling,
            next_kind,
            source,
        }
    }

    #[must_use]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    #[must_use]
    pub fn falling_piece(&self) -> &FallingPiece {
        &self.falling
    }

    /// Kind of the piece that will spawn after the current one locks.
    #[must_use]
    pub fn next_kind(&self) -> PieceKind {
        self.next_kind
    }

    pub fn move_left(&mut self) {
        self.shift(-1);
    }

    pub fn move_right(&mut self) {
        self.shift(1);
    }

    fn shift(&mut self, dx: i32) {
        self.falling.pos.x += dx;
        if self.arena.collides(&self.falling.shape, self.falling.pos) {
            self.falling.pos.x -= dx;
        }
    }

    /// Turns the falling piece 90°, kicking it sideways if the turned shape
    /// overlaps a wall or locked cells.
    ///
    /// The kick probes x-offsets of alternating sign and growing magnitude
    /// (+1, -2, +3, -4, ...) from the current position. If no offset within
    /// the shape's width resolves the overlap, the rotation is abandoned:
    /// shape and position are restored exactly.
    #[expect(clippy::cast_possible_truncation)]
    pub fn rotate(&mut self, spin: Spin) {
        let original_x = self.falling.pos.x;
        let width = self.falling.shape.size() as i32;
        self.falling.shape = self.falling.shape.rotated(spin);

        let mut offset = 1;
        while self.arena.collides(&self.falling.shape, self.falling.pos) {
            self.falling.pos.x += offset;
            offset = -(offset + offset.signum());
            if offset.abs() > width {
                self.falling.shape = self.falling.shape.rotated(spin.reversed());
                self.falling.pos.x = original_x;
                return;
            }
        }
    }

    /// Moves the piece down one row, locking it if the row below is taken.
    pub fn soft_drop(&mut self) -> DropProgress {
        self.falling.pos.y += 1;
        if self.arena.collides(&self.falling.shape, self.falling.pos) {
            self.falling.pos.y -= 1;
            return DropProgress::Locked(self.lock_falling());
        }
        DropProgress::Fell
    }

    /// Drops the piece straight to its resting position and locks it.
    pub fn hard_drop(&mut self) -> LockOutcome {
        loop {
            self.falling.pos.y += 1;
            if self.arena.collides(&self.falling.shape, self.falling.pos) {
                self.falling.pos.y -= 1;
                return self.lock_falling();
            }
        }
    }

    /// Where the falling piece would rest after a hard drop.
    ///
    /// A pure read; nothing is locked. Used for the ghost-piece overlay.
    #[must_use]
    pub fn drop_preview(&self) -> FallingPiece {
        let mut ghost = self.falling.clone();
        loop {
            ghost.pos.y += 1;
            if self.arena.collides(&ghost.shape, ghost.pos) {
                ghost.pos.y -= 1;
                return ghost;
            }
        }
    }

    /// The lock sequence: merge, spawn the next piece (possibly triggering
    /// the silent top-out reset), then sweep full rows.
    ///
    /// The sweep runs after the spawn so that a blocked spawn wipes the
    /// arena first and the sweep finds nothing.
    fn lock_falling(&mut self) -> LockOutcome {
        self.arena.merge(&self.falling.shape, self.falling.pos);
        let spawn_blocked = self.spawn_next();
        let cleared_rows = self.arena.sweep();
        LockOutcome {
            cleared_rows,
            spawn_blocked,
        }
    }

    /// Promotes the pending kind to the falling piece and draws a fresh one.
    ///
    /// Returns `true` if the new piece collides at its spawn position, in
    /// which case the arena has been cleared.
    fn spawn_next(&mut self) -> bool {
        self.falling = FallingPiece::spawn(self.next_kind);
        self.next_kind = self.source.draw();
        if self.arena.collides(&self.falling.shape, self.falling.pos) {
            self.arena.clear();
            return true;
        }
        false
    }
}

#[cfg(test)]
impl GameField {
    /// Direct arena access for building board positions in tests.
    pub(crate) fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    /// Replaces the falling piece so a test controls exactly what locks.
    pub(crate) fn set_falling(&mut self, piece: FallingPiece) {
        self.falling = piece;
    }
}
