use serde::{Deserialize, Serialize};

use crate::core::{Arena, PieceKind};

use super::{game_stats::GameStats, piece_source::PieceSeed};

/// Serializable capture of a session's state.
///
/// Built by [`GameSession::snapshot`](super::GameSession::snapshot); the
/// arena serializes as one digit per cell (rows top to bottom, joined by
/// commas), piece kinds as their single-letter names, and the seed as hex,
/// so the JSON stays compact and diffable.
///
/// # Example
///
/// ```
/// use gridfall_engine::GameSession;
///
/// let session = GameSession::new();
/// let json = serde_json::to_string(&session.snapshot()).unwrap();
/// assert!(json.contains("\"score\":0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Seed the session's piece sequence was drawn from.
    pub seed: PieceSeed,
    /// The locked cells.
    pub arena: Arena,
    /// Score and counters at capture time.
    pub stats: GameStats,
    /// Kind of the piece that was falling.
    pub falling: PieceKind,
    /// Kind of the pending next piece.
    pub next: PieceKind,
}
