//! Game logic: piece supply, movement and locking, timing, and sessions.
//!
//! - [`GameField`] - arena + falling piece + pending next piece; movement,
//!   rotation with wall kicks, drops, and the lock sequence
//! - [`GameSession`] - a full game: field, score keeping, gravity timing
//! - [`GameStats`] - score and counters
//! - [`PieceSource`] - seeded uniform piece randomness
//! - [`GravityClock`] - timestamp-driven automatic descent
//! - [`GameSnapshot`] - serializable capture of a session
//!
//! # Game Flow
//!
//! 1. Create a [`GameSession`] (optionally with a [`PieceSeed`])
//! 2. Feed it input (`move_left`, `rotate_cw`, `soft_drop`, ...) and frame
//!    timestamps (`advance`)
//! 3. When a piece can no longer descend it locks, full rows are swept, the
//!    score grows, and the next piece spawns
//! 4. A piece that collides the moment it spawns silently resets the arena
//!    and the score; play continues on the emptied grid
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use gridfall_engine::GameSession;
//!
//! let mut session = GameSession::new();
//! session.move_left();
//! session.rotate_cw();
//! session.advance(Duration::from_millis(1500)); // gravity may act
//! session.hard_drop();
//! assert_eq!(session.stats().locked_pieces(), 1);
//! ```

pub use self::{
    game_field::*, game_session::*, game_stats::*, gravity::*, piece_source::*, snapshot::*,
};

mod game_field;
mod game_session;
mod game_stats;
mod gravity;
mod piece_source;
mod snapshot;
