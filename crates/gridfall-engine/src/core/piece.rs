use super::{
    arena::ARENA_WIDTH,
    shape::{PieceKind, PieceShape},
};

/// Position of a piece's shape grid origin within the arena.
///
/// Signed on purpose: during spawning and wall-kick resolution a piece may
/// transiently sit partially outside the grid. Only the collision check
/// decides what is actually legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The player-controlled piece currently descending through the arena.
///
/// Exactly one exists per game. The shape grid is owned (never shared with
/// the pending next piece) and is replaced wholesale on rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallingPiece {
    pub(crate) kind: PieceKind,
    pub(crate) shape: PieceShape,
    pub(crate) pos: GridPos,
}

impl FallingPiece {
    /// Creates a piece of the given kind at its spawn position: flush with
    /// the top edge, horizontally centered (`arena_width/2 - shape_width/2`,
    /// both halved with integer division).
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = PieceShape::of(kind);
        let x = (ARENA_WIDTH / 2) as i32 - (shape.size() / 2) as i32;
        Self {
            kind,
            shape,
            pos: GridPos::new(x, 0),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn shape(&self) -> &PieceShape {
        &self.shape
    }

    #[must_use]
    pub fn pos(&self) -> GridPos {
        self.pos
    }

    /// Iterates over the arena coordinates of the piece's filled cells.
    ///
    /// Coordinates may be negative while part of the piece hangs above the
    /// top edge.
    #[expect(clippy::cast_possible_truncation)]
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied_offsets()
            .map(|(dx, dy)| (self.pos.x + dx as i32, self.pos.y + dy as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_is_centered() {
        // 10-wide arena: 4-wide I spawns at x = 5 - 2, the 3- and 2-wide
        // shapes at x = 5 - 1.
        assert_eq!(FallingPiece::spawn(PieceKind::I).pos(), GridPos::new(3, 0));
        assert_eq!(FallingPiece::spawn(PieceKind::O).pos(), GridPos::new(4, 0));
        assert_eq!(FallingPiece::spawn(PieceKind::T).pos(), GridPos::new(4, 0));
    }

    #[test]
    fn test_occupied_cells_are_absolute() {
        let piece = FallingPiece::spawn(PieceKind::I);
        let cells: Vec<_> = piece.occupied_cells().collect();
        assert_eq!(cells, vec![(3, 1), (4, 1), (5, 1), (6, 1)]);
    }

    #[test]
    fn test_spawned_shape_matches_factory() {
        for kind in PieceKind::ALL {
            let piece = FallingPiece::spawn(kind);
            assert_eq!(piece.kind(), kind);
            assert_eq!(piece.shape(), &PieceShape::of(kind));
        }
    }
}
