use std::iter;

use gridfall_engine::{Arena, FallingPiece};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::ui::widgets::{CellDisplay, Tile};

/// Renders the arena with the falling piece and an optional ghost overlaid.
#[derive(Debug)]
pub struct ArenaDisplay<'a> {
    arena: &'a Arena,
    falling: Option<&'a FallingPiece>,
    ghost: Option<FallingPiece>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ArenaDisplay<'a> {
    pub fn new(arena: &'a Arena) -> Self {
        Self {
            arena,
            falling: None,
            ghost: None,
            block: None,
        }
    }

    pub fn falling_piece(self, piece: &'a FallingPiece) -> Self {
        Self {
            falling: Some(piece),
            ..self
        }
    }

    pub fn ghost(self, piece: FallingPiece) -> Self {
        Self {
            ghost: Some(piece),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        Arena::WIDTH as u16 * CellDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        Arena::HEIGHT as u16 * CellDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }

    /// Flattens the arena plus overlays into one tile per cell.
    ///
    /// Overlay cells hanging above the top edge are simply not drawn; the
    /// ghost never covers a locked cell or the falling piece itself.
    fn tiles(&self) -> [[Tile; Arena::WIDTH]; Arena::HEIGHT] {
        let mut tiles = [[Tile::Empty; Arena::WIDTH]; Arena::HEIGHT];
        for (y, row) in self.arena.rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                tiles[y][x] = cell.into();
            }
        }
        if let Some(ghost) = &self.ghost {
            for (x, y) in ghost.occupied_cells() {
                let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
                    continue;
                };
                if x < Arena::WIDTH && y < Arena::HEIGHT && tiles[y][x] == Tile::Empty {
                    tiles[y][x] = Tile::Ghost;
                }
            }
        }
        if let Some(piece) = self.falling {
            for (x, y) in piece.occupied_cells() {
                let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
                    continue;
                };
                if x < Arena::WIDTH && y < Arena::HEIGHT {
                    tiles[y][x] = Tile::Filled(piece.kind());
                }
            }
        }
        tiles
    }
}

impl Widget for ArenaDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &ArenaDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let tiles = self.tiles();

        let col_constraints = (0..Arena::WIDTH).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints = (0..Arena::HEIGHT).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_cells = area
            .layout::<{ Arena::HEIGHT }>(&vertical)
            .into_iter()
            .map(|row| row.layout::<{ Arena::WIDTH }>(&horizontal));

        for (grid_row, tile_row) in iter::zip(grid_cells, tiles) {
            for (grid_cell, tile) in iter::zip(grid_row, tile_row) {
                CellDisplay::from_tile(tile, true).render(grid_cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use gridfall_engine::GameSession;

    use super::*;

    #[test]
    fn test_tiles_overlay_priorities() {
        let session = GameSession::new();
        let kind = session.falling_piece().kind();
        let display = ArenaDisplay::new(session.arena())
            .falling_piece(session.falling_piece())
            .ghost(session.drop_preview());

        let tiles = display.tiles();
        // The falling piece sits in the top rows, the ghost at the floor.
        let falling_count = tiles
            .iter()
            .flatten()
            .filter(|t| **t == Tile::Filled(kind))
            .count();
        let ghost_count = tiles
            .iter()
            .flatten()
            .filter(|t| **t == Tile::Ghost)
            .count();
        assert_eq!(falling_count, 4);
        assert_eq!(ghost_count, 4);
    }

    #[test]
    fn test_tiles_survive_negative_piece_origins() {
        // A rotated piece pressed against the left wall can have a negative
        // grid origin even though all its cells are on the grid.
        let mut session = GameSession::new();
        session.rotate_cw();
        for _ in 0..10 {
            session.move_left();
        }
        let kind = session.falling_piece().kind();
        let display = ArenaDisplay::new(session.arena()).falling_piece(session.falling_piece());
        let tiles = display.tiles();
        let falling_count = tiles
            .iter()
            .flatten()
            .filter(|t| **t == Tile::Filled(kind))
            .count();
        assert_eq!(falling_count, 4);
    }
}
