use std::iter;

use gridfall_engine::PieceShape;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::ui::widgets::{CellDisplay, Tile};

/// Preview box is sized for the largest piece.
const PREVIEW_SIZE: usize = 4;

/// Renders a single piece shape, centered in a 4×4 preview box.
#[derive(Debug)]
pub struct PieceDisplay<'a> {
    shape: Option<PieceShape>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PieceDisplay<'a> {
    pub fn new() -> Self {
        Self {
            shape: None,
            block: None,
        }
    }

    pub fn shape(self, shape: PieceShape) -> Self {
        Self {
            shape: Some(shape),
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
        PREVIEW_SIZE as u16 * CellDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        PREVIEW_SIZE as u16 * CellDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }

    /// Tile for the preview-box coordinates, with the shape centered.
    fn tile(&self, x: usize, y: usize) -> Tile {
        let Some(shape) = &self.shape else {
            return Tile::Empty;
        };
        let offset = (PREVIEW_SIZE - shape.size()) / 2;
        if (offset..offset + shape.size()).contains(&x)
            && (offset..offset + shape.size()).contains(&y)
        {
            shape.cell(x - offset, y - offset).into()
        } else {
            Tile::Empty
        }
    }
}

impl Default for PieceDisplay<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..PREVIEW_SIZE).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints = (0..PREVIEW_SIZE).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_cells = area
            .layout::<PREVIEW_SIZE>(&vertical)
            .into_iter()
            .map(|row| row.layout::<PREVIEW_SIZE>(&horizontal));

        for (y, grid_row) in grid_cells.enumerate() {
            for (x, grid_cell) in iter::zip(0.., grid_row) {
                CellDisplay::from_tile(self.tile(x, y), false).render(grid_cell, buf);
            }
        }
    }
}
