use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{
    piece::GridPos,
    shape::{Cell, PieceShape},
};

/// Playfield width in cells.
pub(crate) const ARENA_WIDTH: usize = 10;
/// Playfield height in cells.
pub(crate) const ARENA_HEIGHT: usize = 20;
const ARENA_AREA: usize = ARENA_WIDTH * ARENA_HEIGHT;

/// The persistent grid of locked cells.
///
/// Cells live in a flat row-major buffer, row 0 at the top. The dimensions
/// are fixed for the lifetime of the value; the only mutations are
/// [`merge`](Self::merge) (locking a piece in), [`sweep`](Self::sweep)
/// (removing full rows), and [`clear`](Self::clear) (the top-out reset).
///
/// # Coordinate System
///
/// - `x` grows rightward in `0..10`, `y` grows downward in `0..20`
/// - Piece positions are signed and may leave the grid transiently; the
///   collision check treats the left/right/bottom edges as solid while
///   rows above the top edge (`y < 0`) stay open so pieces can spawn
///   partially off-grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena {
    cells: [Cell; ARENA_AREA],
}

impl Default for Arena {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Arena {
    pub const WIDTH: usize = ARENA_WIDTH;
    pub const HEIGHT: usize = ARENA_HEIGHT;

    /// An arena with every cell empty.
    pub const EMPTY: Self = Self {
        cells: [Cell::Empty; ARENA_AREA],
    };

    /// Cell at the given playfield coordinates.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y * ARENA_WIDTH + x]
    }

    /// Overwrites a single cell.
    pub fn fill(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[y * ARENA_WIDTH + x] = cell;
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(ARENA_WIDTH)
    }

    /// Checks whether the shape overlaps a wall, the floor, or a locked cell
    /// when placed at `pos`.
    ///
    /// Cells above the top edge do not collide (unless they are outside the
    /// side walls): a freshly spawned piece may overhang the top of the grid
    /// without ending the game as long as the cells it actually covers are
    /// free.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn collides(&self, shape: &PieceShape, pos: GridPos) -> bool {
        shape.occupied_offsets().any(|(dx, dy)| {
            let x = pos.x + dx as i32;
            let y = pos.y + dy as i32;
            if x < 0 || x >= Self::WIDTH as i32 || y >= Self::HEIGHT as i32 {
                return true;
            }
            if y < 0 {
                return false;
            }
            !self.cell(x as usize, y as usize).is_empty()
        })
    }

    /// Writes every filled shape cell into the arena at `pos`.
    ///
    /// The caller must have verified `!self.collides(shape, pos)`; merging a
    /// colliding piece silently overwrites locked cells.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn merge(&mut self, shape: &PieceShape, pos: GridPos) {
        for (dx, dy) in shape.occupied_offsets() {
            let x = (pos.x + dx as i32) as usize;
            let y = (pos.y + dy as i32) as usize;
            self.cells[y * ARENA_WIDTH + x] = shape.cell(dx, dy);
        }
    }

    /// Removes every full row and returns how many were cleared.
    ///
    /// Rows are scanned bottom to top; removing a row shifts everything above
    /// it down one step and inserts an empty row at the top, so the same row
    /// index is examined again before moving up. Multiple full rows, adjacent
    /// or not, are cleared in a single call.
    pub fn sweep(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = ARENA_HEIGHT;
        while y > 0 {
            y -= 1;
            if self.row_is_full(y) {
                self.remove_row(y);
                cleared += 1;
                y += 1;
            }
        }
        cleared
    }

    /// Resets every cell to empty.
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; ARENA_AREA];
    }

    fn row_is_full(&self, y: usize) -> bool {
        self.cells[y * ARENA_WIDTH..][..ARENA_WIDTH]
            .iter()
            .all(|cell| !cell.is_empty())
    }

    fn remove_row(&mut self, y: usize) {
        self.cells.copy_within(..y * ARENA_WIDTH, ARENA_WIDTH);
        self.cells[..ARENA_WIDTH].fill(Cell::Empty);
    }
}

impl Serialize for Arena {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Format: one digit per cell, rows top to bottom joined by commas
        // (e.g. "0000000000,...,0011100000").
        let mut text = String::with_capacity(ARENA_AREA + ARENA_HEIGHT);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                text.push(',');
            }
            for cell in row {
                text.push(char::from_digit(u32::from(cell.color_index()), 10).unwrap());
            }
        }
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for Arena {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;

        let rows: Vec<&str> = text.split(',').collect();
        if rows.len() != ARENA_HEIGHT {
            return Err(serde::de::Error::custom(format!(
                "expected {ARENA_HEIGHT} comma-separated rows, got {}",
                rows.len()
            )));
        }

        let mut arena = Arena::EMPTY;
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != ARENA_WIDTH {
                return Err(serde::de::Error::custom(format!(
                    "row {y} must be {ARENA_WIDTH} digits, got {row:?}"
                )));
            }
            for (x, c) in row.chars().enumerate() {
                let index = c.to_digit(10).and_then(|d| u8::try_from(d).ok());
                let cell = index.and_then(Cell::from_color_index).ok_or_else(|| {
                    serde::de::Error::custom(format!("invalid cell digit at row {y}: {c}"))
                })?;
                arena.fill(x, y, cell);
            }
        }
        Ok(arena)
    }
}
