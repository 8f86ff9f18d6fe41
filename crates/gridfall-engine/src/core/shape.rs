use arrayvec::ArrayVec;
use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest bounding box any piece needs (the I-piece spans 4 cells).
pub(crate) const MAX_SHAPE_SIZE: usize = 4;
const MAX_SHAPE_CELLS: usize = MAX_SHAPE_SIZE * MAX_SHAPE_SIZE;

/// A single cell of the arena or of a piece shape.
///
/// A filled cell remembers only which kind of piece produced it; the kind
/// doubles as the cell's color index (1-7, with 0 reserved for empty cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// No piece occupies this cell.
    #[default]
    Empty,
    /// A cell locked in (or carried by) a piece of the given kind.
    Filled(PieceKind),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Color index in `0..=7`: 0 for empty, 1-7 per piece kind.
    #[must_use]
    pub const fn color_index(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Filled(kind) => kind.color_index(),
        }
    }

    /// Inverse of [`color_index`](Self::color_index).
    #[must_use]
    pub const fn from_color_index(index: u8) -> Option<Self> {
        if index == 0 {
            return Some(Cell::Empty);
        }
        match PieceKind::from_color_index(index) {
            Some(kind) => Some(Cell::Filled(kind)),
            None => None,
        }
    }
}

/// Enum representing the type of piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 1,
    /// J-piece.
    J = 2,
    /// L-piece.
    L = 3,
    /// O-piece.
    O = 4,
    /// S-piece.
    S = 5,
    /// T-piece.
    T = 6,
    /// Z-piece.
    Z = 7,
}

/// Draws a piece kind uniformly among the 7 kinds.
impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        match rng.random_range(1..=7) {
            1 => PieceKind::I,
            2 => PieceKind::J,
            3 => PieceKind::L,
            4 => PieceKind::O,
            5 => PieceKind::S,
            6 => PieceKind::T,
            _ => PieceKind::Z,
        }
    }
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    /// All piece kinds, in color-index order.
    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Color index of this kind, in `1..=7`.
    #[must_use]
    pub const fn color_index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`color_index`](Self::color_index).
    #[must_use]
    pub const fn from_color_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Returns the single character representation of this piece kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridfall_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
        }
    }

    /// Parses a piece kind from a single character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PieceKind::I),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            'O' => Some(PieceKind::O),
            'S' => Some(PieceKind::S),
            'T' => Some(PieceKind::T),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }
}

impl Serialize for PieceKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_char(self.as_char())
    }
}

impl<'de> Deserialize<'de> for PieceKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let c = char::deserialize(deserializer)?;
        PieceKind::from_char(c)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid piece kind: {c}")))
    }
}

/// Rotation direction of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    /// 90° clockwise.
    Clockwise,
    /// 90° counter-clockwise.
    CounterClockwise,
}

impl Spin {
    /// The spin that undoes this one.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Spin::Clockwise => Spin::CounterClockwise,
            Spin::CounterClockwise => Spin::Clockwise,
        }
    }
}

/// A piece's cell grid: a `size × size` square, row-major, with row 0 on top.
///
/// The canonical orientation of each kind comes from [`PieceShape::of`], the
/// piece factory. The box is sized so that every rotation of the piece fits
/// without clipping (the I-piece needs 4×4 even though it occupies one row).
///
/// Rotation never mutates a shape; [`rotated`](Self::rotated) builds a fresh
/// grid, so shapes handed out by the factory are never aliased.
///
/// # Example
///
/// ```
/// use gridfall_engine::{PieceKind, PieceShape, Spin};
///
/// let shape = PieceShape::of(PieceKind::T);
/// assert_eq!(shape.size(), 3);
///
/// let spun = shape.rotated(Spin::Clockwise);
/// assert_eq!(spun.rotated(Spin::CounterClockwise), shape);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceShape {
    size: usize,
    cells: ArrayVec<Cell, MAX_SHAPE_CELLS>,
}

impl PieceShape {
    /// Builds the canonical shape grid for a piece kind.
    ///
    /// Pure and deterministic: the same kind always yields an identical,
    /// freshly allocated grid.
    #[must_use]
    pub fn of(kind: PieceKind) -> Self {
        // One bitmask per row of the canonical orientation, low bit = leftmost.
        let (size, rows): (usize, [u8; MAX_SHAPE_SIZE]) = match kind {
            PieceKind::I => (4, [0b0000, 0b1111, 0b0000, 0b0000]),
            PieceKind::J => (3, [0b001, 0b111, 0b000, 0b000]),
            PieceKind::L => (3, [0b100, 0b111, 0b000, 0b000]),
            PieceKind::O => (2, [0b11, 0b11, 0b00, 0b00]),
            PieceKind::S => (3, [0b110, 0b011, 0b000, 0b000]),
            PieceKind::T => (3, [0b010, 0b111, 0b000, 0b000]),
            PieceKind::Z => (3, [0b011, 0b110, 0b000, 0b000]),
        };

        let mut cells = ArrayVec::new();
        for &row in &rows[..size] {
            for x in 0..size {
                if (row >> x) & 1 == 0 {
                    cells.push(Cell::Empty);
                } else {
                    cells.push(Cell::Filled(kind));
                }
            }
        }
        Self { size, cells }
    }

    /// Side length of the square grid (2, 3, or 4).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at local coordinates, with `(0, 0)` the top-left corner.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.size + x]
    }

    /// Iterates over the local `(x, y)` offsets of every filled cell.
    pub fn occupied_offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            if cell.is_empty() {
                None
            } else {
                Some((i % self.size, i / self.size))
            }
        })
    }

    /// Returns this shape turned 90° in the given direction.
    #[must_use]
    pub fn rotated(&self, spin: Spin) -> Self {
        let size = self.size;
        let mut cells = ArrayVec::new();
        for y in 0..size {
            for x in 0..size {
                let cell = match spin {
                    Spin::Clockwise => self.cell(y, size - 1 - x),
                    Spin::CounterClockwise => self.cell(size - 1 - y, x),
                };
                cells.push(cell);
            }
        }
        Self { size, cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied_count(shape: &PieceShape) -> usize {
        shape.occupied_offsets().count()
    }

    #[test]
    fn test_shape_sizes() {
        assert_eq!(PieceShape::of(PieceKind::I).size(), 4);
        assert_eq!(PieceShape::of(PieceKind::O).size(), 2);
        for kind in [
            PieceKind::J,
            PieceKind::L,
            PieceKind::S,
            PieceKind::T,
            PieceKind::Z,
        ] {
            assert_eq!(PieceShape::of(kind).size(), 3, "{kind}");
        }
    }

    #[test]
    fn test_every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(occupied_count(&PieceShape::of(kind)), 4, "{kind}");
        }
    }

    #[test]
    fn test_canonical_i_occupies_second_row() {
        let shape = PieceShape::of(PieceKind::I);
        let offsets: Vec<_> = shape.occupied_offsets().collect();
        assert_eq!(offsets, vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_canonical_t_shape() {
        let shape = PieceShape::of(PieceKind::T);
        let offsets: Vec<_> = shape.occupied_offsets().collect();
        assert_eq!(offsets, vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_filled_cells_carry_their_kind() {
        for kind in PieceKind::ALL {
            let shape = PieceShape::of(kind);
            for (x, y) in shape.occupied_offsets() {
                assert_eq!(shape.cell(x, y), Cell::Filled(kind));
            }
        }
    }

    #[test]
    fn test_rotation_has_order_four() {
        for kind in PieceKind::ALL {
            for spin in [Spin::Clockwise, Spin::CounterClockwise] {
                let original = PieceShape::of(kind);
                let mut shape = original.clone();
                for _ in 0..4 {
                    shape = shape.rotated(spin);
                }
                assert_eq!(shape, original, "{kind}");
            }
        }
    }

    #[test]
    fn test_rotation_round_trip_is_identity() {
        for kind in PieceKind::ALL {
            let original = PieceShape::of(kind);
            let back = original
                .rotated(Spin::Clockwise)
                .rotated(Spin::CounterClockwise);
            assert_eq!(back, original, "{kind}");
        }
    }

    #[test]
    fn test_i_piece_turns_vertical() {
        let shape = PieceShape::of(PieceKind::I).rotated(Spin::Clockwise);
        let offsets: Vec<_> = shape.occupied_offsets().collect();
        // Clockwise: the second row becomes the second-to-last column.
        assert_eq!(offsets, vec![(2, 0), (2, 1), (2, 2), (2, 3)]);

        let shape = PieceShape::of(PieceKind::I).rotated(Spin::CounterClockwise);
        let offsets: Vec<_> = shape.occupied_offsets().collect();
        assert_eq!(offsets, vec![(1, 0), (1, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_o_piece_is_rotation_invariant() {
        let original = PieceShape::of(PieceKind::O);
        assert_eq!(original.rotated(Spin::Clockwise), original);
        assert_eq!(original.rotated(Spin::CounterClockwise), original);
    }

    #[test]
    fn test_color_index_round_trip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_color_index(kind.color_index()), Some(kind));
            let cell = Cell::Filled(kind);
            assert_eq!(Cell::from_color_index(cell.color_index()), Some(cell));
        }
        assert_eq!(Cell::from_color_index(0), Some(Cell::Empty));
        assert_eq!(Cell::from_color_index(8), None);
        assert_eq!(PieceKind::from_color_index(0), None);
    }

    #[test]
    fn test_kind_char_round_trip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.as_char()), Some(kind));
        }
        assert_eq!(PieceKind::from_char('X'), None);
        assert_eq!(PieceKind::from_char('i'), None);
    }

    #[test]
    fn test_kind_serde_round_trip() {
        for kind in PieceKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_char()));
            let back: PieceKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
        assert!(serde_json::from_str::<PieceKind>("\"X\"").is_err());
    }
}
