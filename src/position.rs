/// A board coordinate, 0-indexed.
///
/// Coordinates are signed so that user input such as `0 3` (1-indexed) maps to an
/// out-of-bounds position instead of wrapping around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    pub fn from_index(index: usize, size: usize) -> Self {
        Position {
            row: (index / size) as i32,
            col: (index % size) as i32,
        }
    }

    /// Caller must check `is_valid` first.
    pub fn to_index(&self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    pub fn is_valid(&self, size: usize) -> bool {
        let n = size as i64;
        (0..n).contains(&(self.row as i64)) && (0..n).contains(&(self.col as i64))
    }

    pub(crate) fn offset(&self, d_row: i32, d_col: i32) -> Self {
        Position {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Renders 1-indexed, the way players enter coordinates.
impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row as i64 + 1, self.col as i64 + 1)
    }
}
