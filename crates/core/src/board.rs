//! Board module - the puzzle's settled cells
//!
//! 10 columns by 20 rows, row 0 at the top. Each cell is empty or holds the
//! color of the piece that locked there. Storage is a fixed array of rows, so
//! a board is `Copy`-sized, allocation free, and line clears move whole rows.

use arrayvec::ArrayVec;

use crate::grid::GridModel;
use crate::pieces::Piece;
use crate::types::{Cell, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

const W: usize = BOARD_WIDTH as usize;
const H: usize = BOARD_HEIGHT as usize;

pub type Row = [Cell; W];

/// Row indices cleared by one lock, top to bottom
pub type ClearedRows = ArrayVec<usize, H>;

const EMPTY_ROW: Row = [None; W];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [Row; H],
}

impl Board {
    pub fn new() -> Self {
        Self {
            rows: [EMPTY_ROW; H],
        }
    }

    /// `(col, row)` as array indices, or `None` off the board
    #[inline(always)]
    fn locate(x: i8, y: i8) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok().filter(|&c| c < W)?;
        let row = usize::try_from(y).ok().filter(|&r| r < H)?;
        Some((col, row))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// `None` off the board, `Some(cell)` on it
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::locate(x, y).map(|(c, r)| self.rows[r][c])
    }

    /// Returns false (and writes nothing) off the board.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        let Some((c, r)) = Self::locate(x, y) else {
            return false;
        };
        self.rows[r][c] = cell;
        true
    }

    /// On the board and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        self.get(x, y) == Some(None)
    }

    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Every filled cell of `piece` lands on an empty board cell.
    pub fn fits(&self, piece: &Piece) -> bool {
        piece.board_cells().all(|(x, y)| self.is_valid(x, y))
    }

    /// Paint `piece` into the board. Cells off the board are dropped.
    pub fn imprint(&mut self, piece: &Piece) {
        let color = Some(piece.color());
        for (x, y) in piece.board_cells() {
            self.set(x, y, color);
        }
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(Option::is_some))
    }

    /// Drop every full row at once and let the rest fall.
    ///
    /// Survivors are copied bottom-up to a write cursor, keeping their order;
    /// the rows left above the cursor are emptied. Returns the removed indices
    /// top to bottom.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write = H;

        for read in (0..H).rev() {
            if self.is_row_full(read) {
                cleared.push(read);
                continue;
            }
            write -= 1;
            if write != read {
                self.rows[write] = self.rows[read];
            }
        }
        self.rows[..write].fill(EMPTY_ROW);

        cleared.reverse();
        cleared
    }

    /// Copy of every row, for snapshots
    pub fn to_rows(&self) -> [Row; H] {
        self.rows
    }

    pub fn filled_count(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn clear(&mut self) {
        self.rows = [EMPTY_ROW; H];
    }

    /// Fill row `y` with `color` except the columns in `holes`.
    pub fn fill_row(&mut self, y: i8, color: Rgb, holes: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            self.set(x, y, (!holes.contains(&x)).then_some(color));
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl GridModel for Board {
    type Cell = Cell;

    fn cols(&self) -> usize {
        W
    }

    fn rows(&self) -> usize {
        H
    }

    fn cell_at(&self, col: i32, row: i32) -> Option<Cell> {
        let (Ok(x), Ok(y)) = (i8::try_from(col), i8::try_from(row)) else {
            return None;
        };
        self.get(x, y)
    }

    fn cell_is_solid(cell: Cell) -> bool {
        cell.is_some()
    }
}
