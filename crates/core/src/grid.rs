//! Grid module - the cell grids both games collide against
//!
//! [`GridModel`] is the shared query surface: "what is at (col, row)" and "is it
//! solid". Out-of-bounds coordinates answer `None` / not-solid instead of
//! panicking, so resolvers can probe freely past the edges.
//!
//! [`TileGrid`] is the platformer's level: a flat, row-major `Vec<TileKind>`
//! that stays immutable for the life of a round.

use crate::types::{Rect, TileKind, TILE};

/// Read-only cell queries shared by the tile grid and the puzzle board.
pub trait GridModel {
    type Cell: Copy;

    fn cols(&self) -> usize;

    fn rows(&self) -> usize;

    /// Cell at `(col, row)`; `None` outside `[0, cols) x [0, rows)`
    fn cell_at(&self, col: i32, row: i32) -> Option<Self::Cell>;

    /// Solidity predicate for a single cell value
    fn cell_is_solid(cell: Self::Cell) -> bool;

    /// Is the cell at `(col, row)` solid? Out of bounds is never solid.
    fn is_solid(&self, col: i32, row: i32) -> bool {
        self.cell_at(col, row).is_some_and(Self::cell_is_solid)
    }

    /// Pixel rects of every solid cell, in row-major scan order
    fn solid_rects(&self) -> SolidRects<'_, Self>
    where
        Self: Sized,
    {
        SolidRects {
            grid: self,
            next: 0,
        }
    }
}

/// Iterator returned by [`GridModel::solid_rects`]
pub struct SolidRects<'a, G: GridModel> {
    grid: &'a G,
    next: usize,
}

impl<G: GridModel> Iterator for SolidRects<'_, G> {
    type Item = Rect;

    fn next(&mut self) -> Option<Rect> {
        let cols = self.grid.cols();
        let total = cols * self.grid.rows();
        while self.next < total {
            let idx = self.next;
            self.next += 1;
            let (col, row) = ((idx % cols) as i32, (idx / cols) as i32);
            if self.grid.is_solid(col, row) {
                return Some(Rect::tile(col, row));
            }
        }
        None
    }
}

/// Platformer tile map (row 0 at the top)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    cols: usize,
    rows: usize,
    /// Row-major cells (`row * cols + col`)
    cells: Vec<TileKind>,
}

impl TileGrid {
    /// Create an all-empty grid. Zero-sized grids are clamped to 1x1.
    pub fn new(cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cells: vec![TileKind::Empty; cols * rows],
        }
    }

    /// Build from rows of tiles.
    ///
    /// Returns `None` for an empty input or when rows differ in length.
    pub fn from_rows(rows: &[Vec<TileKind>]) -> Option<Self> {
        let cols = rows.first()?.len();
        if cols == 0 || rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        Some(Self {
            cols,
            rows: rows.len(),
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    #[inline(always)]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    /// Set a tile. Returns false if out of bounds.
    pub fn set(&mut self, col: i32, row: i32, kind: TileKind) -> bool {
        match self.index(col, row) {
            Some(idx) => {
                self.cells[idx] = kind;
                true
            }
            None => false,
        }
    }

    /// `(col, row, kind)` for every cell in scan order
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, TileKind)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &k)| ((i % cols) as i32, (i / cols) as i32, k))
    }

    /// World size in pixels
    pub fn pixel_size(&self) -> (i32, i32) {
        (self.cols as i32 * TILE, self.rows as i32 * TILE)
    }
}

impl GridModel for TileGrid {
    type Cell = TileKind;

    fn cols(&self) -> usize {
        self.cols
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cell_at(&self, col: i32, row: i32) -> Option<TileKind> {
        self.index(col, row).map(|idx| self.cells[idx])
    }

    fn cell_is_solid(cell: TileKind) -> bool {
        cell.is_solid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_is_sentinel() {
        let grid = TileGrid::new(4, 3);
        assert_eq!(grid.cell_at(-1, 0), None);
        assert_eq!(grid.cell_at(0, -1), None);
        assert_eq!(grid.cell_at(4, 0), None);
        assert_eq!(grid.cell_at(0, 3), None);
        assert_eq!(grid.cell_at(3, 2), Some(TileKind::Empty));
        assert!(!grid.is_solid(99, 99));
    }

    #[test]
    fn solidity_follows_tile_kind() {
        let mut grid = TileGrid::new(6, 1);
        grid.set(0, 0, TileKind::SolidGround);
        grid.set(1, 0, TileKind::SolidPlatform);
        grid.set(2, 0, TileKind::Coin);
        grid.set(3, 0, TileKind::EnemySpawn);
        grid.set(4, 0, TileKind::Flag);

        let solid: Vec<bool> = (0..6).map(|c| grid.is_solid(c, 0)).collect();
        assert_eq!(solid, vec![true, true, false, false, false, false]);
    }

    #[test]
    fn solid_rects_scan_row_major() {
        let mut grid = TileGrid::new(3, 2);
        grid.set(2, 0, TileKind::SolidGround);
        grid.set(0, 1, TileKind::SolidPlatform);

        let rects: Vec<Rect> = grid.solid_rects().collect();
        assert_eq!(rects, vec![Rect::tile(2, 0), Rect::tile(0, 1)]);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let ok = vec![vec![TileKind::Empty; 3], vec![TileKind::SolidGround; 3]];
        let grid = TileGrid::from_rows(&ok).unwrap();
        assert_eq!((grid.cols(), grid.rows()), (3, 2));
        assert_eq!(grid.pixel_size(), (96, 64));

        let ragged = vec![vec![TileKind::Empty; 3], vec![TileKind::Empty; 2]];
        assert!(TileGrid::from_rows(&ragged).is_none());
        assert!(TileGrid::from_rows(&[]).is_none());
    }
}
