//! Pieces module - tetromino occupancy matrices and rotation
//!
//! A [`Shape`] is a small boolean matrix (at most 4x4) whose dimensions swap on
//! every rotation. There is no rotation-state table and no wall-kick data: a
//! rotation either fits where the piece already is, or it is rejected.

use crate::types::{PieceKind, Rgb, BOARD_WIDTH};

/// Max edge of any shape matrix
pub const SHAPE_MAX: usize = 4;

/// Occupancy matrix of a piece. Only the top-left `height x width` corner of
/// `bits` is meaningful; the rest stays `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    bits: [[bool; SHAPE_MAX]; SHAPE_MAX],
}

impl Shape {
    /// Build from ASCII rows where `#` is filled. Rows must share one length.
    const fn parse(rows: &[&str]) -> Self {
        let mut bits = [[false; SHAPE_MAX]; SHAPE_MAX];
        let height = rows.len();
        let width = rows[0].len();
        let mut r = 0;
        while r < height {
            let mut c = 0;
            while c < width {
                bits[r][c] = rows[r].as_bytes()[c] == b'#';
                c += 1;
            }
            r += 1;
        }
        Self {
            width: width as u8,
            height: height as u8,
            bits,
        }
    }

    /// Canonical (spawn) orientation of `kind`
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => SHAPE_I,
            PieceKind::J => SHAPE_J,
            PieceKind::L => SHAPE_L,
            PieceKind::O => SHAPE_O,
            PieceKind::S => SHAPE_S,
            PieceKind::T => SHAPE_T,
            PieceKind::Z => SHAPE_Z,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Is `(col, row)` filled? Outside the matrix is empty.
    pub fn filled(&self, col: usize, row: usize) -> bool {
        col < self.width as usize && row < self.height as usize && self.bits[row][col]
    }

    /// Quarter turn clockwise: `new[r][c] = old[h-1-c][r]`, dimensions swapped.
    pub fn rotated(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut bits = [[false; SHAPE_MAX]; SHAPE_MAX];
        for (r, row) in bits.iter_mut().enumerate().take(w) {
            for (c, bit) in row.iter_mut().enumerate().take(h) {
                *bit = self.bits[h - 1 - c][r];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            bits,
        }
    }

    /// `(dx, dy)` offsets of every filled cell, row-major
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height as usize).flat_map(move |r| {
            (0..self.width as usize)
                .filter(move |&c| self.bits[r][c])
                .map(move |c| (c as i8, r as i8))
        })
    }
}

const SHAPE_I: Shape = Shape::parse(&["####"]);
const SHAPE_J: Shape = Shape::parse(&["#..", "###"]);
const SHAPE_L: Shape = Shape::parse(&["..#", "###"]);
const SHAPE_O: Shape = Shape::parse(&["##", "##"]);
const SHAPE_S: Shape = Shape::parse(&[".##", "##."]);
const SHAPE_T: Shape = Shape::parse(&[".#.", "###"]);
const SHAPE_Z: Shape = Shape::parse(&["##.", ".##"]);

/// The falling piece: kind, current orientation and board position of the
/// matrix's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// `kind` in its canonical orientation, horizontally centered on row 0
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::of(kind);
        Self {
            kind,
            shape,
            x: (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8,
            y: 0,
        }
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Same piece shifted by `(dx, dy)`
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece rotated in place, no kicks
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..*self
        }
    }

    /// Absolute board coordinates of every filled cell
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_piece_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(Shape::of(kind).cells().count(), 4, "{kind:?}");
        }
    }

    #[test]
    fn rotation_swaps_dimensions() {
        let i = Shape::of(PieceKind::I);
        let r = i.rotated();
        assert_eq!((r.width(), r.height()), (1, 4));
        assert!((0..4).all(|row| r.filled(0, row)));
    }

    #[test]
    fn t_rotates_clockwise() {
        // .#.      #.
        // ###  ->  ##
        //          #.
        let t = Shape::of(PieceKind::T).rotated();
        assert_eq!((t.width(), t.height()), (2, 3));
        let filled: Vec<(i8, i8)> = t.cells().collect();
        assert_eq!(filled, vec![(0, 0), (0, 1), (1, 1), (0, 2)]);
    }

    #[test]
    fn four_rotations_are_identity() {
        for kind in PieceKind::ALL {
            let s = Shape::of(kind);
            assert_eq!(s.rotated().rotated().rotated().rotated(), s, "{kind:?}");
        }
    }

    #[test]
    fn spawn_is_centered() {
        assert_eq!(Piece::spawn(PieceKind::I).x, 3);
        assert_eq!(Piece::spawn(PieceKind::O).x, 4);
        assert_eq!(Piece::spawn(PieceKind::T).x, 4);
        assert!(PieceKind::ALL.iter().all(|&k| Piece::spawn(k).y == 0));
    }

    #[test]
    fn board_cells_follow_position() {
        let p = Piece::spawn(PieceKind::O).shifted(-4, 18);
        let cells: Vec<(i8, i8)> = p.board_cells().collect();
        assert_eq!(cells, vec![(0, 18), (1, 18), (0, 19), (1, 19)]);
    }
}
