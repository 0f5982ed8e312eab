//! Framebuffer and style types for terminal rendering.
//!
//! A `FrameBuffer` is a row-major grid of styled glyphs. Every drawing call
//! clips to the buffer, so views can place things relative to a viewport
//! without bounds checks of their own.

use std::ops::Range;

pub use crate::types::Rgb;

const INK: Rgb = Rgb::new(220, 220, 220);
const PAPER: Rgb = Rgb::new(0, 0, 0);

/// Foreground, background and the two attributes the views use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(INK, PAPER)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const BLANK: Cell = CellStyle::new(INK, PAPER).into_cell(' ');
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change dimensions in place. Contents are unspecified afterwards.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (self.width, self.height) != (width, height) {
            self.width = width;
            self.height = height;
            self.cells
                .resize(width as usize * height as usize, Cell::BLANK);
        }
    }

    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let w = self.width as usize;
        &self.cells[y as usize * w..(y as usize + 1) * w]
    }

    /// Mutable slice of row `y` clipped to columns `xs`; empty when off-buffer.
    fn span_mut(&mut self, y: u16, xs: Range<u16>) -> &mut [Cell] {
        if y >= self.height {
            return &mut [];
        }
        let start = xs.start.min(self.width) as usize;
        let end = xs.end.min(self.width) as usize;
        let base = y as usize * self.width as usize;
        &mut self.cells[base + start..base + end.max(start)]
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y).get(x as usize).copied()
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.span_mut(y, x..x.saturating_add(1)).first_mut() {
            *slot = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, style.into_cell(ch));
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let span = self.span_mut(y, x..u16::MAX);
        for (slot, ch) in span.iter_mut().zip(s.chars()) {
            *slot = style.into_cell(ch);
        }
    }

    /// Decimal `v` starting at `x`; formats on the stack.
    pub fn put_u32(&mut self, x: u16, y: u16, v: u32, style: CellStyle) {
        let mut buf = [0u8; 10];
        let mut start = buf.len();
        let mut n = v;
        loop {
            start -= 1;
            buf[start] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        let span = self.span_mut(y, x..u16::MAX);
        for (slot, &d) in span.iter_mut().zip(&buf[start..]) {
            *slot = style.into_cell(d as char);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        let cell = style.into_cell(ch);
        for row in y..y.saturating_add(h) {
            self.span_mut(row, x..x.saturating_add(w)).fill(cell);
        }
    }

    /// Light box outline; anything under 2x2 draws nothing.
    pub fn draw_box(&mut self, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let (right, bottom) = (x + w - 1, y + h - 1);

        self.fill_rect(x + 1, y, w - 2, 1, '─', style);
        self.fill_rect(x + 1, bottom, w - 2, 1, '─', style);
        self.fill_rect(x, y + 1, 1, h - 2, '│', style);
        self.fill_rect(right, y + 1, 1, h - 2, '│', style);

        self.put_char(x, y, '┌', style);
        self.put_char(right, y, '┐', style);
        self.put_char(x, bottom, '└', style);
        self.put_char(right, bottom, '┘', style);
    }

    /// Glyphs of row `y`, styles dropped
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_written_in_place() {
        let mut fb = FrameBuffer::new(12, 1);
        let style = CellStyle::default();
        fb.put_u32(0, 0, 0, style);
        fb.put_u32(2, 0, u32::MAX, style);
        assert_eq!(fb.row_text(0), "0 4294967295");
    }

    #[test]
    fn drawing_is_clipped() {
        let mut fb = FrameBuffer::new(3, 2);
        let style = CellStyle::default();
        fb.put_str(1, 0, "abcdef", style);
        fb.put_char(9, 9, 'x', style);
        fb.fill_rect(2, 1, 10, 10, '#', style);
        fb.put_u32(2, 1, 987, style);
        assert_eq!(fb.row_text(0), " ab");
        assert_eq!(fb.row_text(1), "  9");
        assert_eq!(fb.get(3, 0), None);
        assert!(fb.row(5).is_empty());
    }

    #[test]
    fn box_outline() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.draw_box(0, 0, 4, 3, CellStyle::default());
        assert_eq!(fb.row_text(0), "┌──┐");
        assert_eq!(fb.row_text(1), "│  │");
        assert_eq!(fb.row_text(2), "└──┘");
    }

    #[test]
    fn resize_keeps_rows_addressable() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(5, 1);
        fb.put_str(0, 0, "hello", CellStyle::default());
        assert_eq!(fb.row_text(0), "hello");
        assert_eq!(fb.row(1).len(), 0);
    }
}
