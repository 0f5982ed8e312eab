//! PuzzleView: maps a `PuzzleSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::pieces::Shape;
use crate::core::PuzzleSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PuzzleRound, BOARD_HEIGHT, BOARD_WIDTH};
use crate::view::{draw_overlay_text, draw_stat, Viewport, BORDER, LABEL, VALUE};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const RECORD_FG: Rgb = Rgb::new(255, 215, 0);

/// Terminal renderer for the falling-block game.
pub struct PuzzleView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for PuzzleView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl PuzzleView {
    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &PuzzleSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        let origin = (start_x + 1, start_y + 1);

        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        fb.fill_rect(origin.0, origin.1, board_px_w, board_px_h, ' ', empty);
        fb.draw_box(start_x, start_y, frame_w, frame_h, BORDER);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => self.draw_block(fb, origin, x as u16, y as u16, *color),
                    None => self.fill_cell(fb, origin, x as u16, y as u16, '·', empty),
                }
            }
        }

        if let Some(active) = snap.active {
            let color = active.kind.color();
            for (x, y) in active.cells() {
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    self.draw_block(fb, origin, x as u16, y as u16, color);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        let frame = (start_x, start_y, frame_w, frame_h);
        match snap.round {
            PuzzleRound::Paused => draw_overlay_text(fb, frame, "PAUSED", Rgb::new(255, 255, 255)),
            PuzzleRound::GameOver => {
                draw_overlay_text(fb, frame, "GAME OVER", Rgb::new(255, 80, 80));
                draw_overlay_text(
                    fb,
                    (start_x, start_y + 2, frame_w, frame_h),
                    "R to restart",
                    Rgb::new(200, 200, 200),
                );
            }
            PuzzleRound::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &PuzzleSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_block(&self, fb: &mut FrameBuffer, origin: (u16, u16), x: u16, y: u16, color: Rgb) {
        let style = CellStyle::new(color, PLAY_BG).bold();
        self.fill_cell(fb, origin, x, y, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin.0 + cell_x * self.cell_w;
        let py = origin.1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &PuzzleSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let mut y = start_y;
        y = draw_stat(fb, panel_x, y, "SCORE", snap.score);
        y = draw_stat(fb, panel_x, y, "LEVEL", snap.level);
        y = draw_stat(fb, panel_x, y, "LINES", snap.lines);

        fb.put_str(panel_x, y, "RECORD", LABEL);
        let record_style = CellStyle::new(RECORD_FG, Rgb::new(0, 0, 0)).bold();
        fb.put_u32(panel_x, y + 1, snap.best(), record_style);
        if snap.score > snap.record {
            fb.put_char(panel_x + 8, y + 1, '*', record_style);
        }
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "NEXT", LABEL);
        self.draw_preview(fb, panel_x, y + 1, Shape::of(snap.next), snap.next.color());
        y = y.saturating_add(4);

        fb.put_str(panel_x, y, "P pause", VALUE.dim());
        fb.put_str(panel_x, y + 1, "Q quit", VALUE.dim());
    }

    /// Next piece drawn at one column pair per cell, no board background.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: Shape, color: Rgb) {
        let style = CellStyle::new(color, Rgb::new(0, 0, 0)).bold();
        for (dx, dy) in shape.cells() {
            let px = x + dx as u16 * 2;
            fb.fill_rect(px, y + dy as u16, 2, 1, '█', style);
        }
    }
}
