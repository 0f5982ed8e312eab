//! Pieces shared by both game views.

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub(crate) const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
pub(crate) const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
pub(crate) const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

/// `text` centered on the middle row of the given frame.
pub(crate) fn draw_overlay_text(
    fb: &mut FrameBuffer,
    frame: (u16, u16, u16, u16),
    text: &str,
    fg: Rgb,
) {
    let (x, y, w, h) = frame;
    let mid_y = y.saturating_add(h / 2);
    let text_w = text.chars().count() as u16;
    let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
    fb.put_str(tx, mid_y, text, CellStyle::new(fg, Rgb::new(0, 0, 0)).bold());
}

/// `LABEL` line followed by a numeric value line; returns the next free row.
pub(crate) fn draw_stat(fb: &mut FrameBuffer, x: u16, y: u16, label: &str, value: u32) -> u16 {
    fb.put_str(x, y, label, LABEL);
    fb.put_u32(x, y.saturating_add(1), value, VALUE);
    y.saturating_add(3)
}
