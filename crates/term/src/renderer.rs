//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or `invalidate`) is a full
//! redraw; after that only runs of changed cells are written. Encoding goes
//! through [`Encoder`], which remembers the last style it emitted and only
//! writes the parts that differ, so long runs of one color cost one escape.

use std::io::{self, Write};

use anyhow::Result;
use log::debug;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen, `None` when the next draw must be full
    shown: Option<FrameBuffer>,
    out: Vec<u8>,
    key_release_events: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            out: Vec::with_capacity(32 * 1024),
            key_release_events: false,
        }
    }

    /// Raw mode, alternate screen, hidden cursor. Asks for key release events
    /// when the terminal speaks the keyboard enhancement protocol.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.key_release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);
        debug!("terminal reports key releases: {}", self.key_release_events);

        self.out.clear();
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        if self.key_release_events {
            self.out.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.flush()
    }

    /// Undo everything `enter` did. Safe to call after a failed draw.
    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        if self.key_release_events {
            self.out.queue(PopKeyboardEnhancementFlags)?;
        }
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn key_release_events(&self) -> bool {
        self.key_release_events
    }

    /// Force the next draw to repaint everything.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Put `fb` on screen.
    ///
    /// The renderer keeps the shown frame and hands its previous buffer back
    /// through `fb`, so a caller that renders into the same buffer every frame
    /// never allocates.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.out.clear();
        let spare = match self.shown.take() {
            Some(shown) if shown.width() == fb.width() && shown.height() == fb.height() => {
                encode_diff_into(&shown, fb, &mut self.out)?;
                shown
            }
            shown => {
                encode_full_into(fb, &mut self.out)?;
                let mut spare = shown.unwrap_or_else(|| FrameBuffer::new(0, 0));
                spare.resize(fb.width(), fb.height());
                spare
            }
        };
        self.flush()?;

        self.shown = Some(std::mem::replace(fb, spare));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape-sequence writer that tracks the terminal's current style.
struct Encoder<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Encoder<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn put(&mut self, ch: char, style: CellStyle) -> Result<()> {
        self.set_style(style)?;
        self.out.queue(Print(ch))?;
        Ok(())
    }

    fn set_style(&mut self, style: CellStyle) -> Result<()> {
        let prev = self.style.replace(style);
        if prev == Some(style) {
            return Ok(());
        }
        // Attributes can only be switched off all at once, which also drops
        // the colors, so any attribute change repaints both colors.
        let attrs_changed = prev.map_or(true, |p| p.bold != style.bold || p.dim != style.dim);
        if attrs_changed {
            self.out.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
        }
        if attrs_changed || prev.map(|p| p.fg) != Some(style.fg) {
            self.out.queue(SetForegroundColor(color(style.fg)))?;
        }
        if attrs_changed || prev.map(|p| p.bg) != Some(style.bg) {
            self.out.queue(SetBackgroundColor(color(style.bg)))?;
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Encode a full redraw into `out` without touching stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut enc = Encoder::new(out);
    for y in 0..fb.height() {
        enc.move_to(0, y)?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            enc.put(cell.ch, cell.style)?;
        }
    }
    enc.finish()
}

/// Encode only the cells of `next` that differ from `prev`.
///
/// Frames of different sizes are treated as entirely changed.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut enc = Encoder::new(out);
    for (x, y, len) in ChangedRuns::new(prev, next) {
        enc.move_to(x, y)?;
        for cx in x..x + len {
            let cell = next.get(cx, y).unwrap_or_default();
            enc.put(cell.ch, cell.style)?;
        }
    }
    enc.finish()
}

/// Maximal horizontal runs `(x, y, len)` of changed cells, row by row.
struct ChangedRuns<'a> {
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
    same_size: bool,
    x: u16,
    y: u16,
}

impl<'a> ChangedRuns<'a> {
    fn new(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> Self {
        Self {
            prev,
            next,
            same_size: prev.width() == next.width() && prev.height() == next.height(),
            x: 0,
            y: 0,
        }
    }

    fn differs(&self, x: u16, y: u16) -> bool {
        !self.same_size || self.prev.get(x, y) != self.next.get(x, y)
    }
}

impl Iterator for ChangedRuns<'_> {
    type Item = (u16, u16, u16);

    fn next(&mut self) -> Option<Self::Item> {
        let w = self.next.width();
        while self.y < self.next.height() {
            let y = self.y;
            while self.x < w && !self.differs(self.x, y) {
                self.x += 1;
            }
            if self.x < w {
                let start = self.x;
                while self.x < w && self.differs(self.x, y) {
                    self.x += 1;
                }
                return Some((start, y, self.x - start));
            }
            self.x = 0;
            self.y += 1;
        }
        None
    }
}
