//! PlatformerView: maps a `PlatformerSnapshot` into a terminal framebuffer.
//!
//! One tile becomes `cell_w x 1` terminal cells. Actors are placed by the
//! tile their rect's center falls in, so movement on screen is quantized to
//! whole cells while the simulation keeps pixel precision.
//!
//! The camera follows the player horizontally and is clamped to the level.
//! Row 0 of the viewport is the HUD.

use crate::core::grid::GridModel;
use crate::core::PlatformerSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PlatformerRound, Rect, TileKind, TILE};
use crate::view::{draw_overlay_text, Viewport, LABEL, VALUE};

const SKY: Rgb = Rgb::new(20, 24, 48);

pub struct PlatformerView {
    /// Terminal columns per tile.
    cell_w: u16,
}

impl Default for PlatformerView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl PlatformerView {
    /// Leftmost visible tile column for this viewport.
    pub fn camera_col(&self, snap: &PlatformerSnapshot<'_>, viewport: Viewport) -> i32 {
        let visible = (viewport.width / self.cell_w) as i32;
        let level_cols = snap.tiles.cols() as i32;
        let (px, _) = snap.player.center();
        let player_col = px.div_euclid(TILE);
        (player_col - visible / 2).clamp(0, (level_cols - visible).max(0))
    }

    pub fn render_into(
        &self,
        snap: &PlatformerSnapshot<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let cam = self.camera_col(snap, viewport);
        let visible_rows = viewport.height.saturating_sub(1);
        let sky = CellStyle::new(Rgb::new(60, 60, 90), SKY);
        fb.fill_rect(0, 1, viewport.width, visible_rows, ' ', sky);

        for (col, row, kind) in snap.tiles.iter() {
            let style = match kind {
                TileKind::SolidGround => CellStyle::new(Rgb::new(139, 90, 43), SKY),
                TileKind::SolidPlatform => CellStyle::new(Rgb::new(110, 110, 120), SKY),
                _ => continue,
            };
            let ch = if kind == TileKind::SolidGround { '█' } else { '▀' };
            self.put_tile(fb, cam, col, row, ch, style);
        }

        if let Some(flag) = snap.flag {
            let style = CellStyle::new(Rgb::new(80, 220, 120), SKY).bold();
            let col = flag.x.div_euclid(TILE);
            for row in flag.top().div_euclid(TILE)..flag.bottom().div_euclid(TILE) {
                let ch = if row == flag.top().div_euclid(TILE) { '▶' } else { '│' };
                self.put_tile(fb, cam, col, row, ch, style);
            }
        }

        let coin = CellStyle::new(Rgb::new(255, 215, 0), SKY).bold();
        for c in snap.coins {
            self.put_actor(fb, cam, c, 'o', coin);
        }

        let enemy = CellStyle::new(Rgb::new(230, 70, 70), SKY).bold();
        for e in snap.enemies.iter().filter(|e| e.alive) {
            self.put_actor(fb, cam, &e.rect, 'M', enemy);
        }

        let player = CellStyle::new(Rgb::new(90, 160, 255), SKY).bold();
        self.put_actor(fb, cam, &snap.player, '@', player);

        self.draw_hud(fb, snap);

        let frame = (0, 1, viewport.width, visible_rows);
        match snap.round {
            PlatformerRound::Won => {
                draw_overlay_text(fb, frame, "YOU WIN! R to play again", Rgb::new(80, 220, 120))
            }
            PlatformerRound::Lost => {
                draw_overlay_text(fb, frame, "GAME OVER - R to restart", Rgb::new(255, 80, 80))
            }
            PlatformerRound::Playing => {}
        }
    }

    pub fn render(&self, snap: &PlatformerSnapshot<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn put_tile(&self, fb: &mut FrameBuffer, cam: i32, col: i32, row: i32, ch: char, style: CellStyle) {
        let sx = (col - cam) * self.cell_w as i32;
        let sy = row + 1;
        if sx < 0 || sy < 1 || sx > u16::MAX as i32 || sy > u16::MAX as i32 {
            return;
        }
        fb.fill_rect(sx as u16, sy as u16, self.cell_w, 1, ch, style);
    }

    fn put_actor(&self, fb: &mut FrameBuffer, cam: i32, rect: &Rect, ch: char, style: CellStyle) {
        let (cx, cy) = rect.center();
        self.put_tile(fb, cam, cx.div_euclid(TILE), cy.div_euclid(TILE), ch, style);
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &PlatformerSnapshot<'_>) {
        fb.put_str(0, 0, "SCORE", LABEL);
        fb.put_u32(6, 0, snap.score, VALUE);
        fb.put_str(16, 0, "LIVES", LABEL);
        let hearts = CellStyle::new(Rgb::new(230, 70, 70), Rgb::new(0, 0, 0));
        for i in 0..snap.lives.min(9) as u16 {
            fb.put_char(22 + i, 0, '♥', hearts);
        }
        fb.put_str(32, 0, "Q quit  R reset", VALUE.dim());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlatformerSession, TileGrid};

    fn session() -> PlatformerSession {
        let mut grid = TileGrid::new(40, 12);
        for c in 0..40 {
            grid.set(c, 11, TileKind::SolidGround);
        }
        grid.set(3, 9, TileKind::Coin);
        grid.set(38, 10, TileKind::Flag);
        PlatformerSession::new(grid)
    }

    #[test]
    fn hud_and_world_are_drawn() {
        let s = session();
        let fb = PlatformerView::default().render(&s.snapshot(), Viewport::new(60, 14));

        assert!(fb.row_text(0).starts_with("SCORE 0"));
        assert_eq!(fb.row_text(0).matches('♥').count(), 3);
        // Ground row 11 sits on screen row 12.
        assert!(fb.row_text(12).starts_with("████"));
        // Coin in tile (3, 9): screen column 6, row 10.
        assert_eq!(fb.get(6, 10).map(|c| c.ch), Some('o'));
        // Player spawn (32, 288) centers in tile (1, 9).
        assert_eq!(fb.get(2, 10).map(|c| c.ch), Some('@'));
    }

    #[test]
    fn camera_is_clamped_to_level() {
        let s = session();
        let view = PlatformerView::default();
        let vp = Viewport::new(40, 14);
        assert_eq!(view.camera_col(&s.snapshot(), vp), 0);

        let mut s = s;
        s.player_mut().rect.x = 39 * TILE;
        assert_eq!(view.camera_col(&s.snapshot(), vp), 20);
    }

    #[test]
    fn won_overlay() {
        let mut grid = TileGrid::new(4, 12);
        grid.set(1, 9, TileKind::Flag);
        let mut s = PlatformerSession::new(grid);
        s.step(&crate::types::InputFrame::IDLE);
        let fb = PlatformerView::default().render(&s.snapshot(), Viewport::new(40, 14));
        let text: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
        assert!(text.contains("YOU WIN!"));
    }
}
