//! Enemy controller - horizontal patrol with a ledge probe
//!
//! Enemies never fall. Each tick they step sideways, turn around once they
//! stray more than the patrol half-width from their spawn x, and separately
//! turn around when a rect shifted a couple of pixels down touches no solid
//! tile. The probe is a proxy for "about to walk off a ledge"; a gap narrower
//! than the probe is not detected.

use crate::collision::touches_solid;
use crate::grid::GridModel;
use crate::types::{Rect, ACTOR_SIZE, ENEMY_GROUND_PROBE, ENEMY_PATROL, ENEMY_STEP, TILE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    pub rect: Rect,
    /// Signed pixels per tick
    pub vx: i32,
    /// Patrol half-width in pixels
    pub patrol: i32,
    pub origin_x: i32,
    pub alive: bool,
}

impl Enemy {
    /// Enemy standing in the spawn tile at `(col, row)`
    pub fn spawn_at(col: i32, row: i32) -> Self {
        let x = col * TILE + 2;
        let y = row * TILE + 2;
        Self {
            rect: Rect::new(x, y, ACTOR_SIZE, ACTOR_SIZE),
            vx: ENEMY_STEP,
            patrol: ENEMY_PATROL,
            origin_x: x,
            alive: true,
        }
    }

    /// Advance one tick. Dead enemies do nothing.
    pub fn update<G: GridModel>(&mut self, grid: &G) {
        if !self.alive {
            return;
        }

        self.rect.x += self.vx;
        if (self.rect.x - self.origin_x).abs() > self.patrol {
            self.vx = -self.vx;
        }

        if !self.has_ground_below(grid) {
            self.vx = -self.vx;
        }
    }

    /// Probe just under the enemy's feet for a solid tile
    pub fn has_ground_below<G: GridModel>(&self, grid: &G) -> bool {
        touches_solid(&self.rect.offset(0, ENEMY_GROUND_PROBE), grid)
    }
}
