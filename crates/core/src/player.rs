//! Player controller - input, gravity, jumping and tile collision

use crate::collision::{sweep_x, sweep_y};
use crate::grid::GridModel;
use crate::types::{
    InputFrame, Rect, ACTOR_SIZE, GRAVITY, JUMP_VEL, MAX_FALL_SPEED, PLAYER_LIVES, PLAYER_SPAWN,
    PLAYER_SPEED,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    /// True iff the last vertical resolution ended on a floor
    pub grounded: bool,
    pub lives: u32,
    pub score: u32,
}

impl Player {
    /// Fresh player at the spawn point with full lives
    pub fn new() -> Self {
        Self {
            rect: Rect::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1, ACTOR_SIZE, ACTOR_SIZE),
            vx: 0.0,
            vy: 0.0,
            grounded: false,
            lives: PLAYER_LIVES,
            score: 0,
        }
    }

    /// Back to the spawn point at rest. Lives and score are untouched.
    pub fn respawn(&mut self) {
        self.rect.x = PLAYER_SPAWN.0;
        self.rect.y = PLAYER_SPAWN.1;
        self.vx = 0.0;
        self.vy = 0.0;
    }

    /// Advance one tick: read input, integrate gravity, then resolve the
    /// horizontal and vertical axes against the grid in that order.
    pub fn integrate<G: GridModel>(&mut self, input: &InputFrame, grid: &G) {
        self.vx = 0.0;
        if input.left {
            self.vx = -PLAYER_SPEED;
        }
        if input.right {
            self.vx = PLAYER_SPEED;
        }
        if input.jump && self.grounded {
            self.vy = JUMP_VEL;
            self.grounded = false;
        }

        self.vy = (self.vy + GRAVITY).min(MAX_FALL_SPEED);

        sweep_x(&mut self.rect, self.vx, grid);

        self.grounded = false;
        let contact = sweep_y(&mut self.rect, self.vy, grid);
        if contact.floor {
            self.vy = 0.0;
            self.grounded = true;
        }
        if contact.ceiling {
            self.vy = 0.0;
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
