//! Collision module - axis-separated rect vs. tile resolution
//!
//! Movement is resolved one axis at a time: translate by the truncated velocity,
//! then walk every solid cell in scan order and clamp the rect out of each one
//! it overlaps. Every overlap is handled independently, so with several
//! overlapping blocks the last clamp in scan order wins.
//!
//! This is not a swept or minimum-translation resolver. A body moving more than
//! a tile per tick can pass through thin walls, and corner cases between the two
//! axes are never re-checked.

use crate::grid::GridModel;
use crate::types::Rect;

/// Which sides of the rect were clamped during one resolution call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contact {
    /// Moving down, stopped by a block's top edge
    pub floor: bool,
    /// Moving up, stopped by a block's bottom edge
    pub ceiling: bool,
    /// Moving left, stopped by a block's right edge
    pub wall_left: bool,
    /// Moving right, stopped by a block's left edge
    pub wall_right: bool,
}

impl Contact {
    pub fn any(&self) -> bool {
        self.floor || self.ceiling || self.wall_left || self.wall_right
    }
}

/// Translate horizontally by `trunc(vx)` and clamp out of solid cells.
pub fn sweep_x<G: GridModel>(rect: &mut Rect, vx: f32, grid: &G) -> Contact {
    rect.x += vx as i32;
    let mut contact = Contact::default();
    for block in grid.solid_rects() {
        if !rect.overlaps(&block) {
            continue;
        }
        if vx > 0.0 {
            rect.set_right(block.left());
            contact.wall_right = true;
        }
        if vx < 0.0 {
            rect.set_left(block.right());
            contact.wall_left = true;
        }
    }
    contact
}

/// Translate vertically by `trunc(vy)` and clamp out of solid cells.
pub fn sweep_y<G: GridModel>(rect: &mut Rect, vy: f32, grid: &G) -> Contact {
    rect.y += vy as i32;
    let mut contact = Contact::default();
    for block in grid.solid_rects() {
        if !rect.overlaps(&block) {
            continue;
        }
        if vy > 0.0 {
            rect.set_bottom(block.top());
            contact.floor = true;
        }
        if vy < 0.0 {
            rect.set_top(block.bottom());
            contact.ceiling = true;
        }
    }
    contact
}

/// Does any solid cell overlap `rect`?
pub fn touches_solid<G: GridModel>(rect: &Rect, grid: &G) -> bool {
    grid.solid_rects().any(|block| rect.overlaps(&block))
}
