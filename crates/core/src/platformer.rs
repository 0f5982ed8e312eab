//! Platformer session - owns one round of the side-scroller
//!
//! The level grid is loaded once and never mutated. Coins, enemies and the
//! flag are *derived* from it at load/reset time and live in their own lists,
//! which shrink as the round goes on.
//!
//! One [`PlatformerSession::step`] is one fixed tick:
//!
//! 1. player input, gravity and tile collision
//! 2. coin pickup
//! 3. enemy contacts (stomp or hit; the first hit ends the scan)
//! 4. win/lose evaluation
//! 5. enemy patrol, then dead enemies are filtered out

use log::{debug, info};

use crate::enemy::Enemy;
use crate::grid::TileGrid;
use crate::player::Player;
use crate::snapshot::PlatformerSnapshot;
use crate::types::{
    InputFrame, PlatformerRound, Rect, TileKind, COIN_SCORE, JUMP_VEL, STOMP_SCORE,
    STOMP_THRESHOLD, TILE,
};

/// Something that happened during a tick, for sound/UI hooks and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformerEvent {
    CoinCollected { at: Rect },
    EnemyStomped { at: Rect },
    PlayerHit { lives_left: u32 },
    Won,
    Lost,
    Reset,
}

/// Entities derived from the level's marker tiles
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LevelEntities {
    pub coins: Vec<Rect>,
    pub enemies: Vec<Enemy>,
    pub flag: Option<Rect>,
}

impl LevelEntities {
    /// Scan the grid for coin, enemy and flag markers.
    ///
    /// The flag region is one tile wide (inset 8px) and three tiles tall,
    /// bottom-aligned with the marked row. With several flag markers the last
    /// one in scan order wins.
    pub fn from_grid(grid: &TileGrid) -> Self {
        let mut out = Self::default();
        for (col, row, kind) in grid.iter() {
            let (x, y) = (col * TILE, row * TILE);
            match kind {
                TileKind::Coin => out.coins.push(Rect::new(x + 8, y + 8, TILE - 16, TILE - 16)),
                TileKind::EnemySpawn => out.enemies.push(Enemy::spawn_at(col, row)),
                TileKind::Flag => out.flag = Some(Rect::new(x + 8, y + TILE - 3 * TILE, TILE, 3 * TILE)),
                _ => {}
            }
        }
        out
    }
}

/// Outcome of the enemy contact check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyContact {
    Stomped { index: usize },
    Hit { index: usize },
}

/// Remove every coin the player overlaps, crediting each. Returns the rects taken.
pub fn collect_coins(player: &mut Player, coins: &mut Vec<Rect>) -> Vec<Rect> {
    let mut taken = Vec::new();
    coins.retain(|coin| {
        if player.rect.overlaps(coin) {
            taken.push(*coin);
            false
        } else {
            true
        }
    });
    player.score += COIN_SCORE * taken.len() as u32;
    taken
}

/// Resolve player-vs-enemy overlaps for this tick.
///
/// A falling player whose bottom sinks less than [`STOMP_THRESHOLD`] into an
/// enemy kills it, bounces, and keeps scanning. Any other overlap costs a life,
/// respawns the player and stops the scan; contacts are never merged.
pub fn resolve_enemy_contacts(player: &mut Player, enemies: &mut [Enemy]) -> Vec<EnemyContact> {
    let mut contacts = Vec::new();
    for (index, enemy) in enemies.iter_mut().enumerate() {
        if !enemy.alive || !player.rect.overlaps(&enemy.rect) {
            continue;
        }
        if player.vy > 0.0 && player.rect.bottom() - enemy.rect.top() < STOMP_THRESHOLD {
            enemy.alive = false;
            player.vy = JUMP_VEL / 2.0;
            player.score += STOMP_SCORE;
            contacts.push(EnemyContact::Stomped { index });
        } else {
            player.lives = player.lives.saturating_sub(1);
            player.respawn();
            contacts.push(EnemyContact::Hit { index });
            break;
        }
    }
    contacts
}

/// Flag beats death: reaching the flag on the same tick the last life is lost
/// still wins.
pub fn evaluate_round(player: &Player, flag: Option<&Rect>) -> PlatformerRound {
    if flag.is_some_and(|f| player.rect.overlaps(f)) {
        PlatformerRound::Won
    } else if player.lives == 0 {
        PlatformerRound::Lost
    } else {
        PlatformerRound::Playing
    }
}

/// All mutable state of one platformer round, under a single owner
#[derive(Debug, Clone)]
pub struct PlatformerSession {
    level: TileGrid,
    coins: Vec<Rect>,
    enemies: Vec<Enemy>,
    flag: Option<Rect>,
    player: Player,
    round: PlatformerRound,
    ticks: u64,
}

impl PlatformerSession {
    pub fn new(level: TileGrid) -> Self {
        let LevelEntities {
            coins,
            enemies,
            flag,
        } = LevelEntities::from_grid(&level);
        Self {
            level,
            coins,
            enemies,
            flag,
            player: Player::new(),
            round: PlatformerRound::Playing,
            ticks: 0,
        }
    }

    /// Rebuild coins/enemies/flag from the level and restore the player.
    pub fn reset(&mut self) {
        let level = std::mem::replace(&mut self.level, TileGrid::new(1, 1));
        *self = Self::new(level);
        info!("platformer: level reset");
    }

    /// Advance one tick with this frame's input.
    pub fn step(&mut self, input: &InputFrame) -> Vec<PlatformerEvent> {
        if input.reset {
            self.reset();
            return vec![PlatformerEvent::Reset];
        }
        if self.round != PlatformerRound::Playing {
            return Vec::new();
        }

        let mut events = Vec::new();
        self.ticks += 1;

        self.player.integrate(input, &self.level);

        for at in collect_coins(&mut self.player, &mut self.coins) {
            debug!("coin at ({}, {}), score {}", at.x, at.y, self.player.score);
            events.push(PlatformerEvent::CoinCollected { at });
        }

        for contact in resolve_enemy_contacts(&mut self.player, &mut self.enemies) {
            match contact {
                EnemyContact::Stomped { index } => {
                    let at = self.enemies[index].rect;
                    debug!("stomp at ({}, {})", at.x, at.y);
                    events.push(PlatformerEvent::EnemyStomped { at });
                }
                EnemyContact::Hit { .. } => {
                    debug!("player hit, {} lives left", self.player.lives);
                    events.push(PlatformerEvent::PlayerHit {
                        lives_left: self.player.lives,
                    });
                }
            }
        }

        self.round = evaluate_round(&self.player, self.flag.as_ref());
        match self.round {
            PlatformerRound::Won => {
                info!("platformer: flag reached, score {}", self.player.score);
                events.push(PlatformerEvent::Won);
            }
            PlatformerRound::Lost => {
                info!("platformer: out of lives, score {}", self.player.score);
                events.push(PlatformerEvent::Lost);
            }
            PlatformerRound::Playing => {}
        }

        for enemy in &mut self.enemies {
            enemy.update(&self.level);
        }
        self.enemies.retain(|e| e.alive);

        events
    }

    pub fn snapshot(&self) -> PlatformerSnapshot<'_> {
        PlatformerSnapshot {
            tiles: &self.level,
            coins: &self.coins,
            enemies: &self.enemies,
            flag: self.flag,
            player: self.player.rect,
            score: self.player.score,
            lives: self.player.lives,
            round: self.round,
            ticks: self.ticks,
        }
    }

    pub fn round(&self) -> PlatformerRound {
        self.round
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut Vec<Enemy> {
        &mut self.enemies
    }

    pub fn coins(&self) -> &[Rect] {
        &self.coins
    }

    pub fn flag(&self) -> Option<Rect> {
        self.flag
    }

    pub fn level(&self) -> &TileGrid {
        &self.level
    }
}
