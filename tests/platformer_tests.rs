//! Platformer tests - tile collision, walking, stomps and round outcomes

use tui_arcade::core::platformer::{resolve_enemy_contacts, EnemyContact};
use tui_arcade::core::{Enemy, PlatformerEvent, PlatformerSession, Player, TileGrid};
use tui_arcade::types::{
    InputFrame, PlatformerRound, TileKind, COIN_SCORE, JUMP_VEL, PLAYER_LIVES, PLAYER_SPAWN,
    PLAYER_SPEED, STOMP_SCORE, TILE,
};

/// 40x12 level with solid ground across row 10.
fn floor_level() -> TileGrid {
    let mut grid = TileGrid::new(40, 12);
    for c in 0..40 {
        grid.set(c, 10, TileKind::SolidGround);
    }
    grid
}

fn right() -> InputFrame {
    InputFrame {
        right: true,
        ..InputFrame::IDLE
    }
}

#[test]
fn test_falling_player_lands_on_block_top() {
    let grid = floor_level();
    let mut player = Player::new();
    player.rect.y = 4 * TILE;

    for _ in 0..120 {
        player.integrate(&InputFrame::IDLE, &grid);
        if player.grounded {
            break;
        }
    }

    assert!(player.grounded);
    assert_eq!(player.rect.bottom(), 10 * TILE);
    assert_eq!(player.vy, 0.0);
}

#[test]
fn test_walking_off_a_ledge_clears_grounded() {
    let mut grid = TileGrid::new(40, 12);
    for c in 0..3 {
        grid.set(c, 10, TileKind::SolidGround);
    }
    let mut player = Player::new();
    player.rect.x = TILE;

    for _ in 0..120 {
        player.integrate(&InputFrame::IDLE, &grid);
        if player.grounded {
            break;
        }
    }
    assert!(player.grounded);
    let ledge_y = player.rect.y;

    for _ in 0..100 {
        player.integrate(&right(), &grid);
        if player.rect.left() >= 3 * TILE {
            break;
        }
    }
    assert!(player.rect.left() >= 3 * TILE);

    for _ in 0..10 {
        player.integrate(&right(), &grid);
        assert!(!player.grounded);
    }
    assert!(player.rect.y > ledge_y);
}

#[test]
fn test_grounded_needs_fresh_floor_contact() {
    let grid = floor_level();
    let mut player = Player::new();
    player.rect.y = 2 * TILE;
    player.grounded = true;

    player.integrate(&InputFrame::IDLE, &grid);
    assert!(!player.grounded);
}

#[test]
fn test_jump_needs_ground() {
    let grid = floor_level();
    let mut player = Player::new();
    let jump = InputFrame {
        jump: true,
        ..InputFrame::IDLE
    };

    // Airborne at spawn: jump is ignored and gravity wins.
    player.integrate(&jump, &grid);
    assert!(player.vy > 0.0);

    while !player.grounded {
        player.integrate(&InputFrame::IDLE, &grid);
    }
    player.integrate(&jump, &grid);
    assert!(player.vy < 0.0);
    assert!(player.rect.bottom() < 10 * TILE);
}

#[test]
fn test_walking_right_moves_truncated_speed_per_tick() {
    let mut session = PlatformerSession::new(floor_level());
    let n = 20;
    for _ in 0..n {
        session.step(&right());
    }
    let per_tick = PLAYER_SPEED as i32;
    assert_eq!(per_tick, 4);
    assert_eq!(session.player().rect.x, TILE + n * per_tick);
}

#[test]
fn test_wall_stops_horizontal_movement() {
    let mut grid = floor_level();
    for r in 6..10 {
        grid.set(4, r, TileKind::SolidGround);
    }
    let mut session = PlatformerSession::new(grid);
    for _ in 0..40 {
        session.step(&right());
    }
    assert_eq!(session.player().rect.right(), 4 * TILE);
}

/// Player overlapping the top 5 pixels of an enemy standing on row 10.
fn stomp_setup(vy: f32) -> (Player, Vec<Enemy>) {
    let mut enemy = Enemy::spawn_at(6, 9);
    enemy.rect.set_bottom(10 * TILE);
    let mut player = Player::new();
    player.rect.x = enemy.rect.x;
    player.rect.set_bottom(enemy.rect.top() + 5);
    player.vy = vy;
    (player, vec![enemy])
}

#[test]
fn test_falling_onto_enemy_is_a_stomp() {
    let (mut player, mut enemies) = stomp_setup(5.0);
    let contacts = resolve_enemy_contacts(&mut player, &mut enemies);

    assert_eq!(contacts, vec![EnemyContact::Stomped { index: 0 }]);
    assert!(!enemies[0].alive);
    assert_eq!(player.score, STOMP_SCORE);
    assert_eq!(player.vy, JUMP_VEL / 2.0);
    assert_eq!(player.lives, PLAYER_LIVES);
}

#[test]
fn test_rising_into_enemy_costs_a_life() {
    let (mut player, mut enemies) = stomp_setup(-5.0);
    let contacts = resolve_enemy_contacts(&mut player, &mut enemies);

    assert_eq!(contacts, vec![EnemyContact::Hit { index: 0 }]);
    assert!(enemies[0].alive);
    assert_eq!(player.score, 0);
    assert_eq!(player.lives, PLAYER_LIVES - 1);
    assert_eq!((player.rect.x, player.rect.y), PLAYER_SPAWN);
}

#[test]
fn test_coin_then_flag_wins() {
    let mut grid = floor_level();
    grid.set(3, 9, TileKind::Coin);
    grid.set(8, 9, TileKind::Flag);
    let mut session = PlatformerSession::new(grid);
    assert_eq!(session.coins().len(), 1);

    let mut events = Vec::new();
    for _ in 0..80 {
        events.extend(session.step(&right()));
        if session.round() != PlatformerRound::Playing {
            break;
        }
    }

    assert_eq!(session.round(), PlatformerRound::Won);
    assert!(session.coins().is_empty());
    assert_eq!(session.player().score, COIN_SCORE);
    assert!(matches!(events.first(), Some(PlatformerEvent::CoinCollected { .. })));
    assert_eq!(events.last(), Some(&PlatformerEvent::Won));

    // Frozen until reset.
    let x = session.player().rect.x;
    assert!(session.step(&right()).is_empty());
    assert_eq!(session.player().rect.x, x);

    let reset = InputFrame {
        reset: true,
        ..InputFrame::IDLE
    };
    assert_eq!(session.step(&reset), vec![PlatformerEvent::Reset]);
    assert_eq!(session.round(), PlatformerRound::Playing);
    assert_eq!(session.coins().len(), 1);
    assert_eq!(session.player().score, 0);
}
