//! Shared types - plain data and tuning constants for both games
//!
//! Everything in here is plain data with no external dependencies, so it can be
//! used from the simulation kernel, the terminal views and the input layer alike.
//!
//! # Platformer tuning
//!
//! World coordinates are integer pixels; one tile is `TILE` pixels square.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TILE` | 32 | Tile edge in pixels |
//! | `GRAVITY` | 0.9 | Vertical acceleration per tick |
//! | `MAX_FALL_SPEED` | 20 | Terminal downward velocity |
//! | `JUMP_VEL` | -15 | Velocity applied by a jump |
//! | `PLAYER_SPEED` | 4.5 | Horizontal speed while a direction is held |
//! | `STOMP_THRESHOLD` | 12 | Max bottom/top overlap that still counts as a stomp |
//! | `PLATFORMER_TICK_MS` | 16 | Fixed timestep (~60 FPS) |
//!
//! # Puzzle tuning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_WIDTH` | 10 | Columns (0-9, left to right) |
//! | `BOARD_HEIGHT` | 20 | Rows (0-19, top to bottom) |
//! | `BASE_DROP_DELAY_MS` | 500 | Gravity interval at level 1 |
//! | `DROP_DELAY_STEP_MS` | 50 | Interval shaved off per level |
//! | `MIN_DROP_DELAY_MS` | 100 | Gravity floor |
//! | `SCORE_PER_LEVEL` | 1000 | Score needed per level |
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{PieceKind, Rect, TileKind, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_ne!(PieceKind::S.color(), PieceKind::Z.color());
//!
//! assert_eq!(TileKind::from_digit(b'4'), Some(TileKind::SolidPlatform));
//! assert!(TileKind::SolidGround.is_solid());
//!
//! let a = Rect::new(0, 0, 10, 10);
//! assert!(a.overlaps(&Rect::new(5, 5, 10, 10)));
//! assert!(!a.overlaps(&Rect::new(10, 0, 10, 10)));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

// ── Platformer constants ──

/// Tile edge length in world pixels
pub const TILE: i32 = 32;

/// Logical screen height the spawn point is measured from
pub const SCREEN_H: i32 = 448;

/// Downward acceleration added to `vy` every tick
pub const GRAVITY: f32 = 0.9;

/// Clamp for downward velocity
pub const MAX_FALL_SPEED: f32 = 20.0;

/// Vertical velocity set by a jump (negative is up)
pub const JUMP_VEL: f32 = -15.0;

/// Horizontal velocity while left/right is held
pub const PLAYER_SPEED: f32 = 4.5;

/// Player and enemy hitbox edge
pub const ACTOR_SIZE: i32 = TILE - 4;

/// Fixed respawn point (top-left of the player rect)
pub const PLAYER_SPAWN: (i32, i32) = (TILE, SCREEN_H - 5 * TILE);

/// Lives at the start of a round
pub const PLAYER_LIVES: u32 = 3;

/// Points for picking up a coin
pub const COIN_SCORE: u32 = 100;

/// Points for stomping an enemy
pub const STOMP_SCORE: u32 = 200;

/// A contact only counts as a stomp if `player.bottom - enemy.top` is below this
pub const STOMP_THRESHOLD: i32 = 12;

/// Pixels an enemy advances per tick
pub const ENEMY_STEP: i32 = 1;

/// Max distance an enemy walks away from its spawn x
pub const ENEMY_PATROL: i32 = 2 * TILE;

/// How far below its feet an enemy looks for ground
pub const ENEMY_GROUND_PROBE: i32 = 2;

/// Platformer fixed timestep in milliseconds (16ms ≈ 60 FPS)
pub const PLATFORMER_TICK_MS: u32 = 16;

// ── Puzzle constants ──

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Input sampling interval for the puzzle loop
pub const PUZZLE_INPUT_TICK_MS: u32 = 16;

/// Gravity interval at level 1
pub const BASE_DROP_DELAY_MS: u32 = 500;

/// Gravity gets this much faster per level
pub const DROP_DELAY_STEP_MS: u32 = 50;

/// Gravity never gets faster than this
pub const MIN_DROP_DELAY_MS: u32 = 100;

/// Score needed to advance one level
pub const SCORE_PER_LEVEL: u32 = 1000;

/// Line clear scoring table, indexed by rows cleared at once (0-4)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];


/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Axis-aligned integer rectangle in world pixels.
///
/// Edges follow the half-open convention: `right() = x + w`, `bottom() = y + h`,
/// so two rects that merely touch do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect covering the tile at `(col, row)`
    pub const fn tile(col: i32, row: i32) -> Self {
        Self::new(col * TILE, row * TILE, TILE, TILE)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn set_left(&mut self, v: i32) {
        self.x = v;
    }

    pub fn set_top(&mut self, v: i32) {
        self.y = v;
    }

    pub fn set_right(&mut self, v: i32) {
        self.x = v - self.w;
    }

    pub fn set_bottom(&mut self, v: i32) {
        self.y = v - self.h;
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Copy shifted by `(dx, dy)`
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Strict overlap test (shared edges are not a collision)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Platformer tile kinds, as encoded by the level digits
///
/// | Digit | Kind |
/// |-------|------|
/// | `0` | Empty |
/// | `1` | SolidGround |
/// | `2` | Coin |
/// | `3` | EnemySpawn |
/// | `4` | SolidPlatform |
/// | `9` | Flag |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileKind {
    #[default]
    Empty,
    SolidGround,
    Coin,
    EnemySpawn,
    SolidPlatform,
    Flag,
}

impl TileKind {
    /// Decode an ASCII level digit. Unknown bytes yield `None`.
    pub fn from_digit(b: u8) -> Option<Self> {
        match b {
            b'0' => Some(TileKind::Empty),
            b'1' => Some(TileKind::SolidGround),
            b'2' => Some(TileKind::Coin),
            b'3' => Some(TileKind::EnemySpawn),
            b'4' => Some(TileKind::SolidPlatform),
            b'9' => Some(TileKind::Flag),
            _ => None,
        }
    }

    /// ASCII digit this kind is written as in a level file
    pub fn digit(self) -> u8 {
        match self {
            TileKind::Empty => b'0',
            TileKind::SolidGround => b'1',
            TileKind::Coin => b'2',
            TileKind::EnemySpawn => b'3',
            TileKind::SolidPlatform => b'4',
            TileKind::Flag => b'9',
        }
    }

    /// Blocks movement (ground and raised platforms)
    pub fn is_solid(self) -> bool {
        matches!(self, TileKind::SolidGround | TileKind::SolidPlatform)
    }
}

/// The seven tetromino piece kinds
///
/// Each kind has a fixed color:
/// - **I**: Cyan
/// - **J**: Blue
/// - **L**: Orange
/// - **O**: Yellow
/// - **S**: Green
/// - **T**: Purple
/// - **Z**: Red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in the order random draws index into
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Color this kind leaves behind when it locks
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0x00, 0xff, 0xff),
            PieceKind::J => Rgb::new(0x00, 0x00, 0xff),
            PieceKind::L => Rgb::new(0xff, 0x7f, 0x00),
            PieceKind::O => Rgb::new(0xff, 0xff, 0x00),
            PieceKind::S => Rgb::new(0x00, 0xff, 0x00),
            PieceKind::T => Rgb::new(0x80, 0x00, 0x80),
            PieceKind::Z => Rgb::new(0xff, 0x00, 0x00),
        }
    }
}

/// A cell on the puzzle board
///
/// - `None`: Empty cell
/// - `Some(Rgb)`: Occupied, holding the color of the piece that locked there
pub type Cell = Option<Rgb>;

/// Discrete puzzle actions, one per key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move one row down, locking if the piece cannot move
    SoftDrop,
    /// Drop to the lowest legal row and lock
    HardDrop,
    /// Rotate 90° clockwise
    Rotate,
    /// Toggle pause
    Pause,
    /// Start a fresh round
    Restart,
}

/// Which logical buttons are asserted during one tick.
///
/// Sampled once per tick by the loop driver and passed down by value; the
/// simulation never polls a device itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub down: bool,
    pub rotate: bool,
    pub hard_drop: bool,
    pub pause: bool,
    pub reset: bool,
    pub quit: bool,
}

impl InputFrame {
    /// Nothing pressed
    pub const IDLE: InputFrame = InputFrame {
        left: false,
        right: false,
        jump: false,
        down: false,
        rotate: false,
        hard_drop: false,
        pause: false,
        reset: false,
        quit: false,
    };

    /// Puzzle actions for this frame, in the order they are applied.
    ///
    /// Restart comes first so a restart frame never also moves the old piece;
    /// the hard drop goes last because it ends the piece.
    pub fn puzzle_actions(&self) -> impl Iterator<Item = GameAction> {
        [
            (self.reset, GameAction::Restart),
            (self.pause, GameAction::Pause),
            (self.left, GameAction::MoveLeft),
            (self.right, GameAction::MoveRight),
            (self.rotate, GameAction::Rotate),
            (self.down, GameAction::SoftDrop),
            (self.hard_drop, GameAction::HardDrop),
        ]
        .into_iter()
        .filter_map(|(on, action)| on.then_some(action))
    }
}

/// Platformer round state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlatformerRound {
    #[default]
    Playing,
    Won,
    Lost,
}

/// Puzzle round state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PuzzleRound {
    #[default]
    Playing,
    Paused,
    GameOver,
}
