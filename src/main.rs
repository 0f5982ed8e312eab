//! Terminal arcade runner (default binary).
//!
//! `tui-arcade [platformer|puzzle] [--config PATH]`
//!
//! Both games run on a fixed-tick loop: wait for input until the next tick is
//! due, sample one `InputFrame` per tick, step the simulation, render the
//! snapshot. Log output goes to stderr (`RUST_LOG=info tui-arcade 2>log`).

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use crossterm::event;
use log::info;

use tui_arcade::config::ArcadeConfig;
use tui_arcade::core::{PlatformerSession, PuzzleGame, SimpleRng, TickClock};
use tui_arcade::input::{KeySampler, Layout};
use tui_arcade::term::{FrameBuffer, PlatformerView, PuzzleView, TerminalRenderer, Viewport};
use tui_arcade::{default_level, load_level, FileRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Platformer,
    Puzzle,
}

#[derive(Debug)]
struct Args {
    mode: Mode,
    config: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args {
        mode: Mode::Puzzle,
        config: None,
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "platformer" => parsed.mode = Mode::Platformer,
            "puzzle" => parsed.mode = Mode::Puzzle,
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                println!("usage: tui-arcade [platformer|puzzle] [--config PATH]");
                std::process::exit(0);
            }
            other => bail!("unknown argument {other:?} (try --help)"),
        }
    }
    Ok(parsed)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = ArcadeConfig::load(args.config.as_deref())?;
    info!("starting {:?} with {config:?}", args.mode);

    // Resolve the level before touching the terminal so errors print cleanly.
    let level = match (args.mode, &config.platformer.level_path) {
        (Mode::Platformer, Some(path)) => load_level(path)?,
        _ => default_level(),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = match args.mode {
        Mode::Platformer => run_platformer(&mut term, &config, level),
        Mode::Puzzle => run_puzzle(&mut term, &config),
    };

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

/// Whole milliseconds of wall time handed out since the last call.
///
/// Only the milliseconds actually returned are consumed; the sub-millisecond
/// remainder stays on the clock, so frequent early wake-ups do not drift.
struct WallClock {
    last: Instant,
}

impl WallClock {
    fn new(start: Instant) -> Self {
        Self { last: start }
    }

    fn take_ms(&mut self, now: Instant) -> u32 {
        let ms = now.saturating_duration_since(self.last).as_millis();
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        self.last += Duration::from_millis(u64::from(ms));
        ms
    }
}

/// Block on input until the next tick is due (or an event arrives).
fn wait_for_tick(clock: &TickClock) -> Result<()> {
    let timeout = Duration::from_millis(clock.until_next_ms() as u64);
    event::poll(timeout)?;
    Ok(())
}

fn run_platformer(
    term: &mut TerminalRenderer,
    config: &ArcadeConfig,
    level: tui_arcade::core::TileGrid,
) -> Result<()> {
    let mut session = PlatformerSession::new(level);
    let view = PlatformerView::default();
    let mut sampler = KeySampler::new(Layout::Platformer);
    sampler.honor_release = term.key_release_events();

    let mut clock = TickClock::new(config.platformer.tick_ms);
    let mut fb = FrameBuffer::new(0, 0);
    let start = Instant::now();
    let mut wall = WallClock::new(start);

    loop {
        view.render_into(&session.snapshot(), viewport(), &mut fb);
        term.draw_swap(&mut fb)?;

        wait_for_tick(&clock)?;
        let now = Instant::now();
        let now_ms = now.duration_since(start).as_millis() as u64;
        if sampler.drain_terminal(now_ms)? {
            term.invalidate();
        }

        for _ in 0..clock.advance(wall.take_ms(now)) {
            let frame = sampler.take_frame(now_ms);
            if frame.quit {
                return Ok(());
            }
            session.step(&frame);
        }
    }
}

fn run_puzzle(term: &mut TerminalRenderer, config: &ArcadeConfig) -> Result<()> {
    let rng = config
        .puzzle
        .seed
        .map(SimpleRng::new)
        .unwrap_or_else(SimpleRng::from_time);
    let record = FileRecord::new(&config.puzzle.record_path);
    let mut game = PuzzleGame::new(rng, Box::new(record)).with_base_delay(config.puzzle.base_delay_ms);

    let view = PuzzleView::default();
    let mut sampler = KeySampler::new(Layout::Puzzle);
    let mut clock = TickClock::new(config.puzzle.input_tick_ms);
    let mut fb = FrameBuffer::new(0, 0);
    let start = Instant::now();
    let mut wall = WallClock::new(start);

    loop {
        view.render_into(&game.snapshot(), viewport(), &mut fb);
        term.draw_swap(&mut fb)?;

        wait_for_tick(&clock)?;
        let now = Instant::now();
        if sampler.drain_terminal(now.duration_since(start).as_millis() as u64)? {
            term.invalidate();
        }

        for _ in 0..clock.advance(wall.take_ms(now)) {
            let frame = sampler.take_frame(0);
            if frame.quit {
                return Ok(());
            }
            game.step(&frame);
            game.tick(clock.tick_ms());
        }
    }
}
