//! Maze Archer entry point
//!
//! Runs a headless session on the reference maze with an autopilot at the
//! keys, drawing the board as text. Canvas hosts drive `GameLoop` themselves.
//!
//! Environment:
//! - `MAZE_SEED`: session seed (defaults to the current time)
//! - `MAZE_FRAMES`: frame limit (default 3600, one minute at 60 Hz)
//! - `MAZE_TUNING`: path to a tuning JSON file
//! - `MAZE_LAYOUT`: path to a text maze (`#` wall, `.` path)

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use maze_archer::render::draw_frame;
use maze_archer::sim::{GameState, Key, Maze};
use maze_archer::{FrameClock, GameLoop, Renderer, SystemClock, TextRenderer, Tuning};

/// Frames between text frames on stdout
const DRAW_INTERVAL: u64 = 30;

/// Wanders the maze and shoots now and then
struct Autopilot {
    rng: Pcg32,
    held: Option<Key>,
    frames_left: u32,
}

impl Autopilot {
    fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15),
            held: None,
            frames_left: 0,
        }
    }

    fn drive<R: Renderer, C: FrameClock>(&mut self, game: &mut GameLoop<R, C>) {
        if self.frames_left == 0 {
            if let Some(key) = self.held.take() {
                game.key_up(key);
            }
            let key = [Key::Up, Key::Down, Key::Left, Key::Right][self.rng.random_range(0..4)];
            game.key_down(key);
            self.held = Some(key);
            self.frames_left = self.rng.random_range(20..90);
        }
        self.frames_left -= 1;

        if self.rng.random::<f32>() < 0.05 {
            game.key_down(Key::Fire);
        }
    }
}

fn env_u64(name: &str) -> anyhow::Result<Option<u64>> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be an unsigned integer, got '{value}'")),
        Err(_) => Ok(None),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Maze Archer (headless) starting...");

    let seed = match env_u64("MAZE_SEED")? {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default(),
    };
    let max_frames = env_u64("MAZE_FRAMES")?.unwrap_or(3600);
    let tuning = Tuning::load_or_default()?;

    let state = match std::env::var("MAZE_LAYOUT") {
        Ok(path) => {
            let layout = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read maze layout {path}"))?;
            GameState::from_layout(seed, &layout, tuning)?
        }
        Err(_) => GameState::with_maze(seed, Maze::reference(), tuning)
            .context("failed to place the character and nests")?,
    };
    let renderer = TextRenderer::new(std::io::stdout(), DRAW_INTERVAL);
    let mut game = GameLoop::new(state, renderer, SystemClock::new());
    let handle = game.handle();
    let mut pilot = Autopilot::new(seed);

    let frames = game.run_with(Some(max_frames), |g| {
        if g.state().is_game_over() {
            handle.stop();
            return;
        }
        pilot.drive(g);
    });

    println!("{}", draw_frame(game.state()));
    log::info!("Finished after {} frames (seed {})", frames, seed);
    Ok(())
}
