//! Maze Archer - a grid maze arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (maze, entities, input, per-frame tick)
//! - `game_loop`: Cancellable frame driver with injected renderer and clock
//! - `render`: Read-only render seam and a text renderer
//! - `tuning`: Data-driven game balance
//! - `server`: Static asset host with fallback to the entry page

pub mod error;
pub mod game_loop;
pub mod render;
pub mod server;
pub mod sim;
pub mod tuning;

pub use error::{GameError, MazeError, PlacementError, TuningError};
pub use game_loop::{FrameClock, GameLoop, LoopHandle, ManualClock, SystemClock};
pub use render::{Renderer, TextRenderer};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal display refresh interval (60 Hz). Speeds are per nominal frame.
    pub const NOMINAL_FRAME_MS: f64 = 1000.0 / 60.0;
    /// Largest elapsed time a single tick moves entities by
    pub const MAX_FRAME_MS: f64 = 100.0;

    /// Pixel size of a cell in the reference canvas; only used to derive speeds
    pub const CELL_SIZE_PX: f32 = 40.0;

    /// Character defaults
    pub const CHARACTER_SPEED: f32 = 1.5 / CELL_SIZE_PX; // 1.5 px per frame
    pub const STARTING_LIVES: u8 = 3;

    /// Arrow defaults
    pub const MAX_ARROWS: u8 = 3;
    pub const REFILL_INTERVAL_MS: f64 = 500.0;
    pub const TURN_DELAY_MS: f64 = 300.0;

    /// Nest defaults
    pub const NEST_COUNT: usize = 3;
    pub const NEST_HP: u8 = 3;
    pub const SPAWN_PROBABILITY: f64 = 0.03;

    /// Spider defaults
    pub const WANDER_SPEED: f32 = 0.05;
    pub const CHASE_SPEED_FACTOR: f32 = 1.1;
    pub const DETECTION_RADIUS: f32 = 2.0;
    pub const CONTACT_RADIUS: f32 = 0.5;

    /// Arrow vs spider/nest hit distance
    pub const HIT_RADIUS: f32 = 1.0;

    /// Rejection sampling attempts before enumerating open cells
    pub const PLACEMENT_ATTEMPTS: u32 = 256;
}

/// Convert an integer cell to its continuous grid position
#[inline]
pub fn cell_to_pos(col: i32, row: i32) -> Vec2 {
    Vec2::new(col as f32, row as f32)
}
