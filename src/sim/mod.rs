//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in as elapsed milliseconds, never from a wall clock
//! - Seeded RNG only
//! - Stable iteration order (insertion order of entities)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod maze;
pub mod state;
pub mod tick;

pub use collision::{SlideResult, slide_move, within};
pub use input::{HeldKeys, InputTracker, Key};
pub use maze::{Cell, Maze, REFERENCE_LAYOUT};
pub use state::{Arrow, Character, Direction, GamePhase, GameState, Nest, Spider, SpiderState};
pub use tick::tick;
