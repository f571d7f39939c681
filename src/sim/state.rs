//! Game state and entity stores
//!
//! Everything the simulation mutates lives in `GameState`. The maze and tuning
//! are fixed for the session; the RNG is the single source of randomness.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::maze::Maze;
use crate::cell_to_pos;
use crate::error::{GameError, PlacementError};
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Lives exhausted; simulation halted
    GameOver,
}

/// Facing / travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// One-cell step as (dcol, drow); rows grow downward
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// An arrow in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrow {
    pub col: i32,
    pub row: i32,
    pub direction: Direction,
}

impl Arrow {
    pub fn pos(&self) -> Vec2 {
        cell_to_pos(self.col, self.row)
    }

    /// Move exactly one cell along the travel direction
    pub fn advance(&mut self) {
        let (dc, dr) = self.direction.step();
        self.col += dc;
        self.row += dr;
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Continuous position in cell units
    pub pos: Vec2,
    pub facing: Direction,
    /// Cells per nominal frame
    pub speed: f32,
    /// Arrows available to fire, within [0, max_arrows]
    pub arrow_count: u8,
    pub max_arrows: u8,
    /// Simulation time of the last refill (or shot)
    pub last_refill_ms: f64,
    pub lives: u8,
    /// Arrows in flight
    pub arrows: Vec<Arrow>,
}

impl Character {
    pub fn new(col: usize, row: usize, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(col as f32, row as f32),
            facing: Direction::Right,
            speed: tuning.character_speed,
            arrow_count: tuning.max_arrows,
            max_arrows: tuning.max_arrows,
            last_refill_ms: 0.0,
            lives: tuning.starting_lives,
            arrows: Vec::new(),
        }
    }

    /// Cell containing the character
    pub fn cell(&self) -> (i32, i32) {
        (self.pos.x.floor() as i32, self.pos.y.floor() as i32)
    }

    /// Fire an arrow from the current cell along the facing direction.
    ///
    /// Costs one arrow and restarts the refill timer. Returns false (and does
    /// nothing) when no arrows are available.
    pub fn fire(&mut self, now_ms: f64) -> bool {
        if self.arrow_count == 0 {
            return false;
        }
        let (col, row) = self.cell();
        self.arrows.push(Arrow {
            col,
            row,
            direction: self.facing,
        });
        self.arrow_count -= 1;
        self.last_refill_ms = now_ms;
        true
    }

    /// Grant one arrow if below capacity and a full interval has passed.
    /// Missed intervals are not caught up.
    pub fn refill(&mut self, now_ms: f64, interval_ms: f64) -> bool {
        if self.arrow_count < self.max_arrows && now_ms - self.last_refill_ms >= interval_ms {
            self.arrow_count += 1;
            self.last_refill_ms = now_ms;
            return true;
        }
        false
    }
}

/// A stationary spider spawn point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nest {
    pub id: u32,
    pub col: i32,
    pub row: i32,
    pub hp: u8,
}

impl Nest {
    pub fn pos(&self) -> Vec2 {
        cell_to_pos(self.col, self.row)
    }
}

/// Spider behavior state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpiderState {
    /// Random jitter around its position
    Wandering,
    /// Straight-line pursuit of the character
    Chasing,
}

/// A mobile enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spider {
    pub id: u32,
    pub pos: Vec2,
    pub speed: f32,
    pub state: SpiderState,
}

/// Complete game state (deterministic for a given seed and elapsed-time sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// The maze, read-only for the session
    pub maze: Maze,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Simulation clock (ms), advanced by each tick
    pub time_ms: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub character: Character,
    pub nests: Vec<Nest>,
    pub spiders: Vec<Spider>,
    /// Shared RNG for placement, spawning and wandering
    pub rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// New session on the reference maze with default tuning
    pub fn new(seed: u64) -> Result<Self, PlacementError> {
        Self::with_maze(seed, Maze::reference(), Tuning::default())
    }

    /// New session: character on a random open cell, nests on distinct
    /// random open cells away from the character.
    pub fn with_maze(seed: u64, maze: Maze, tuning: Tuning) -> Result<Self, PlacementError> {
        let mut rng = Pcg32::seed_from_u64(seed);

        let (col, row) = maze.find_random_open_cell(&mut rng)?;
        let character = Character::new(col, row, &tuning);

        let mut state = Self {
            seed,
            maze,
            tuning,
            phase: GamePhase::Running,
            time_ms: 0.0,
            time_ticks: 0,
            character,
            nests: Vec::new(),
            spiders: Vec::new(),
            rng,
            next_id: 1,
        };

        let mut taken = vec![(col, row)];
        for placed in 0..state.tuning.nest_count {
            let (col, row) = state
                .maze
                .find_random_open_cell_excluding(&mut state.rng, &taken)
                .map_err(|e| match e {
                    PlacementError::Exhausted { .. } => PlacementError::Exhausted {
                        requested: state.tuning.nest_count - placed,
                    },
                    other => other,
                })?;
            taken.push((col, row));
            state.add_nest(col as i32, row as i32);
        }

        log::info!(
            "Session {} started: character at ({}, {}), {} nests",
            seed,
            state.character.pos.x,
            state.character.pos.y,
            state.nests.len()
        );
        Ok(state)
    }

    /// New session on a text layout (`#` wall, `.` path)
    pub fn from_layout(seed: u64, layout: &str, tuning: Tuning) -> Result<Self, GameError> {
        let maze = Maze::parse(layout)?;
        Ok(Self::with_maze(seed, maze, tuning)?)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Place a nest at full hit points
    pub fn add_nest(&mut self, col: i32, row: i32) -> u32 {
        let id = self.next_entity_id();
        self.nests.push(Nest {
            id,
            col,
            row,
            hp: self.tuning.nest_hp,
        });
        id
    }

    /// Place a wandering spider at base speed
    pub fn add_spider(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.spiders.push(Spider {
            id,
            pos,
            speed: self.tuning.wander_speed,
            state: SpiderState::Wandering,
        });
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
