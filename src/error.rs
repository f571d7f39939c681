//! Error types
//!
//! The simulation step itself never fails; errors only arise while building a
//! session (maze parsing, entity placement) or loading tuning data.

use thiserror::Error;

/// No valid cell could be found for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("maze has no open cell to place an entity in")]
    NoOpenCell,
    #[error("every open cell is already taken (needed {requested} more)")]
    Exhausted { requested: usize },
}

/// Malformed maze layout
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze layout is empty")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid cell {value:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, value: char },
}

/// Tuning data could not be loaded
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Any failure while setting up a game session
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error(transparent)]
    Tuning(#[from] TuningError),
}
