//! Data-driven game balance
//!
//! Defaults reproduce the reference build. A JSON file may override any subset
//! of fields; missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Character ===
    /// Movement speed in cells per nominal frame
    pub character_speed: f32,
    /// Lives at session start
    pub starting_lives: u8,

    // === Arrows ===
    /// Arrow capacity
    pub max_arrows: u8,
    /// One arrow is refilled per interval
    pub refill_interval_ms: f64,
    /// Minimum time between Left/Right facing changes
    pub turn_delay_ms: f64,

    // === Nests ===
    pub nest_count: usize,
    pub nest_hp: u8,
    /// Per-nest, per-tick chance of spawning a spider
    pub spawn_probability: f64,

    // === Spiders ===
    pub wander_speed: f32,
    /// Chasing speed relative to the character
    pub chase_speed_factor: f32,
    /// Arrows closer than this make a spider chase
    pub detection_radius: f32,
    /// Spiders closer than this to the character cost a life
    pub contact_radius: f32,

    /// Arrow hit distance against spiders and nests
    pub hit_radius: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            character_speed: CHARACTER_SPEED,
            starting_lives: STARTING_LIVES,

            max_arrows: MAX_ARROWS,
            refill_interval_ms: REFILL_INTERVAL_MS,
            turn_delay_ms: TURN_DELAY_MS,

            nest_count: NEST_COUNT,
            nest_hp: NEST_HP,
            spawn_probability: SPAWN_PROBABILITY,

            wander_speed: WANDER_SPEED,
            chase_speed_factor: CHASE_SPEED_FACTOR,
            detection_radius: DETECTION_RADIUS,
            contact_radius: CONTACT_RADIUS,

            hit_radius: HIT_RADIUS,
        }
    }
}

impl Tuning {
    /// Speed a chasing spider moves at
    pub fn chase_speed(&self) -> f32 {
        self.character_speed * self.chase_speed_factor
    }

    /// Parse and validate tuning from JSON text
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Load tuning from the file named by `MAZE_TUNING`, or use defaults
    pub fn load_or_default() -> Result<Self, TuningError> {
        match std::env::var("MAZE_TUNING") {
            Ok(path) => Self::load(path),
            Err(_) => {
                log::info!("Using default tuning");
                Ok(Self::default())
            }
        }
    }

    /// Reject values that would break simulation invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("character_speed", self.character_speed),
            ("wander_speed", self.wander_speed),
            ("chase_speed_factor", self.chase_speed_factor),
            ("detection_radius", self.detection_radius),
            ("contact_radius", self.contact_radius),
            ("hit_radius", self.hit_radius),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::Invalid(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        // Keeps a chasing spider strictly faster than the player
        if self.chase_speed_factor <= 1.0 {
            return Err(TuningError::Invalid(format!(
                "chase_speed_factor must exceed 1.0, got {}",
                self.chase_speed_factor
            )));
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(TuningError::Invalid(format!(
                "spawn_probability must be within [0, 1], got {}",
                self.spawn_probability
            )));
        }
        if self.refill_interval_ms < 0.0 || self.turn_delay_ms < 0.0 {
            return Err(TuningError::Invalid(
                "refill_interval_ms and turn_delay_ms must not be negative".to_string(),
            ));
        }
        if self.starting_lives == 0 || self.nest_hp == 0 {
            return Err(TuningError::Invalid(
                "starting_lives and nest_hp must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
