//! Keyboard input tracking
//!
//! Held directional keys drive movement in `tick`; key-down events also turn
//! the character and fire arrows immediately.

use serde::{Deserialize, Serialize};

use super::state::{Direction, GameState};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

impl Key {
    /// Map a host key identifier (DOM `KeyboardEvent.key` style)
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" | "w" | "W" => Some(Key::Up),
            "ArrowDown" | "s" | "S" => Some(Key::Down),
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            "f" | "F" => Some(Key::Fire),
            _ => None,
        }
    }
}

/// Currently held directional keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// Unit step per axis; Down wins over Up and Right wins over Left
    pub fn axis(&self) -> (f32, f32) {
        let mut dx = 0.0;
        let mut dy = 0.0;
        if self.up {
            dy = -1.0;
        }
        if self.down {
            dy = 1.0;
        }
        if self.left {
            dx = -1.0;
        }
        if self.right {
            dx = 1.0;
        }
        (dx, dy)
    }
}

/// Input state carried between frames
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    held: HeldKeys,
    /// Simulation time of the last Left/Right facing change
    last_turn_ms: f64,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> HeldKeys {
        self.held
    }

    pub fn last_turn_ms(&self) -> f64 {
        self.last_turn_ms
    }

    /// Handle a key press at the state's current simulation time
    pub fn key_down(&mut self, key: Key, state: &mut GameState) {
        let now = state.time_ms;
        self.key_down_at(key, state, now);
    }

    /// Handle a key press that happened at `at_ms` on the simulation clock.
    ///
    /// Up/Down turn immediately. Left/Right turn only once the turn delay has
    /// passed since the previous horizontal turn. Fire shoots if an arrow is
    /// available. Ignored once the game is over. Times earlier than the last
    /// tick are taken as the last tick.
    pub fn key_down_at(&mut self, key: Key, state: &mut GameState, at_ms: f64) {
        if state.is_game_over() {
            return;
        }
        let now = if at_ms.is_finite() {
            at_ms.max(state.time_ms)
        } else {
            state.time_ms
        };
        let character = &mut state.character;
        match key {
            Key::Up => {
                self.held.up = true;
                character.facing = Direction::Up;
            }
            Key::Down => {
                self.held.down = true;
                character.facing = Direction::Down;
            }
            Key::Left => {
                self.held.left = true;
                if now - self.last_turn_ms >= state.tuning.turn_delay_ms {
                    character.facing = Direction::Left;
                    self.last_turn_ms = now;
                }
            }
            Key::Right => {
                self.held.right = true;
                if now - self.last_turn_ms >= state.tuning.turn_delay_ms {
                    character.facing = Direction::Right;
                    self.last_turn_ms = now;
                }
            }
            Key::Fire => {
                if character.fire(now) {
                    log::debug!(
                        "Arrow fired {:?}, {} left",
                        character.facing,
                        character.arrow_count
                    );
                }
            }
        }
    }

    /// Handle a key release
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Up => self.held.up = false,
            Key::Down => self.held.down = false,
            Key::Left => self.held.left = false,
            Key::Right => self.held.right = false,
            Key::Fire => {}
        }
    }

    /// Release every held key (focus loss)
    pub fn release_all(&mut self) {
        self.held = HeldKeys::default();
    }

    /// Forget turn timing and held keys (session restart)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
