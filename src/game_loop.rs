//! Frame driver
//!
//! One frame = measure elapsed time, tick, render. The loop runs on a single
//! thread and stops by not scheduling the next frame once its handle is
//! stopped. Renderer and clock are injected.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::consts::NOMINAL_FRAME_MS;
use crate::error::PlacementError;
use crate::render::Renderer;
use crate::sim::{GameState, InputTracker, Key, tick};

/// Time source and frame pacing
pub trait FrameClock {
    /// Milliseconds on a monotonic clock
    fn now_ms(&mut self) -> f64;
    /// Block until the next frame is due
    fn wait_next_frame(&mut self);
}

/// Real time, paced to the nominal refresh rate
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
    interval: Duration,
    next_frame: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::with_interval(Duration::from_secs_f64(NOMINAL_FRAME_MS / 1000.0))
    }

    pub fn with_interval(interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            interval,
            next_frame: now + interval,
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn now_ms(&mut self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    fn wait_next_frame(&mut self) {
        let now = Instant::now();
        if self.next_frame > now {
            std::thread::sleep(self.next_frame - now);
        }
        // Skip missed frames instead of bursting to catch up
        self.next_frame = self.next_frame.max(now) + self.interval;
    }
}

/// Virtual time that advances a fixed step per frame; never sleeps
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: f64,
    step_ms: f64,
}

impl ManualClock {
    pub fn new(step_ms: f64) -> Self {
        Self { now: 0.0, step_ms }
    }
}

impl FrameClock for ManualClock {
    fn now_ms(&mut self) -> f64 {
        self.now
    }

    fn wait_next_frame(&mut self) {
        self.now += self.step_ms;
    }
}

/// Stops a running loop before its next frame
#[derive(Debug, Clone, Default)]
pub struct LoopHandle {
    stopped: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

/// What a frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Ticked and rendered
    Running,
    /// Simulation halted; last state rendered again
    GameOver,
    /// Handle was stopped; nothing done
    Stopped,
}

/// Owns a session and drives it frame by frame
pub struct GameLoop<R: Renderer, C: FrameClock> {
    state: GameState,
    input: InputTracker,
    renderer: R,
    clock: C,
    handle: LoopHandle,
    last_frame_ms: Option<f64>,
    frames: u64,
    game_over_reported: bool,
}

impl<R: Renderer, C: FrameClock> GameLoop<R, C> {
    pub fn new(state: GameState, renderer: R, clock: C) -> Self {
        Self {
            state,
            input: InputTracker::new(),
            renderer,
            clock,
            handle: LoopHandle::default(),
            last_frame_ms: None,
            frames: 0,
            game_over_reported: false,
        }
    }

    /// A handle that stops this loop
    pub fn handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Deliver a key press, dated by the clock relative to the last frame
    pub fn key_down(&mut self, key: Key) {
        let at = match self.last_frame_ms {
            Some(last) => self.state.time_ms + (self.clock.now_ms() - last).max(0.0),
            None => self.state.time_ms,
        };
        self.input.key_down_at(key, &mut self.state, at);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    /// Host lost focus: nothing stays held
    pub fn focus_lost(&mut self) {
        self.input.release_all();
    }

    /// Run a single frame: tick with the elapsed time since the previous
    /// frame, then render.
    pub fn frame(&mut self) -> FrameOutcome {
        if self.handle.is_stopped() {
            return FrameOutcome::Stopped;
        }

        let now = self.clock.now_ms();
        let elapsed = self.last_frame_ms.map_or(0.0, |last| now - last);
        self.last_frame_ms = Some(now);

        tick(&mut self.state, &self.input, elapsed);
        self.renderer.render(&self.state);
        self.frames += 1;

        if self.state.is_game_over() {
            if !self.game_over_reported {
                self.game_over_reported = true;
                log::info!("Game over after {} frames", self.frames);
            }
            FrameOutcome::GameOver
        } else {
            FrameOutcome::Running
        }
    }

    /// Run frames until stopped or `max_frames` is reached.
    /// Returns the number of frames run.
    pub fn run(&mut self, max_frames: Option<u64>) -> u64 {
        self.run_with(max_frames, |_| {})
    }

    /// Like `run`, calling `host` before every frame to deliver input or stop
    /// the loop.
    pub fn run_with<F>(&mut self, max_frames: Option<u64>, mut host: F) -> u64
    where
        F: FnMut(&mut Self),
    {
        let mut count = 0;
        loop {
            if max_frames.is_some_and(|max| count >= max) {
                break;
            }
            host(self);
            if self.frame() == FrameOutcome::Stopped {
                break;
            }
            count += 1;
            self.clock.wait_next_frame();
        }
        log::debug!("Loop exited after {} frames", count);
        count
    }

    /// Start a fresh session on the same maze and tuning
    pub fn restart(&mut self, seed: u64) -> Result<(), PlacementError> {
        self.state = GameState::with_maze(seed, self.state.maze.clone(), self.state.tuning.clone())?;
        self.input.reset();
        self.last_frame_ms = None;
        self.game_over_reported = false;
        log::info!("Session restarted with seed {}", seed);
        Ok(())
    }
}
