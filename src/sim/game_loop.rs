//! Fixed-rate loop driver
//!
//! Owns the simulation state together with the input state, so key and
//! pointer events land between ticks on the same thread that runs them.

use glam::Vec2;

use super::intent::{Direction, IntentState, PointerGrab};
use super::state::{LoopPhase, SimState};
use super::tick::tick;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};
use crate::error::Error;
use crate::render::{CircleInstance, snapshot};
use crate::settings::SimConfig;

/// A simulation session plus its fixed-step clock
#[derive(Debug, Clone)]
pub struct SimulationLoop {
    state: SimState,
    intent: IntentState,
    grab: Option<PointerGrab>,
    phase: LoopPhase,
    /// Seconds of elapsed time not yet consumed by ticks
    accumulator: f32,
    /// Length of one tick in seconds
    dt: f32,
}

impl SimulationLoop {
    pub fn new(config: &SimConfig) -> Result<Self, Error> {
        Self::from_state(config, SimState::new(config)?)
    }

    /// Drive an existing state (e.g. a hand-built population)
    pub fn from_state(config: &SimConfig, state: SimState) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            state,
            intent: IntentState::new(),
            grab: None,
            phase: LoopPhase::Idle,
            accumulator: 0.0,
            dt: config.tick_dt(),
        })
    }

    /// Begin ticking. Starting an already running loop does nothing.
    pub fn start(&mut self) {
        if self.phase == LoopPhase::Idle {
            log::info!(
                "simulation running: {} ambient bodies, seed {}",
                self.state.registry.ambient_len(),
                self.state.seed
            );
            self.phase = LoopPhase::Running;
        }
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn intent(&self) -> &IntentState {
        &self.intent
    }

    pub fn tick_count(&self) -> u64 {
        self.state.time_ticks
    }

    pub fn set_intent(&mut self, direction: Direction, active: bool) {
        self.intent.set_intent(direction, active);
    }

    /// Key press by name; returns false for keys with no binding
    pub fn key_down(&mut self, key: &str) -> bool {
        self.key_event(key, true)
    }

    /// Key release by name; returns false for keys with no binding
    pub fn key_up(&mut self, key: &str) -> bool {
        self.key_event(key, false)
    }

    fn key_event(&mut self, key: &str, active: bool) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                self.set_intent(direction, active);
                true
            }
            None => false,
        }
    }

    /// The keyboard went away; nothing stays held
    pub fn release_keys(&mut self) {
        self.intent.clear();
    }

    /// Grab the controlled body if `point` lands on it. Returns whether it did.
    pub fn pointer_down(&mut self, point: Vec2) -> bool {
        self.grab = PointerGrab::try_grab(self.state.registry.controlled(), point);
        self.grab.is_some()
    }

    pub fn pointer_move(&mut self, point: Vec2) {
        if let Some(grab) = &self.grab {
            grab.drag(self.state.registry.controlled_mut(), point);
        }
    }

    pub fn pointer_up(&mut self) {
        self.grab = None;
    }

    /// Run exactly one tick if the loop is running
    pub fn step(&mut self) -> bool {
        if self.phase != LoopPhase::Running {
            return false;
        }
        tick(&mut self.state, &self.intent);
        true
    }

    /// Account for `frame_dt` seconds of wall time and run the ticks now due
    ///
    /// Returns how many ticks ran. Long frames are clamped and at most
    /// `MAX_SUBSTEPS` ticks run per call. A partial tick carries over to the
    /// next frame; whole ticks beyond the cap are dropped. Non-finite frame
    /// times count as zero.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if self.phase != LoopPhase::Running || !frame_dt.is_finite() {
            return 0;
        }

        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.dt && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.intent);
            self.accumulator -= self.dt;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS && self.accumulator >= self.dt {
            log::debug!("dropping {:.4}s of tick backlog", self.accumulator);
            self.accumulator %= self.dt;
        }
        substeps
    }

    /// Every body's center and radius for drawing, controlled body first
    pub fn snapshot(&self) -> Vec<CircleInstance> {
        snapshot(&self.state.registry)
    }
}
