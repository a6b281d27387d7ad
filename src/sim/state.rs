//! Simulation state
//!
//! Everything a tick reads or writes apart from the input state.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::PushMode;
use super::registry::BodyRegistry;
use crate::error::Error;
use crate::settings::SimConfig;

/// Loop lifecycle. There is no pause and no terminal state; a running loop
/// stops only when its host shuts down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoopPhase {
    /// Built but not yet ticking
    #[default]
    Idle,
    /// Ticking at the fixed rate
    Running,
}

/// Complete simulation state (deterministic for a given seed and input)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Seed the population was drawn from
    pub seed: u64,
    /// Completed ticks
    pub time_ticks: u64,
    /// All bodies
    pub registry: BodyRegistry,
    /// Distance moved per tick along each held axis
    pub move_step: f32,
    /// Mode used for the ambient-ambient pass
    pub ambient_push: PushMode,
}

impl SimState {
    /// Validate `config` and populate a fresh session from it
    pub fn new(config: &SimConfig) -> Result<Self, Error> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let registry = BodyRegistry::populate(config, &mut rng);
        log::debug!(
            "populated {} ambient bodies from seed {}",
            registry.ambient_len(),
            config.seed
        );
        Ok(Self::with_registry(config, registry))
    }

    /// Use a hand-built population instead of a random one
    pub fn with_registry(config: &SimConfig, registry: BodyRegistry) -> Self {
        Self {
            seed: config.seed,
            time_ticks: 0,
            registry,
            move_step: config.move_step,
            ambient_push: config.ambient_push,
        }
    }
}
