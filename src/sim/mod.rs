//! Deterministic simulation module
//!
//! All collision and movement logic lives here. This module must be pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (registry order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod game_loop;
pub mod intent;
pub mod registry;
pub mod state;
pub mod tick;

pub use body::Body;
pub use collision::{PushMode, overlaps, resolve};
pub use game_loop::SimulationLoop;
pub use intent::{Direction, IntentState, PointerGrab};
pub use registry::BodyRegistry;
pub use state::{LoopPhase, SimState};
pub use tick::{ambient_pass, apply_intent, collision_pass, tick};
