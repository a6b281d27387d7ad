//! Circle Push - a crowd of circles jostled by one player-driven circle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, fixed-tick loop)
//! - `render`: Per-tick snapshot handed to the presentation layer
//! - `settings`: Session configuration
//! - `script`: Scripted key input for headless runs

pub mod error;
pub mod render;
pub mod script;
pub mod settings;
pub mod sim;

pub use error::Error;
pub use settings::SimConfig;

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation tick rate
    pub const TICK_HZ: u32 = 60;
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will account for
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default window size
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Distance the controlled body travels per tick along each held axis
    pub const MOVE_STEP: f32 = 5.0;

    /// Controlled body starts centered with this radius
    pub const CONTROLLED_RADIUS: f32 = 50.0;

    /// Ambient population
    pub const AMBIENT_COUNT: usize = 10;
    pub const AMBIENT_RADIUS_MIN: u32 = 50;
    pub const AMBIENT_RADIUS_MAX: u32 = 100;
}

/// Center of a `width` x `height` window anchored at the origin
#[inline]
pub fn window_center(width: f32, height: f32) -> Vec2 {
    Vec2::new(width * 0.5, height * 0.5)
}
