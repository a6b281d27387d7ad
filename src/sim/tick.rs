//! Fixed timestep simulation tick
//!
//! Each tick moves the controlled body by the held keys and then runs one
//! brute-force collision pass over every body.

use super::body::Body;
use super::collision::{PushMode, resolve};
use super::intent::IntentState;
use super::registry::{BodyRegistry, pair_mut};
use super::state::SimState;

/// Advance the simulation by one tick
pub fn tick(state: &mut SimState, intent: &IntentState) {
    apply_intent(state.registry.controlled_mut(), intent, state.move_step);
    collision_pass(&mut state.registry, state.ambient_push);
    state.time_ticks += 1;
}

/// Move `body` by `step` along each axis with exactly one key held
///
/// Diagonal movement is deliberately not normalized.
pub fn apply_intent(body: &mut Body, intent: &IntentState, step: f32) {
    if !body.movable {
        return;
    }
    body.pos += intent.axis() * step;
}

/// Run one collision pass over every body in the registry
///
/// For each ambient body `i`, every other ambient body `j` is pushed off it
/// (`resolve(j, i)`), then the controlled body and `i` push each other apart.
/// Unordered ambient pairs are therefore visited twice per pass, once from
/// each side.
// NOTE: visiting each pair twice with a one-sided push may be an old bug;
// trajectories depend on it, so it stays.
pub fn collision_pass(registry: &mut BodyRegistry, ambient_mode: PushMode) {
    let (controlled, ambient) = registry.split_mut();
    for i in 0..ambient.len() {
        resolve_ambient_row(ambient, i, ambient_mode);
        resolve(controlled, &mut ambient[i], PushMode::PushBoth);
    }
}

/// The ambient-ambient half of [`collision_pass`] on its own
pub fn ambient_pass(ambient: &mut [Body], mode: PushMode) {
    for i in 0..ambient.len() {
        resolve_ambient_row(ambient, i, mode);
    }
}

fn resolve_ambient_row(ambient: &mut [Body], i: usize, mode: PushMode) {
    for j in 0..ambient.len() {
        if i != j {
            let (body_j, body_i) = pair_mut(ambient, j, i);
            resolve(body_j, body_i, mode);
        }
    }
}
