//! Circle-circle overlap detection and positional push-apart
//!
//! This is a positional constraint solve, not an impulse: no velocities are
//! involved. Two circles touch when the distance between their centers is at
//! most the sum of their radii, and resolution slides one or both of them
//! along the center-to-center axis until they just touch.

use serde::{Deserialize, Serialize};

use super::body::Body;

/// How `resolve` corrects an overlapping pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PushMode {
    /// Detect only
    None,
    /// Move the first body away from the second
    #[default]
    PushA,
    /// Move the first body, then the second away from the first's new position
    PushBoth,
}

/// Whether two circles overlap (touching counts)
#[inline]
pub fn overlaps(a: &Body, b: &Body) -> bool {
    (a.pos - b.pos).length() <= a.radius() + b.radius()
}

/// Detect and correct overlap between `a` and `b`
///
/// Returns whether the pair was in contact. The correction magnitude is half
/// the penetration depth. In [`PushMode::PushBoth`] that same magnitude is
/// applied to `b` along the axis measured from `a`'s already-moved position;
/// with both pushes the pair ends up exactly touching.
///
/// Concentric bodies have no separating axis and are left where they are.
pub fn resolve(a: &mut Body, b: &mut Body, mode: PushMode) -> bool {
    let axis = a.pos - b.pos;
    let distance = axis.length();
    let reach = a.radius() + b.radius();

    if distance > reach {
        return false;
    }
    if mode == PushMode::None {
        return true;
    }
    if distance == 0.0 {
        log::trace!("concentric bodies at {:?}, skipping push", a.pos);
        return true;
    }

    // Non-positive while intruding
    let overlap = (distance - reach) * 0.5;

    a.pos -= overlap * axis / distance;

    if mode == PushMode::PushBoth {
        let axis = a.pos - b.pos;
        b.pos += overlap * axis.normalize_or_zero();
    }

    true
}
