//! Circular bodies
//!
//! Positions are circle centers in window coordinates (origin bottom-left).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A circular collidable entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Center position, reassigned freely by movement and collision resolution
    pub pos: Vec2,
    /// Fixed at creation
    radius: f32,
    /// Whether input (keys or pointer drag) may reposition this body
    pub movable: bool,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32, movable: bool) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self {
            pos,
            radius,
            movable,
        }
    }

    /// A body that only moves when something collides with it
    pub fn ambient(pos: Vec2, radius: f32) -> Self {
        Self::new(pos, radius, false)
    }

    /// The player's body
    pub fn controlled(pos: Vec2, radius: f32) -> Self {
        Self::new(pos, radius, true)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Whether `point` lies inside the circle, boundary included
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        (point - self.pos).length() <= self.radius
    }
}
