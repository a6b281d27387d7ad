//! Movement intent and pointer grabs
//!
//! Input devices are outside the simulation; they report key and pointer
//! events here, and the tick reads the resulting state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;

/// Logical movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Key names bound to this direction
    pub fn keys(self) -> [&'static str; 2] {
        match self {
            Direction::Up => ["w", "up"],
            Direction::Down => ["s", "down"],
            Direction::Left => ["a", "left"],
            Direction::Right => ["d", "right"],
        }
    }

    /// Map a key name to a direction (`w`/`s`/`a`/`d` or the direction name)
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.to_lowercase();
        Direction::ALL
            .into_iter()
            .find(|dir| dir.keys().contains(&key.as_str()))
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Currently held movement keys
///
/// Pressing a direction releases its opposite, so `up`/`down` and
/// `left`/`right` are never both held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl IntentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press (`active = true`) or release a direction
    pub fn set_intent(&mut self, direction: Direction, active: bool) {
        *self.flag_mut(direction) = active;
        if active {
            *self.flag_mut(direction.opposite()) = false;
        }
    }

    pub fn is_active(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Release everything (e.g. when the keyboard is lost)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Per-axis step direction: each component is -1, 0 or 1
    ///
    /// An axis only moves when exactly one of its two flags is held.
    pub fn axis(&self) -> Vec2 {
        let x = match (self.right, self.left) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        };
        let y = match (self.up, self.down) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        };
        Vec2::new(x, y)
    }

    fn flag_mut(&mut self, direction: Direction) -> &mut bool {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

/// An in-progress pointer drag of a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerGrab {
    /// Body position minus pointer position at grab time
    offset: Vec2,
}

impl PointerGrab {
    /// Start dragging `body` if it is movable and `point` lands on it
    pub fn try_grab(body: &Body, point: Vec2) -> Option<Self> {
        if body.movable && body.contains_point(point) {
            Some(Self {
                offset: body.pos - point,
            })
        } else {
            None
        }
    }

    /// Follow the pointer, preserving the grab offset
    pub fn drag(&self, body: &mut Body, point: Vec2) {
        if body.movable {
            body.pos = point + self.offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposing_flags_are_exclusive() {
        let mut intent = IntentState::new();
        intent.set_intent(Direction::Up, true);
        intent.set_intent(Direction::Down, true);
        assert!(!intent.is_active(Direction::Up));
        assert!(intent.is_active(Direction::Down));

        intent.set_intent(Direction::Left, true);
        intent.set_intent(Direction::Right, true);
        assert!(!intent.is_active(Direction::Left));
        assert!(intent.is_active(Direction::Right));

        // Vertical and horizontal are independent
        assert!(intent.is_active(Direction::Down));
    }

    #[test]
    fn test_release_only_clears_its_own_flag() {
        let mut intent = IntentState::new();
        intent.set_intent(Direction::Up, true);
        intent.set_intent(Direction::Right, true);
        intent.set_intent(Direction::Down, false);
        assert!(intent.is_active(Direction::Up));

        intent.set_intent(Direction::Up, false);
        assert!(!intent.is_active(Direction::Up));
        assert!(intent.is_active(Direction::Right));
    }

    #[test]
    fn test_axis() {
        let mut intent = IntentState::new();
        assert_eq!(intent.axis(), Vec2::ZERO);

        intent.set_intent(Direction::Up, true);
        intent.set_intent(Direction::Left, true);
        assert_eq!(intent.axis(), Vec2::new(-1.0, 1.0));

        intent.clear();
        intent.set_intent(Direction::Down, true);
        assert_eq!(intent.axis(), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Direction::from_key("w"), Some(Direction::Up));
        assert_eq!(Direction::from_key("S"), Some(Direction::Down));
        assert_eq!(Direction::from_key("left"), Some(Direction::Left));
        assert_eq!(Direction::from_key("d"), Some(Direction::Right));
        assert_eq!(Direction::from_key("q"), None);
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            for key in dir.keys() {
                assert_eq!(Direction::from_key(key), Some(dir));
            }
        }
    }

    #[test]
    fn test_pointer_grab_keeps_offset() {
        let mut body = Body::controlled(Vec2::new(100.0, 100.0), 50.0);
        let grab = PointerGrab::try_grab(&body, Vec2::new(120.0, 90.0)).unwrap();

        grab.drag(&mut body, Vec2::new(220.0, 190.0));
        assert_eq!(body.pos, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_pointer_grab_needs_hit_and_movable() {
        let body = Body::controlled(Vec2::new(100.0, 100.0), 50.0);
        assert!(PointerGrab::try_grab(&body, Vec2::new(200.0, 100.0)).is_none());

        let ambient = Body::ambient(Vec2::new(100.0, 100.0), 50.0);
        assert!(PointerGrab::try_grab(&ambient, Vec2::new(100.0, 100.0)).is_none());
    }
}
