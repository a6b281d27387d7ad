//! Ownership of every body in a session
//!
//! The controlled body is held apart from the ambient sequence so pairwise
//! scans over the ambient bodies never visit it twice.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::settings::SimConfig;
use crate::window_center;

/// The controlled body plus the ordered ambient bodies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyRegistry {
    controlled: Body,
    /// Iteration order decides which body of a pair absorbs more correction
    ambient: Vec<Body>,
}

impl BodyRegistry {
    pub fn new(controlled: Body, ambient: Vec<Body>) -> Self {
        Self {
            controlled,
            ambient,
        }
    }

    /// Build the starting population for a session
    ///
    /// The controlled body sits at the window center. Ambient centers and radii
    /// are drawn as whole numbers, inclusive at both ends of their ranges.
    pub fn populate<R: Rng>(config: &SimConfig, rng: &mut R) -> Self {
        let controlled = Body::controlled(
            window_center(config.width, config.height),
            config.controlled_radius,
        );

        let max_x = config.width.floor() as u32;
        let max_y = config.height.floor() as u32;
        let ambient = (0..config.ambient_count)
            .map(|_| {
                let x = rng.random_range(0..=max_x) as f32;
                let y = rng.random_range(0..=max_y) as f32;
                let radius =
                    rng.random_range(config.ambient_radius_min..=config.ambient_radius_max) as f32;
                Body::ambient(Vec2::new(x, y), radius)
            })
            .collect();

        Self::new(controlled, ambient)
    }

    pub fn controlled(&self) -> &Body {
        &self.controlled
    }

    pub fn controlled_mut(&mut self) -> &mut Body {
        &mut self.controlled
    }

    /// Ambient bodies in stable order
    pub fn iter_ambient(&self) -> impl Iterator<Item = &Body> {
        self.ambient.iter()
    }

    pub fn ambient(&self) -> &[Body] {
        &self.ambient
    }

    pub fn ambient_len(&self) -> usize {
        self.ambient.len()
    }

    /// Borrow the controlled body and the ambient bodies mutably at once
    pub fn split_mut(&mut self) -> (&mut Body, &mut [Body]) {
        (&mut self.controlled, &mut self.ambient)
    }
}

/// Mutable references to two distinct elements of a slice
///
/// Panics if `i == j` or either index is out of bounds.
pub fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    assert_ne!(i, j, "pair_mut needs two distinct indices");
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_populate_matches_config() {
        let config = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let registry = BodyRegistry::populate(&config, &mut rng);

        assert_eq!(registry.ambient_len(), config.ambient_count);
        assert_eq!(registry.controlled().pos, Vec2::new(400.0, 300.0));
        assert_eq!(registry.controlled().radius(), 50.0);
        assert!(registry.controlled().movable);

        for body in registry.iter_ambient() {
            assert!(!body.movable);
            assert!((50.0..=100.0).contains(&body.radius()));
            assert!((0.0..=config.width).contains(&body.pos.x));
            assert!((0.0..=config.height).contains(&body.pos.y));
            assert_eq!(body.pos.x.fract(), 0.0);
            assert_eq!(body.radius().fract(), 0.0);
        }
    }

    #[test]
    fn test_populate_is_seeded() {
        let config = SimConfig::default();
        let a = BodyRegistry::populate(&config, &mut Pcg32::seed_from_u64(42));
        let b = BodyRegistry::populate(&config, &mut Pcg32::seed_from_u64(42));
        let c = BodyRegistry::populate(&config, &mut Pcg32::seed_from_u64(43));

        assert_eq!(a.ambient(), b.ambient());
        assert_ne!(a.ambient(), c.ambient());
    }

    #[test]
    fn test_pair_mut_both_orders() {
        let mut bodies = vec![
            Body::ambient(Vec2::new(0.0, 0.0), 1.0),
            Body::ambient(Vec2::new(1.0, 0.0), 2.0),
            Body::ambient(Vec2::new(2.0, 0.0), 3.0),
        ];

        let (a, b) = pair_mut(&mut bodies, 0, 2);
        assert_eq!((a.radius(), b.radius()), (1.0, 3.0));

        let (a, b) = pair_mut(&mut bodies, 2, 1);
        assert_eq!((a.radius(), b.radius()), (3.0, 2.0));
    }

    #[test]
    fn test_split_mut_keeps_controlled_out_of_ambient() {
        let mut registry = BodyRegistry::new(
            Body::controlled(Vec2::ZERO, 50.0),
            vec![Body::ambient(Vec2::new(10.0, 0.0), 20.0)],
        );
        let (controlled, ambient) = registry.split_mut();
        controlled.pos.x = 5.0;
        ambient[0].pos.x = 15.0;

        assert_eq!(registry.controlled().pos.x, 5.0);
        assert_eq!(registry.ambient_len(), 1);
        assert_eq!(registry.ambient()[0].pos.x, 15.0);
    }
}
