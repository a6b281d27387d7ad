//! Per-tick snapshot for the presentation layer
//!
//! Drawing happens elsewhere. After each tick the host reads one
//! [`CircleInstance`] per body and uploads the slice as-is.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::sim::{Body, BodyRegistry};

/// Flag bit set on the controlled body's instance
pub const FLAG_CONTROLLED: u32 = 1;

/// One circle to draw
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub flags: u32,
}

impl CircleInstance {
    pub fn from_body(body: &Body, flags: u32) -> Self {
        Self {
            center: body.pos.to_array(),
            radius: body.radius(),
            flags,
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.flags & FLAG_CONTROLLED != 0
    }
}

/// Controlled body first, then ambient bodies in registry order
pub fn snapshot(registry: &BodyRegistry) -> Vec<CircleInstance> {
    let mut instances = Vec::with_capacity(registry.ambient_len() + 1);
    instances.push(CircleInstance::from_body(
        registry.controlled(),
        FLAG_CONTROLLED,
    ));
    instances.extend(
        registry
            .iter_ambient()
            .map(|body| CircleInstance::from_body(body, 0)),
    );
    instances
}

/// Raw bytes of an instance slice, ready for a vertex buffer
pub fn as_bytes(instances: &[CircleInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_snapshot_order_and_flags() {
        let registry = BodyRegistry::new(
            Body::controlled(Vec2::new(1.0, 2.0), 50.0),
            vec![
                Body::ambient(Vec2::new(3.0, 4.0), 60.0),
                Body::ambient(Vec2::new(5.0, 6.0), 70.0),
            ],
        );

        let circles = snapshot(&registry);
        assert_eq!(circles.len(), 3);
        assert_eq!(circles[0].center, [1.0, 2.0]);
        assert!(circles[0].is_controlled());
        assert_eq!(circles[2].radius, 70.0);
        assert!(!circles[2].is_controlled());
    }

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 16);

        let registry = BodyRegistry::new(Body::controlled(Vec2::ZERO, 50.0), vec![]);
        let circles = snapshot(&registry);
        assert_eq!(as_bytes(&circles).len(), 16);
    }
}
