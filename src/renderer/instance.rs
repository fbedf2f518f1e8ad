//! Per-ball draw data

use bytemuck::{Pod, Zeroable};

use crate::sim::Body;

/// One filled circle, laid out for direct upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    _pad: f32,
}

impl CircleInstance {
    /// Floats per instance in `as_floats`
    pub const STRIDE: usize = 4;

    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            center: [x, y],
            radius,
            _pad: 0.0,
        }
    }

    /// Flat `[x, y, r, 0, x, y, r, 0, ...]` view of a batch
    pub fn as_floats(instances: &[CircleInstance]) -> &[f32] {
        bytemuck::cast_slice(instances)
    }
}

/// Refill `out` with one circle per body
///
/// Body positions are bounding-box corners; the circle centre is offset by the
/// radius on both axes.
pub fn extract_circles(bodies: &[Body], diameter: f32, out: &mut Vec<CircleInstance>) {
    let radius = diameter / 2.0;
    out.clear();
    out.extend(
        bodies
            .iter()
            .map(|b| CircleInstance::new(b.pos.x + radius, b.pos.y + radius, radius)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_extract_offsets_by_radius() {
        let bodies = vec![
            Body::new(Vec2::new(10.0, 20.0), 1.0).unwrap(),
            Body::new(Vec2::new(0.0, 0.0), 1.0).unwrap(),
        ];
        let mut out = vec![CircleInstance::new(9.0, 9.0, 9.0); 5];
        extract_circles(&bodies, 4.0, &mut out);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0], CircleInstance::new(12.0, 22.0, 2.0));
        assert_eq!(out[1].center, [2.0, 2.0]);
    }

    #[test]
    fn test_as_floats_layout() {
        let circles = [CircleInstance::new(1.0, 2.0, 3.0), CircleInstance::new(4.0, 5.0, 6.0)];
        let floats = CircleInstance::as_floats(&circles);
        assert_eq!(floats.len(), circles.len() * CircleInstance::STRIDE);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.0, 4.0, 5.0, 6.0, 0.0]);
    }
}
