//! Flat ground surface sampler

use bevy::prelude::*;

use crate::ai::SurfaceSampler;

/// Горизонтальная navigable плоскость `y = height`, опционально ограниченная
/// прямоугольником по XZ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatGround {
    pub height: f32,
    /// Половина размера площадки (x, z) вокруг начала координат
    pub half_extents: Option<Vec2>,
}

impl FlatGround {
    pub fn unbounded(height: f32) -> Self {
        Self {
            height,
            half_extents: None,
        }
    }

    pub fn bounded(height: f32, half_extents: Vec2) -> Self {
        Self {
            height,
            half_extents: Some(half_extents),
        }
    }
}

impl SurfaceSampler for FlatGround {
    /// Ближайшая точка площадки, если она в пределах `radius`
    fn sample_point(&self, center: Vec3, radius: f32) -> Option<Vec3> {
        let (x, z) = match self.half_extents {
            Some(half) => (center.x.clamp(-half.x, half.x), center.z.clamp(-half.y, half.y)),
            None => (center.x, center.z),
        };

        let nearest = Vec3::new(x, self.height, z);
        (nearest.distance(center) <= radius).then_some(nearest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_onto_plane() {
        let ground = FlatGround::unbounded(1.0);
        assert_eq!(
            ground.sample_point(Vec3::new(3.0, 2.5, -4.0), 2.0),
            Some(Vec3::new(3.0, 1.0, -4.0))
        );
    }

    #[test]
    fn test_too_far_above_plane_fails() {
        let ground = FlatGround::unbounded(0.0);
        assert_eq!(ground.sample_point(Vec3::new(0.0, 5.0, 0.0), 2.0), None);
    }

    #[test]
    fn test_bounded_clamps_to_edge() {
        let ground = FlatGround::bounded(0.0, Vec2::new(10.0, 10.0));

        assert_eq!(
            ground.sample_point(Vec3::new(11.0, 0.0, 0.0), 2.0),
            Some(Vec3::new(10.0, 0.0, 0.0))
        );
        assert_eq!(ground.sample_point(Vec3::new(15.0, 0.0, 0.0), 2.0), None);
    }
}
