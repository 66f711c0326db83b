//! Patrol goal sampling
//!
//! Случайная точка внутри сферы `patrol_radius` вокруг агента → проекция на
//! ближайшую navigable точку через внешний `SurfaceSampler`.
//! Неудача не фатальна: Search повторит попытку на следующем тике.

use bevy::prelude::*;
use rand::Rng;

/// Внешний сервис: ближайшая точка navigable surface
///
/// Реализация ищет в пределах `radius` от `center`; `None` если там нет
/// проходимой поверхности.
pub trait SurfaceSampler: Send + Sync {
    fn sample_point(&self, center: Vec3, radius: f32) -> Option<Vec3>;
}

/// Resource: активный surface sampler (engine navmesh или headless)
#[derive(Resource)]
pub struct NavSurface(pub Box<dyn SurfaceSampler>);

impl NavSurface {
    pub fn new(sampler: impl SurfaceSampler + 'static) -> Self {
        Self(Box::new(sampler))
    }
}

/// Равномерная точка внутри шара радиуса `radius` (rejection sampling)
pub fn random_point_in_sphere(rng: &mut impl Rng, radius: f32) -> Vec3 {
    loop {
        let candidate = Vec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );

        if candidate.length_squared() <= 1.0 {
            return candidate * radius;
        }
    }
}

/// Одна попытка выбрать patrol точку вокруг `origin`
pub fn sample_patrol_goal(
    sampler: &dyn SurfaceSampler,
    rng: &mut impl Rng,
    origin: Vec3,
    radius: f32,
) -> Option<Vec3> {
    let seed_point = origin + random_point_in_sphere(rng, radius);
    sampler.sample_point(seed_point, radius)
}
