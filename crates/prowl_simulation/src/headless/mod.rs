//! Headless executors: engine stand-ins для тестов и demo
//!
//! В игре эти роли выполняет engine layer (navmesh agent, animator, navmesh
//! sampling). Здесь детерминированные замены, чтобы симуляция крутилась без
//! engine:
//! - `drive_nav_agents`: прямолинейное движение по NavAgent
//! - `drive_headless_animators`: clips по triggers → AnimatorSignals
//! - `FlatGround`: SurfaceSampler для плоской площадки

use bevy::prelude::*;

pub mod animation;
pub mod navigation;
pub mod surface;

pub use animation::{drive_headless_animators, ClipSpec, HeadlessAnimator};
pub use navigation::drive_nav_agents;
pub use surface::FlatGround;

use crate::ai::NavSurface;
use crate::SimulationSet;

/// Headless Plugin
///
/// Executors выполняются последними в тике (после AI и combat), так что
/// команды этого тика исполняются в этом же тике.
pub struct HeadlessPlugin {
    pub ground: FlatGround,
}

impl Default for HeadlessPlugin {
    fn default() -> Self {
        Self {
            ground: FlatGround::unbounded(0.0),
        }
    }
}

impl Plugin for HeadlessPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(NavSurface::new(self.ground)).add_systems(
            FixedUpdate,
            (drive_nav_agents, drive_headless_animators)
                .chain()
                .in_set(SimulationSet::Executors),
        );
    }
}
