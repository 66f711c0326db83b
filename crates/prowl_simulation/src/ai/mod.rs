//! AI decision-making module
//!
//! Distance-driven FSM для enemy агентов: Search → Chase → Attack.
//! Классификация: чистая функция `classify`, побочные эффекты живут только
//! в state handlers (ai_search / ai_chase / ai_attack).

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod orientation;
pub mod patrol;
pub mod systems;

// Re-export основных типов
pub use components::{classify, AgentState, PatrolGoal, PatrolWait, Ranges};
pub use events::{AgentStateChanged, PatrolGoalSampled};
pub use patrol::{NavSurface, SurfaceSampler};
pub use systems::ARRIVAL_EPSILON;

use crate::SimulationSet;

/// AI Plugin
///
/// Регистрирует AI системы в FixedUpdate для детерминизма.
/// Порядок выполнения:
/// 1. tick_patrol_waits: отложенные паузы патруля (Timers)
/// 2. acquire_player_target: привязка цели
/// 3. idle_disabled_agents / resume_enabled_agents: внешний disable → Idle и обратно
/// 4. classify_agent_states: дистанция → AgentState
/// 5. ai_search / ai_chase / ai_attack: state handlers
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AgentStateChanged>()
            .add_event::<PatrolGoalSampled>();

        app.add_systems(FixedUpdate, systems::tick_patrol_waits.in_set(SimulationSet::Timers));

        app.add_systems(
            FixedUpdate,
            (
                systems::acquire_player_target,
                systems::idle_disabled_agents,
                systems::resume_enabled_agents,
                systems::classify_agent_states,
                systems::ai_search,
                systems::ai_chase,
                systems::ai_attack,
            )
                .chain() // Последовательное выполнение для детерминизма
                .in_set(SimulationSet::Ai),
        );
    }
}
