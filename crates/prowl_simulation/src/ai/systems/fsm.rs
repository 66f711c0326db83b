//! FSM AI systems (target binding, classification, external disable).

use bevy::prelude::*;

use crate::ai::{classify, AgentState, AgentStateChanged, PatrolGoal, PatrolWait};
use crate::combat::ActionGate;
use crate::components::{AgentConfig, AgentDisabled, AgentTarget, AnimatorSignals, Enemy, NavAgent, WALK_PARAM};
use crate::player::Player;

/// Система: привязать агентов без цели к Player
///
/// Аналог "найти по тегу Player" при спавне. Despawned цель считается
/// отсутствующей, поэтому respawned Player подхватывается заново.
/// Если Player нет или их несколько, ничего не делаем.
pub fn acquire_player_target(
    mut agents: Query<&mut AgentTarget, With<Enemy>>,
    players: Query<Entity, With<Player>>,
    targets: Query<(), Without<Enemy>>,
) {
    let Ok(player) = players.single() else {
        return;
    };

    for mut target in agents.iter_mut() {
        if target.0.is_none_or(|current| !targets.contains(current)) {
            target.0 = Some(player);
            crate::log(&format!("🎯 AI: bound to player {:?}", player));
        }
    }
}

/// Система: классификация состояния по дистанции (каждый тик)
///
/// Нет hysteresis: на границе attack_range возможен flicker Chase ↔ Attack.
/// Missing target (None или despawned) → state не трогаем.
/// Целью может быть только не-Enemy entity (обычно Player).
pub fn classify_agent_states(
    mut agents: Query<(Entity, &Transform, &AgentConfig, &AgentTarget, &mut AgentState), (With<Enemy>, Without<AgentDisabled>)>,
    targets: Query<&Transform, Without<Enemy>>,
    mut changed_events: EventWriter<AgentStateChanged>,
) {
    for (entity, transform, config, target, mut state) in agents.iter_mut() {
        let Some(target_entity) = target.0 else {
            continue;
        };

        let Ok(target_transform) = targets.get(target_entity) else {
            continue;
        };

        let distance = transform.translation.distance(target_transform.translation);
        let new_state = classify(distance, config.ranges());

        if *state != new_state {
            crate::log(&format!(
                "AI: {:?} {} → {} (distance {:.2})",
                entity,
                state.as_str(),
                new_state.as_str(),
                distance
            ));
            changed_events.write(AgentStateChanged {
                agent: entity,
                from: *state,
                to: new_state,
            });
            *state = new_state;
        }
    }
}

/// Система: внешний disable → Idle
///
/// Отменяет все отложенные продолжения агента: patrol wait, in-flight action.
/// Движение останавливается, patrol goal сбрасывается.
pub fn idle_disabled_agents(
    mut commands: Commands,
    mut agents: Query<
        (
            Entity,
            &mut AgentState,
            &mut NavAgent,
            &mut AnimatorSignals,
            &mut PatrolGoal,
            Option<&mut ActionGate>,
        ),
        Added<AgentDisabled>,
    >,
    mut changed_events: EventWriter<AgentStateChanged>,
) {
    for (entity, mut state, mut nav, mut signals, mut goal, gate) in agents.iter_mut() {
        if *state != AgentState::Idle {
            changed_events.write(AgentStateChanged {
                agent: entity,
                from: *state,
                to: AgentState::Idle,
            });
            *state = AgentState::Idle;
        }

        nav.clear();
        signals.set_bool(WALK_PARAM, false);
        goal.clear();
        commands.entity(entity).remove::<PatrolWait>();

        if let Some(mut gate) = gate {
            gate.cancel();
        }

        crate::log_info(&format!("⏸️ AI: {:?} disabled → Idle (pending continuations cancelled)", entity));
    }
}

/// Система: снятие AgentDisabled → Search
///
/// Idle держится только пока висит marker. Без цели классификация state не
/// трогает, поэтому возвращаем агента в spawn default сами.
pub fn resume_enabled_agents(
    mut removed: RemovedComponents<AgentDisabled>,
    mut agents: Query<&mut AgentState, (With<Enemy>, Without<AgentDisabled>)>,
    mut changed_events: EventWriter<AgentStateChanged>,
) {
    for entity in removed.read() {
        // Despawned или marker вернули в том же тике
        let Ok(mut state) = agents.get_mut(entity) else {
            continue;
        };

        if *state == AgentState::Idle {
            changed_events.write(AgentStateChanged {
                agent: entity,
                from: AgentState::Idle,
                to: AgentState::Search,
            });
            *state = AgentState::Search;
        }

        crate::log_info(&format!("▶️ AI: {:?} enabled → {}", entity, state.as_str()));
    }
}
