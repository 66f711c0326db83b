//! State handlers: Search / Chase / Attack.
//!
//! Каждый handler выполняется каждый тик для агентов в своём состоянии и
//! идемпотентен: повторный stop/resume/set_destination безопасен. Явных
//! enter/exit callbacks нет.

use bevy::prelude::*;

use crate::ai::orientation::turn_transform_towards;
use crate::ai::patrol::{sample_patrol_goal, NavSurface};
use crate::ai::{AgentState, PatrolGoal, PatrolGoalSampled, PatrolWait};
use crate::combat::{ActionGate, ActionStarted, RequestOutcome};
use crate::components::{AgentConfig, AgentDisabled, AgentTarget, AnimatorSignals, Enemy, NavAgent, WALK_PARAM};
use crate::DeterministicRng;

/// Remaining distance, при которой patrol точка считается достигнутой
pub const ARRIVAL_EPSILON: f32 = 0.1;

/// Как часто предупреждать о подряд неудачных сэмплах (≈ раз в секунду при 60 Hz)
const SAMPLE_FAILURE_WARN_EVERY: u32 = 60;

/// Позиция цели агента, если цель существует
fn target_position(target: &AgentTarget, targets: &Query<&Transform, Without<Enemy>>) -> Option<Vec3> {
    let entity = target.0?;
    targets.get(entity).ok().map(|t| t.translation)
}

/// Бросить патруль: goal сбрасывается, отложенная пауза отменяется
fn abandon_patrol(commands: &mut Commands, entity: Entity, goal: &mut PatrolGoal, waiting: bool) {
    if goal.point.is_some() {
        goal.clear();
    }
    if waiting {
        commands.entity(entity).remove::<PatrolWait>();
    }
}

/// Система: продвинуть паузы на patrol точках
///
/// Когда пауза истекла: goal сбрасывается, Search сэмплирует новую точку
/// в этом же тике.
pub fn tick_patrol_waits(
    mut commands: Commands,
    mut waits: Query<(Entity, &mut PatrolWait, &mut PatrolGoal)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut wait, mut goal) in waits.iter_mut() {
        if wait.tick(delta) {
            goal.clear();
            commands.entity(entity).remove::<PatrolWait>();
        }
    }
}

/// Система: Search handler
///
/// - нет goal → сэмплируем точку, идём к ней на search_speed
/// - goal достигнут (или path невалиден) → стоп + PatrolWait(patrol_wait_time)
/// - во время паузы стоим, Walk = false
pub fn ai_search(
    mut commands: Commands,
    mut agents: Query<
        (
            Entity,
            &Transform,
            &AgentConfig,
            &AgentState,
            &mut PatrolGoal,
            &mut NavAgent,
            &mut AnimatorSignals,
            Option<&PatrolWait>,
        ),
        (With<Enemy>, Without<AgentDisabled>),
    >,
    surface: Option<Res<NavSurface>>,
    mut rng: ResMut<DeterministicRng>,
    mut sampled_events: EventWriter<PatrolGoalSampled>,
) {
    for (entity, transform, config, state, mut goal, mut nav, mut signals, wait) in agents.iter_mut() {
        if *state != AgentState::Search {
            continue;
        }

        // Истёкшая пауза уже сбросила goal, её удаление применится в конце тика
        if wait.is_some_and(|w| w.remaining > 0.0) {
            nav.stop();
            signals.set_bool(WALK_PARAM, false);
            continue;
        }

        let Some(point) = goal.point else {
            let Some(surface) = surface.as_ref() else {
                continue;
            };

            let origin = transform.translation;
            match sample_patrol_goal(&*surface.0, &mut rng.rng, origin, config.patrol_radius) {
                Some(point) => {
                    goal.point = Some(point);
                    goal.failed_samples = 0;

                    nav.set_destination(point);
                    nav.set_speed(config.search_speed);
                    nav.resume();
                    signals.set_bool(WALK_PARAM, true);

                    sampled_events.write(PatrolGoalSampled {
                        agent: entity,
                        origin,
                        goal: point,
                    });
                    crate::log(&format!("🚶 AI: {:?} patrol → {:?}", entity, point));
                }
                None => {
                    // Повторим на следующем тике с новой случайной точкой
                    goal.failed_samples = goal.failed_samples.saturating_add(1);
                    if goal.failed_samples % SAMPLE_FAILURE_WARN_EVERY == 0 {
                        crate::log_warning(&format!(
                            "AI: {:?} failed to sample patrol goal {} times in a row (radius {:.1})",
                            entity, goal.failed_samples, config.patrol_radius
                        ));
                    }
                }
            }
            continue;
        };

        // Destination перезаписан (например Chase): возвращаем patrol точку
        if nav.destination() != Some(point) {
            nav.set_destination(point);
            nav.set_speed(config.search_speed);
            nav.resume();
            signals.set_bool(WALK_PARAM, true);
            continue;
        }

        // Path ещё не посчитан: remaining/has_path устаревшие
        if nav.path_pending() {
            continue;
        }

        let arrived = nav.remaining_distance() <= ARRIVAL_EPSILON || !nav.has_path();
        if arrived {
            nav.stop();
            signals.set_bool(WALK_PARAM, false);
            commands.entity(entity).insert(PatrolWait::new(config.patrol_wait_time));
            crate::log(&format!(
                "AI: {:?} reached patrol goal, waiting {:.1}s",
                entity, config.patrol_wait_time
            ));
        } else {
            nav.set_speed(config.search_speed);
            nav.resume();
            signals.set_bool(WALK_PARAM, true);
        }
    }
}

/// Система: Chase handler
///
/// Destination = текущая позиция цели каждый тик, chase_speed.
pub fn ai_chase(
    mut commands: Commands,
    mut agents: Query<
        (
            Entity,
            &AgentConfig,
            &AgentState,
            &AgentTarget,
            &mut NavAgent,
            &mut AnimatorSignals,
            &mut PatrolGoal,
            Has<PatrolWait>,
        ),
        (With<Enemy>, Without<AgentDisabled>),
    >,
    targets: Query<&Transform, Without<Enemy>>,
) {
    for (entity, config, state, target, mut nav, mut signals, mut goal, waiting) in agents.iter_mut() {
        if *state != AgentState::Chase {
            continue;
        }

        let Some(target_pos) = target_position(target, &targets) else {
            continue;
        };

        abandon_patrol(&mut commands, entity, &mut goal, waiting);

        nav.set_destination(target_pos);
        nav.set_speed(config.chase_speed);
        nav.resume();
        signals.set_bool(WALK_PARAM, true);
    }
}

/// Система: Attack handler
///
/// Стоим, разворачиваемся к цели, просим атаку у ActionGate.
/// Пока предыдущая атака in-flight: request ничего не делает.
pub fn ai_attack(
    mut commands: Commands,
    mut agents: Query<
        (
            Entity,
            &AgentConfig,
            &AgentState,
            &AgentTarget,
            &mut Transform,
            &mut NavAgent,
            &mut AnimatorSignals,
            &mut PatrolGoal,
            Option<&mut ActionGate>,
            Has<PatrolWait>,
        ),
        (With<Enemy>, Without<AgentDisabled>),
    >,
    targets: Query<&Transform, Without<Enemy>>,
    time: Res<Time<Fixed>>,
    mut started_events: EventWriter<ActionStarted>,
) {
    let delta = time.delta_secs();

    for (entity, config, state, target, mut transform, mut nav, mut signals, mut goal, gate, waiting) in
        agents.iter_mut()
    {
        if *state != AgentState::Attack {
            continue;
        }

        // Missing target → остаёмся в Attack, но ничего не делаем
        let Some(target_pos) = target_position(target, &targets) else {
            continue;
        };

        abandon_patrol(&mut commands, entity, &mut goal, waiting);

        nav.stop();
        turn_transform_towards(&mut transform, target_pos, config.turn_speed, delta);
        signals.set_bool(WALK_PARAM, false);

        let Some(mut gate) = gate else {
            continue;
        };

        if gate.request(&mut signals) == RequestOutcome::Started {
            started_events.write(ActionStarted {
                actor: entity,
                trigger: gate.trigger.clone(),
            });
            crate::log(&format!("⚔️ AI: {:?} attack started (damage {})", entity, config.damage()));
        }
    }
}
