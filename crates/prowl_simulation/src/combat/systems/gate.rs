//! ActionGate timer system

use bevy::prelude::*;

use crate::combat::{ActionCompleted, ActionGate, GateTick};
use crate::components::AnimatorSignals;

/// Система: продвинуть все ActionGate на fixed delta
///
/// Выполняется первой в тике (Timers), поэтому gate, запущенный на тике k,
/// начинает отсчёт с тика k+1.
pub fn tick_action_gates(
    mut gates: Query<(Entity, &mut ActionGate, &mut AnimatorSignals)>,
    time: Res<Time<Fixed>>,
    mut completed_events: EventWriter<ActionCompleted>,
) {
    let delta = time.delta_secs();

    for (entity, mut gate, mut signals) in gates.iter_mut() {
        // Ready gate не трогаем, чтобы не дёргать change detection
        if !gate.is_in_flight() {
            continue;
        }

        match gate.tick(delta, &mut signals) {
            GateTick::Completed => {
                completed_events.write(ActionCompleted { actor: entity });
            }
            GateTick::Retriggered => {
                crate::log(&format!(
                    "{:?}: '{}' re-triggered, waiting for animation to finish",
                    entity, gate.trigger
                ));
            }
            GateTick::Idle | GateTick::Waiting => {}
        }
    }
}
