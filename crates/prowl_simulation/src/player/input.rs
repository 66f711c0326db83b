//! Player input snapshot + attack system

use bevy::prelude::*;

use super::Player;
use crate::combat::{ActionGate, ActionStarted, RequestOutcome, WeaponHolder};
use crate::components::AnimatorSignals;

/// Input snapshot за текущий тик (пишет engine layer)
///
/// Движение/камера обрабатываются снаружи, симуляция читает только
/// `attack_held`. Остальные поля нужны engine locomotion controller.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct PlayerInput {
    /// WASD / stick (x = strafe, y = forward)
    pub move_axis: Vec2,
    /// Mouse delta за тик
    pub look_delta: Vec2,
    pub attack_held: bool,
    pub jump_pressed: bool,
    pub sprint_held: bool,
}

/// Система: зажатая атака → request у weapon gate
///
/// Interval = attack_rate текущего оружия на момент request.
/// Нет оружия → нет атаки.
pub fn player_attack_input(
    mut players: Query<(Entity, &PlayerInput, &WeaponHolder, &mut ActionGate, &mut AnimatorSignals), With<Player>>,
    mut started_events: EventWriter<ActionStarted>,
) {
    for (entity, input, holder, mut gate, mut signals) in players.iter_mut() {
        if !input.attack_held {
            continue;
        }

        let Some(weapon) = holder.current() else {
            continue;
        };

        if gate.request_with_interval(weapon.attack_rate, &mut signals) == RequestOutcome::Started {
            started_events.write(ActionStarted {
                actor: entity,
                trigger: gate.trigger.clone(),
            });
            crate::log(&format!("🗡️ Player {:?} swings {} (damage {})", entity, weapon.name, weapon.damage));
        }
    }
}
