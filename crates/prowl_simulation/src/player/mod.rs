//! Player: цель для AI + атака оружием по input
//!
//! Locomotion/camera живут в engine layer; здесь только то, что влияет на
//! симуляцию: позиция (читают агенты) и attack gate оружия.

use bevy::prelude::*;

pub mod input;

pub use input::{player_attack_input, PlayerInput};

use crate::combat::{ActionGate, EquipWeaponIntent, Weapon, WeaponHolder};
use crate::components::AnimatorSignals;
use crate::SimulationSet;

/// Marker component для player-controlled entity
///
/// Акторы С этим компонентом получают команды от player input systems
/// и служат целью для `acquire_player_target`.
///
/// # Single-player
/// Агенты привязываются к Player только если он ровно один.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Transform, PlayerInput, WeaponHolder, AnimatorSignals)]
pub struct Player;

/// Spawn игрока
///
/// Начальное оружие проходит обычный equip путь (`EquipWeaponIntent`),
/// поэтому его visual спавнится в том же тике.
pub fn spawn_player(commands: &mut Commands, position: Vec3, weapon: Option<Weapon>) -> Entity {
    let entity = commands
        .spawn((
            Player,
            Transform::from_translation(position),
            ActionGate::player_weapon(),
        ))
        .id();

    if let Some(weapon) = weapon {
        commands.send_event(EquipWeaponIntent { entity, weapon });
    }

    crate::log_info(&format!("🧍 Player spawned at {:?}", position));
    entity
}

/// Player Plugin
///
/// player_attack_input выполняется в Input, до AI и combat.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, player_attack_input.in_set(SimulationSet::Input));
    }
}
