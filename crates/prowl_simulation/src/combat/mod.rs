//! Combat module (action timing + weapons)
//!
//! ECS ответственность:
//! - ActionGate: не больше одного in-flight действия на актора
//! - WeaponHolder: текущее оружие, damage query
//! - Events: ActionStarted/ActionCompleted, WeaponDropped/WeaponSpawned
//!
//! Engine ответственность:
//! - Animator: потребляет triggers, публикует state/normalized time
//! - Visual prefab оружия по `Attachment`
//!
//! Hit detection и применение урона живут вне этого crate: здесь только
//! `WeaponHolder::damage()` / `AgentConfig::damage()`.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

// Re-export основных типов
pub use components::{ActionGate, GatePhase, GateTick, RequestOutcome, Weapon, WeaponHolder};
pub use events::{ActionCompleted, ActionStarted, EquipWeaponIntent, WeaponDropped, WeaponSpawned};
pub use systems::{process_equip_weapon, tick_action_gates};

use crate::SimulationSet;

/// Combat Plugin
///
/// Порядок выполнения в FixedUpdate:
/// 1. tick_action_gates: cooldown / ожидание анимации (Timers)
/// 2. process_equip_weapon: equip/swap intents (Combat)
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<ActionStarted>()
            .add_event::<ActionCompleted>()
            .add_event::<EquipWeaponIntent>()
            .add_event::<WeaponDropped>()
            .add_event::<WeaponSpawned>();

        app.add_systems(FixedUpdate, tick_action_gates.in_set(SimulationSet::Timers))
            .add_systems(FixedUpdate, process_equip_weapon.in_set(SimulationSet::Combat));
    }
}
