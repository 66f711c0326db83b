//! Combat events

use bevy::prelude::*;

use super::Weapon;

/// Event: ActionGate принял request (trigger выставлен)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ActionStarted {
    pub actor: Entity,
    pub trigger: String,
}

/// Event: in-flight action снят (интервал/анимация завершены)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ActionCompleted {
    pub actor: Entity,
}

/// Intent: взять оружие (заменяет текущее)
#[derive(Event, Debug, Clone)]
pub struct EquipWeaponIntent {
    pub entity: Entity,
    pub weapon: Weapon,
}

/// Event: старое оружие выброшено при swap (drop hook)
#[derive(Event, Debug, Clone)]
pub struct WeaponDropped {
    pub entity: Entity,
    pub weapon: Weapon,
}

/// Event: visual нового оружия заспавнен на attachment point
#[derive(Event, Debug, Clone)]
pub struct WeaponSpawned {
    pub entity: Entity,
    pub weapon: Weapon,
    pub attachment_point: String,
}
