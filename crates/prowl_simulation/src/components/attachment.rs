//! Attachment: визуальный prefab оружия в руке
//!
//! ECS только описывает, что должно висеть на attachment point.
//! Engine layer ловит `Changed<Attachment>` и пересоздаёт visual instance.

use bevy::prelude::*;

/// Attachment point оружия на first-person rig игрока
pub const WEAPON_ATTACHMENT_POINT: &str = "CameraPoint/Hands/WeaponSocket";

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Attachment {
    /// Путь к visual prefab (например "weapons/sword.prefab")
    pub prefab_path: String,

    /// Attachment point на host rig
    pub attachment_point: String,
}

impl Attachment {
    pub fn weapon(prefab_path: impl Into<String>) -> Self {
        Self {
            prefab_path: prefab_path.into(),
            attachment_point: WEAPON_ATTACHMENT_POINT.into(),
        }
    }
}
