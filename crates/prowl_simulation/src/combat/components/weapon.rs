//! Weapon data + WeaponHolder (что сейчас в руках у игрока)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Weapon definition (data-driven, грузится из конфигов)
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    /// Минимальный интервал между атаками (секунды)
    pub attack_rate: f32,
    pub damage: u32,
    /// Visual prefab, который спавнится в руке при equip
    pub prefab_path: String,
}

impl Weapon {
    pub fn new(name: impl Into<String>, attack_rate: f32, damage: u32, prefab_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attack_rate,
            damage,
            prefab_path: prefab_path.into(),
        }
    }

    /// Быстрый лёгкий клинок
    pub fn dagger() -> Self {
        Self::new("Dagger", 0.4, 1, "weapons/dagger.prefab")
    }

    /// Базовый меч
    pub fn sword() -> Self {
        Self::new("Sword", 0.8, 3, "weapons/sword.prefab")
    }

    /// Медленный тяжёлый топор
    pub fn axe() -> Self {
        Self::new("Axe", 1.4, 6, "weapons/axe.prefab")
    }
}

/// Текущее оружие актора (максимум одно)
///
/// Меняется только через `EquipWeaponIntent` → `process_equip_weapon`,
/// чтобы drop hook и visual spawn не разъехались с данными.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct WeaponHolder {
    current: Option<Weapon>,
}

impl WeaponHolder {
    pub fn with_weapon(weapon: Weapon) -> Self {
        Self { current: Some(weapon) }
    }

    pub fn current(&self) -> Option<&Weapon> {
        self.current.as_ref()
    }

    /// Заменить оружие, вернуть старое (для drop hook)
    pub fn equip(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.current.replace(weapon)
    }

    /// Урон текущего оружия, 0 если руки пустые
    pub fn damage(&self) -> u32 {
        self.current.as_ref().map_or(0, |w| w.damage)
    }
}
