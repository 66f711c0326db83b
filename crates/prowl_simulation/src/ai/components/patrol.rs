//! Patrol компоненты: текущая точка патруля и пауза на ней

use bevy::prelude::*;

/// Текущая patrol точка агента (Search state)
///
/// `point == None` → на следующем Search тике сэмплируем новую.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PatrolGoal {
    pub point: Option<Vec3>,
    /// Подряд неудачных сэмплов (surface sampler не нашёл точку)
    pub failed_samples: u32,
}

impl PatrolGoal {
    pub fn clear(&mut self) {
        self.point = None;
    }
}

/// Пауза на достигнутой patrol точке (отложенное продолжение Search)
///
/// Удаление компонента = отмена. Despawn агента отменяет автоматически.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PatrolWait {
    /// Осталось ждать (секунды)
    pub remaining: f32,
}

impl PatrolWait {
    pub fn new(duration: f32) -> Self {
        Self {
            remaining: duration,
        }
    }

    /// Продвинуть таймер; true когда пауза закончилась
    pub fn tick(&mut self, delta: f32) -> bool {
        self.remaining = (self.remaining - delta).max(0.0);
        self.remaining <= 0.0
    }
}
