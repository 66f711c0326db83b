//! Enemy agent компоненты: marker, config, target, disable

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ai::{AgentState, PatrolGoal, Ranges};
use crate::components::{AnimatorSignals, NavAgent};
use crate::error::ConfigError;

/// Enemy: актор под управлением AI state machine
///
/// Required Components дают агенту всё, что читают AI системы.
/// `ActionGate` не required: его interval зависит от `AgentConfig::attack_rate`,
/// поэтому вставляется в `spawn_enemy`.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Transform, AgentConfig, AgentState, AgentTarget, NavAgent, AnimatorSignals, PatrolGoal)]
pub struct Enemy;

/// Параметры enemy агента
///
/// Инвариант: `attack_range <= chase_range` (см. `validate`).
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct AgentConfig {
    /// Радиус преследования (метры)
    pub chase_range: f32,
    /// Радиус атаки (метры), ≤ chase_range
    pub attack_range: f32,
    /// Скорость поворота к цели (slerp factor в секунду)
    pub turn_speed: f32,
    /// Радиус случайной patrol точки вокруг агента (метры)
    pub patrol_radius: f32,
    /// Пауза на patrol точке перед выбором следующей (секунды)
    pub patrol_wait_time: f32,
    /// Скорость NavAgent в Chase (м/с)
    pub chase_speed: f32,
    /// Скорость NavAgent по пути к patrol точке (м/с)
    pub search_speed: f32,
    /// Урон одной атаки
    pub damage: u32,
    /// Минимальный интервал между атаками (секунды)
    pub attack_rate: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            chase_range: 5.0,
            attack_range: 1.5,
            turn_speed: 15.0,
            patrol_radius: 9.0,
            patrol_wait_time: 2.0,
            chase_speed: 4.0,
            search_speed: 3.0,
            damage: 2,
            attack_rate: 2.0,
        }
    }
}

impl AgentConfig {
    pub fn ranges(&self) -> Ranges {
        Ranges {
            attack: self.attack_range,
            chase: self.chase_range,
        }
    }

    /// Урон, который агент наносит при попадании
    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("chase_range", self.chase_range),
            ("attack_range", self.attack_range),
            ("turn_speed", self.turn_speed),
            ("patrol_radius", self.patrol_radius),
            ("chase_speed", self.chase_speed),
            ("search_speed", self.search_speed),
            ("attack_rate", self.attack_rate),
        ];

        for (field, value) in positive {
            // NaN тоже не проходит
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.patrol_wait_time < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "patrol_wait_time",
                value: self.patrol_wait_time,
            });
        }

        if self.attack_range > self.chase_range {
            return Err(ConfigError::AttackRangeExceedsChaseRange {
                attack: self.attack_range,
                chase: self.chase_range,
            });
        }

        Ok(())
    }
}

/// Цель агента (обычно Player)
///
/// `None` или despawned entity = missing target: AI не трогает state,
/// Chase/Attack ничего не делают.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AgentTarget(pub Option<Entity>);

/// Marker: агент отключён извне
///
/// Единственный путь в `AgentState::Idle`. Пока marker висит, классификация
/// не работает; снятие marker возвращает агента в Search (spawn default),
/// дальше обычный цикл.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct AgentDisabled;
