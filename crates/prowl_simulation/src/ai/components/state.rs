//! AgentState + чистая классификация по дистанции

use bevy::prelude::*;

/// Поведенческое состояние агента
///
/// Классификация пересчитывается каждый тик без hysteresis: на границе
/// attack_range агент может мигать Chase ↔ Attack. Это ожидаемое поведение.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
#[reflect(Component)]
pub enum AgentState {
    /// Инертное состояние. Классификация сюда не ведёт, только `AgentDisabled`
    Idle,

    /// Цель далеко: патрулируем случайные точки
    #[default]
    Search,

    /// Цель в chase_range: бежим к ней
    Chase,

    /// Цель в attack_range: стоим, разворачиваемся, атакуем через ActionGate
    Attack,
}

impl AgentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentState::Idle => "Idle",
            AgentState::Search => "Search",
            AgentState::Chase => "Chase",
            AgentState::Attack => "Attack",
        }
    }
}

/// Радиусы классификации. Инвариант: `attack <= chase`
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Ranges {
    pub attack: f32,
    pub chase: f32,
}

/// Классификация дистанции до цели
///
/// - `distance <= attack` → Attack
/// - `attack < distance <= chase` → Chase
/// - `distance > chase` → Search
pub fn classify(distance: f32, ranges: Ranges) -> AgentState {
    if distance <= ranges.attack {
        AgentState::Attack
    } else if distance <= ranges.chase {
        AgentState::Chase
    } else {
        AgentState::Search
    }
}
