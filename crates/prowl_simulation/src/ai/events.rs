//! AI Events: наблюдаемость state machine
//!
//! Симуляция не требует подписчиков: события нужны debug overlay, звукам и тестам.

use bevy::prelude::*;

use super::AgentState;

/// Классификация перевела агента в другое состояние
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct AgentStateChanged {
    pub agent: Entity,
    pub from: AgentState,
    pub to: AgentState,
}

/// Search выбрал новую patrol точку
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PatrolGoalSampled {
    pub agent: Entity,
    /// Позиция агента в момент сэмпла
    pub origin: Vec3,
    /// Точка на navigable surface
    pub goal: Vec3,
}
