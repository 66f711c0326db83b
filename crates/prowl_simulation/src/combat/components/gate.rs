//! ActionGate: не больше одного in-flight timed action на актора
//!
//! # Phases
//!
//! ```text
//! Ready --request--> Cooldown(interval) --elapsed--> Ready
//!                                          \
//!                      (completion_state)   --> re-trigger → AwaitingAnimation
//!                                                              |
//!                    animator: state active, !transition, t ≥ 0.95
//!                                                              v
//!                                                            Ready
//! ```
//!
//! Ожидание: это фаза, которую двигает `tick_action_gates` на следующих тиках.
//! Tick loop никогда не блокируется; отмена = `cancel()`.

use bevy::prelude::*;

use crate::components::{AnimatorSignals, ATTACK_TRIGGER, ENEMY_ATTACK_STATE};

/// Фаза gate
#[derive(Debug, Clone, PartialEq, Reflect)]
pub enum GatePhase {
    /// Ничего не выполняется, request примет новое действие
    Ready,
    /// Минимальный интервал ещё не истёк
    Cooldown { remaining: f32 },
    /// Интервал истёк, ждём окончания клипа `completion_state`
    AwaitingAnimation,
}

/// Результат `ActionGate::request`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Действие запущено, trigger выставлен
    Started,
    /// Предыдущее действие ещё in-flight: request проигнорирован
    AlreadyInFlight,
}

/// Что произошло за тик gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateTick {
    Idle,
    Waiting,
    /// Интервал истёк, trigger выставлен повторно, ждём animator
    Retriggered,
    /// In-flight снят в этом тике
    Completed,
}

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ActionGate {
    /// Минимальный интервал между действиями (секунды)
    pub interval: f32,
    /// Animator trigger действия
    pub trigger: String,
    /// Если задан: после интервала ждём окончания этого animator state
    pub completion_state: Option<String>,
    phase: GatePhase,
}

impl ActionGate {
    /// Single-phase gate: trigger → interval → ready
    pub fn single_phase(interval: f32, trigger: impl Into<String>) -> Self {
        Self {
            interval,
            trigger: trigger.into(),
            completion_state: None,
            phase: GatePhase::Ready,
        }
    }

    /// Gate, который после интервала ждёт окончания animator state
    pub fn with_completion(interval: f32, trigger: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            completion_state: Some(state.into()),
            ..Self::single_phase(interval, trigger)
        }
    }

    /// Melee атака enemy: "Attack" trigger + ожидание "Enemy Attack"
    pub fn enemy_melee(attack_rate: f32) -> Self {
        Self::with_completion(attack_rate, ATTACK_TRIGGER, ENEMY_ATTACK_STATE)
    }

    /// Атака оружием игрока: interval берётся из оружия при каждом request
    pub fn player_weapon() -> Self {
        Self::single_phase(0.0, ATTACK_TRIGGER)
    }

    pub fn phase(&self) -> &GatePhase {
        &self.phase
    }

    pub fn is_in_flight(&self) -> bool {
        self.phase != GatePhase::Ready
    }

    /// Запросить действие с `self.interval`
    pub fn request(&mut self, signals: &mut AnimatorSignals) -> RequestOutcome {
        self.request_with_interval(self.interval, signals)
    }

    /// Запросить действие с явным интервалом (rate текущего оружия)
    pub fn request_with_interval(&mut self, interval: f32, signals: &mut AnimatorSignals) -> RequestOutcome {
        if self.is_in_flight() {
            return RequestOutcome::AlreadyInFlight;
        }

        signals.trigger(&self.trigger);
        self.phase = GatePhase::Cooldown {
            remaining: interval.max(0.0),
        };
        RequestOutcome::Started
    }

    /// Продвинуть gate на `delta` секунд
    pub fn tick(&mut self, delta: f32, signals: &mut AnimatorSignals) -> GateTick {
        match &mut self.phase {
            GatePhase::Ready => GateTick::Idle,

            GatePhase::Cooldown { remaining } => {
                *remaining -= delta;
                if *remaining > 0.0 {
                    return GateTick::Waiting;
                }

                match &self.completion_state {
                    Some(_) => {
                        signals.trigger(&self.trigger);
                        self.phase = GatePhase::AwaitingAnimation;
                        GateTick::Retriggered
                    }
                    None => {
                        self.phase = GatePhase::Ready;
                        GateTick::Completed
                    }
                }
            }

            GatePhase::AwaitingAnimation => {
                let finished = self
                    .completion_state
                    .as_deref()
                    .map_or(true, |state| signals.is_state_finished(state, &self.trigger));

                if finished {
                    self.phase = GatePhase::Ready;
                    GateTick::Completed
                } else {
                    GateTick::Waiting
                }
            }
        }
    }

    /// Отменить in-flight действие (disable / despawn владельца)
    pub fn cancel(&mut self) {
        self.phase = GatePhase::Ready;
    }
}
