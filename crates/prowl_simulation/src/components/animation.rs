//! AnimatorSignals: контракт с внешним animation player
//!
//! ECS → animator: bool параметры и one-shot triggers.
//! Animator → ECS: текущее state name, normalized time, is_in_transition.
//!
//! Trigger остаётся pending пока animator его не заберёт (`take_triggers`),
//! как trigger параметр в state machine аниматора.

use std::collections::HashMap;

use bevy::prelude::*;

/// Bool параметр "идёт"
pub const WALK_PARAM: &str = "Walk";

/// Trigger атаки (enemy и player weapon)
pub const ATTACK_TRIGGER: &str = "Attack";

/// Animator state, окончания которого ждёт enemy attack gate
pub const ENEMY_ATTACK_STATE: &str = "Enemy Attack";

/// Normalized time, начиная с которого клип считается доигранным
pub const ANIMATION_COMPLETE_THRESHOLD: f32 = 0.95;

#[derive(Component, Debug, Clone, Default)]
pub struct AnimatorSignals {
    bools: HashMap<String, bool>,
    pending_triggers: Vec<String>,
    /// Сколько раз trigger выставлялся за всю жизнь (diagnostics)
    trigger_counts: HashMap<String, u32>,

    // === Отчёт animator ===
    current_state: String,
    normalized_time: f32,
    in_transition: bool,
}

impl AnimatorSignals {
    pub fn set_bool(&mut self, name: &str, value: bool) {
        self.bools.insert(name.to_string(), value);
    }

    pub fn get_bool(&self, name: &str) -> bool {
        self.bools.get(name).copied().unwrap_or(false)
    }

    pub fn trigger(&mut self, name: &str) {
        if !self.is_trigger_pending(name) {
            self.pending_triggers.push(name.to_string());
        }
        *self.trigger_counts.entry(name.to_string()).or_insert(0) += 1;
    }

    pub fn is_trigger_pending(&self, name: &str) -> bool {
        self.pending_triggers.iter().any(|t| t == name)
    }

    pub fn trigger_count(&self, name: &str) -> u32 {
        self.trigger_counts.get(name).copied().unwrap_or(0)
    }

    /// Animator: забрать pending triggers (каждый срабатывает один раз)
    pub fn take_triggers(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending_triggers)
    }

    /// Animator: опубликовать текущее состояние
    pub fn report_state(&mut self, state: &str, normalized_time: f32, in_transition: bool) {
        if self.current_state != state {
            self.current_state = state.to_string();
        }
        self.normalized_time = normalized_time;
        self.in_transition = in_transition;
    }

    pub fn current_state_name(&self) -> &str {
        &self.current_state
    }

    pub fn normalized_time(&self) -> f32 {
        self.normalized_time
    }

    pub fn is_in_transition(&self) -> bool {
        self.in_transition
    }

    /// Клип `state` доигран: trigger забран, state активен, не в transition,
    /// normalized time ≥ `ANIMATION_COMPLETE_THRESHOLD`
    pub fn is_state_finished(&self, state: &str, trigger: &str) -> bool {
        !self.is_trigger_pending(trigger)
            && !self.in_transition
            && self.current_state == state
            && self.normalized_time >= ANIMATION_COMPLETE_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_pending_until_taken() {
        let mut signals = AnimatorSignals::default();
        signals.trigger(ATTACK_TRIGGER);
        signals.trigger(ATTACK_TRIGGER);

        // Повторный trigger не дублирует pending, но считается
        assert_eq!(signals.take_triggers(), vec![ATTACK_TRIGGER.to_string()]);
        assert_eq!(signals.trigger_count(ATTACK_TRIGGER), 2);
        assert!(!signals.is_trigger_pending(ATTACK_TRIGGER));
    }

    #[test]
    fn test_state_finished_requires_all_conditions() {
        let mut signals = AnimatorSignals::default();

        signals.report_state(ENEMY_ATTACK_STATE, 0.96, true);
        assert!(!signals.is_state_finished(ENEMY_ATTACK_STATE, ATTACK_TRIGGER));

        signals.report_state(ENEMY_ATTACK_STATE, 0.5, false);
        assert!(!signals.is_state_finished(ENEMY_ATTACK_STATE, ATTACK_TRIGGER));

        signals.report_state("Idle", 1.0, false);
        assert!(!signals.is_state_finished(ENEMY_ATTACK_STATE, ATTACK_TRIGGER));

        signals.report_state(ENEMY_ATTACK_STATE, 0.95, false);
        assert!(signals.is_state_finished(ENEMY_ATTACK_STATE, ATTACK_TRIGGER));

        signals.trigger(ATTACK_TRIGGER);
        assert!(!signals.is_state_finished(ENEMY_ATTACK_STATE, ATTACK_TRIGGER));
    }

    #[test]
    fn test_bools_default_false() {
        let mut signals = AnimatorSignals::default();
        assert!(!signals.get_bool(WALK_PARAM));
        signals.set_bool(WALK_PARAM, true);
        assert!(signals.get_bool(WALK_PARAM));
    }
}
