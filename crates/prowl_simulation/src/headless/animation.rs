//! Clip animator (headless animation signal sink)
//!
//! Каждый trigger запускает свой clip: transition фиксированной длины, потом
//! normalized time растёт до 1.0 и там замирает (clips не зацикленные).

use std::collections::HashMap;

use bevy::prelude::*;

use crate::components::{AnimatorSignals, ATTACK_TRIGGER, ENEMY_ATTACK_STATE};

/// Clip, который запускается trigger
#[derive(Debug, Clone, PartialEq)]
pub struct ClipSpec {
    pub state: String,
    /// Длина клипа (секунды)
    pub length: f32,
}

#[derive(Component, Debug, Clone)]
pub struct HeadlessAnimator {
    clips: HashMap<String, ClipSpec>,
    transition_duration: f32,

    current_state: String,
    clip_length: f32,
    elapsed: f32,
    transition_remaining: f32,
}

impl HeadlessAnimator {
    pub fn new(idle_state: impl Into<String>, transition_duration: f32) -> Self {
        Self {
            clips: HashMap::new(),
            transition_duration,
            current_state: idle_state.into(),
            clip_length: 1.0,
            elapsed: 0.0,
            transition_remaining: 0.0,
        }
    }

    pub fn with_clip(mut self, trigger: impl Into<String>, state: impl Into<String>, length: f32) -> Self {
        self.clips.insert(
            trigger.into(),
            ClipSpec {
                state: state.into(),
                length,
            },
        );
        self
    }

    /// Enemy rig: "Attack" → "Enemy Attack"
    pub fn enemy(attack_clip_length: f32) -> Self {
        Self::new("Idle", 0.1).with_clip(ATTACK_TRIGGER, ENEMY_ATTACK_STATE, attack_clip_length)
    }

    /// First-person руки игрока
    pub fn player_hands() -> Self {
        Self::new("Hands Idle", 0.05).with_clip(ATTACK_TRIGGER, "Hands Swing", 0.3)
    }

    pub fn current_state(&self) -> &str {
        &self.current_state
    }

    fn start_clip(&mut self, clip: ClipSpec) {
        self.current_state = clip.state;
        self.clip_length = clip.length.max(f32::EPSILON);
        self.elapsed = 0.0;
        self.transition_remaining = self.transition_duration;
    }

    fn advance(&mut self, delta: f32) {
        self.elapsed = (self.elapsed + delta).min(self.clip_length);
        self.transition_remaining = (self.transition_remaining - delta).max(0.0);
    }

    fn normalized_time(&self) -> f32 {
        (self.elapsed / self.clip_length).clamp(0.0, 1.0)
    }
}

/// Система: забрать triggers, проиграть clips, опубликовать состояние
pub fn drive_headless_animators(
    mut animators: Query<(Entity, &mut HeadlessAnimator, &mut AnimatorSignals)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut animator, mut signals) in animators.iter_mut() {
        for trigger in signals.take_triggers() {
            match animator.clips.get(&trigger).cloned() {
                Some(clip) => animator.start_clip(clip),
                None => crate::log(&format!("{:?}: animator has no clip for trigger '{}'", entity, trigger)),
            }
        }

        animator.advance(delta);

        let in_transition = animator.transition_remaining > 0.0;
        let normalized = animator.normalized_time();
        signals.report_state(&animator.current_state, normalized, in_transition);
    }
}
