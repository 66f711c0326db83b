//! NavAgent: контракт с внешним movement executor (pathfinding + движение)
//!
//! Архитектура:
//! - AI системы пишут команды: destination, speed, stop/resume
//! - Executor (engine NavigationAgent или `headless::navigation`) читает команды,
//!   двигает Transform и отчитывается через `report_path`
//!
//! `path_pending` закрывает гонку "destination только что выставлен, path ещё не
//! посчитан": пока флаг стоит, `remaining_distance`/`has_path` устаревшие.

use bevy::prelude::*;

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct NavAgent {
    destination: Option<Vec3>,
    speed: f32,
    stopped: bool,

    // === Отчёт executor ===
    remaining_distance: f32,
    has_path: bool,
    path_pending: bool,
}

impl Default for NavAgent {
    fn default() -> Self {
        Self {
            destination: None,
            speed: 2.0,
            stopped: true,
            remaining_distance: 0.0,
            has_path: false,
            path_pending: false,
        }
    }
}

impl NavAgent {
    /// Выставить destination; повторный вызов с той же точкой ничего не меняет
    pub fn set_destination(&mut self, point: Vec3) {
        if self.destination != Some(point) {
            self.destination = Some(point);
            self.path_pending = true;
        }
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn resume(&mut self) {
        self.stopped = false;
    }

    /// Сбросить destination и path целиком (disable / смена поведения)
    pub fn clear(&mut self) {
        self.destination = None;
        self.stopped = true;
        self.remaining_distance = 0.0;
        self.has_path = false;
        self.path_pending = false;
    }

    pub fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn remaining_distance(&self) -> f32 {
        self.remaining_distance
    }

    pub fn has_path(&self) -> bool {
        self.has_path
    }

    pub fn path_pending(&self) -> bool {
        self.path_pending
    }

    /// Executor: path посчитан (или признан невозможным)
    pub fn report_path(&mut self, remaining_distance: f32, has_path: bool) {
        self.remaining_distance = remaining_distance;
        self.has_path = has_path;
        self.path_pending = false;
    }
}
