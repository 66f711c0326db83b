//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - agent: enemy marker, AgentConfig, AgentTarget, AgentDisabled
//! - navigation: NavAgent (контракт с movement executor)
//! - animation: AnimatorSignals (контракт с animation player)
//! - attachment: визуальный prefab оружия

pub mod agent;
pub mod animation;
pub mod attachment;
pub mod navigation;

// Re-exports для удобного импорта
pub use agent::*;
pub use animation::*;
pub use attachment::*;
pub use navigation::*;
