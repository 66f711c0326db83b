//! AI systems (strategic layer logic)

pub mod behaviour;
pub mod fsm;

// Re-export all systems
pub use behaviour::*;
pub use fsm::*;
