//! Combat components

pub mod gate;
pub mod weapon;

#[cfg(test)]
mod weapon_tests;

// Re-export all components
pub use gate::*;
pub use weapon::*;
