//! Combat systems

pub mod gate;
pub mod weapon;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod weapon_tests;

// Re-export all systems
pub use gate::*;
pub use weapon::*;
