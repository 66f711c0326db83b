//! AI components

pub mod patrol;
pub mod state;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod state_tests;

// Re-export all components
pub use patrol::*;
pub use state::*;
