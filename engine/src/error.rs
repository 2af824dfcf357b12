//! Engine error types

use thiserror::Error;

/// Errors surfaced by the battle engine.
///
/// Validation failures happen before any turn executes; `Internal` marks a
/// programming error that would corrupt the event log if ignored.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid combatant {name}: {reason}")]
    InvalidCombatant { name: String, reason: String },

    #[error("Invalid level {level}: must be 1-100")]
    InvalidLevel { level: u8 },

    #[error("{name} has no move at index {index}")]
    UnknownMove { name: String, index: usize },

    #[error("Battle is already over")]
    BattleOver,

    #[error("Internal engine fault: {0}")]
    Internal(String),
}
