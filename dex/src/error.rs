//! Data-provider error types

use thiserror::Error;

/// Errors surfaced when resolving combatant or move data.
///
/// Transient failures are retried internally before `Unavailable` is
/// returned. The battle engine never sees these errors; callers resolve
/// all definitions before constructing a battle.
#[derive(Error, Debug)]
pub enum DexError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Data source unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed response: {0}")]
    Decode(String),
}
