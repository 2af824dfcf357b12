//! Deterministic turn-based battle resolution.
//!
//! This crate simulates a full battle between two combatants, turn by turn,
//! and produces an ordered event log plus a final outcome. It is pure
//! computation: no I/O, no globals, and all randomness comes from an
//! injected generator so a fixed seed replays the identical battle.
//!
//! # Overview
//!
//! ```text
//! rumble-dex (data provider: definitions from the API)
//!        │
//!        ▼
//! rumble-engine (battle resolution) ← THIS CRATE
//!        │
//!        └─> callers render the event log
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Element`] - Elemental types with the effectiveness chart
//! - [`Ailment`] - Major status conditions (Burn, Sleep, ...)
//! - [`StatStages`] - Stat stage modifiers (-6 to +6)
//! - [`Move`] / [`Effect`] - Moves with a closed set of effect descriptors
//! - [`CombatantDefinition`] / [`CombatantState`] - A combatant, immutable
//!   description vs. per-battle mutable state
//!
//! ## Simulation
//! - [`Battle`] - The controller: validates inputs, resolves turns, and
//!   yields a [`BattleResult`]
//! - [`Config`] - Probability and fraction defaults
//!
//! # Example Usage
//!
//! ```ignore
//! use rumble_engine::{Battle, Config};
//!
//! let battle = Battle::seeded(attacker, defender, Config::default(), 42)?;
//! let result = battle.run_auto()?;
//!
//! for event in &result.events {
//!     println!("{event:?}");
//! }
//! println!("outcome: {:?} after {} turns", result.outcome, result.turns);
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod sim;
pub mod types;

// Re-export the main types at crate root for convenience
pub use config::Config;
pub use error::EngineError;
pub use event::{BattleEvent, BattleResult, EndReason, Outcome, Side, SkipReason};
pub use sim::{Battle, HitOutcome, Phase, compute_hit};
pub use types::{
    Ailment, BaseStats, Category, CombatantDefinition, CombatantState, EFFECTIVENESS_CHART,
    Effect, EffectTarget, Element, Move, Stat, StatStages,
};
