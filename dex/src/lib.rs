//! Combatant data provider backed by PokeAPI.
//!
//! The battle engine only accepts fully-resolved [`CombatantDefinition`]s;
//! this crate is the collaborator that produces them. It fetches species and
//! move data over HTTP, classifies the API's loose move metadata into the
//! engine's closed effect set, caches what it has seen, and retries
//! transient failures with backoff before reporting the source unavailable.
//!
//! ```ignore
//! use rumble_dex::Dex;
//! use rumble_engine::{Battle, Config};
//!
//! let dex = Dex::new();
//! let (pikachu, onix) = tokio::try_join!(dex.resolve("pikachu"), dex.resolve("onix"))?;
//!
//! let result = Battle::seeded(pikachu, onix, Config::default(), 42)?.run_auto()?;
//! ```
//!
//! Errors split into `NotFound` (the name does not exist upstream) and
//! `Unavailable` (the source is down; already retried). Neither ever
//! crosses into the engine: resolve first, then battle.

pub mod api;
pub mod classify;
pub mod error;
pub mod resolver;

pub use classify::{combatant_from_api, move_from_api};
pub use error::DexError;
pub use resolver::{Dex, POKEAPI_URL, RetryPolicy};

// Re-export the engine types callers get back from the resolver
pub use rumble_engine::{CombatantDefinition, Move};
