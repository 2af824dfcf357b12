//! The Dex client: fetch, cache, and retry combatant/move data

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use rumble_engine::{CombatantDefinition, Move};

use crate::api::{MoveData, PokemonData};
use crate::classify::{combatant_from_api, move_from_api};
use crate::error::DexError;

pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// How many moves a resolved combatant carries into battle
const MOVEPOOL_SIZE: usize = 4;

/// Retry policy for transient fetch failures
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: usize,
    pub initial_delay: Duration,
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(250),
            backoff_multiplier: 2.0,
        }
    }
}

/// Combatant data provider.
///
/// Successful lookups are cached for the lifetime of the Dex, so repeated
/// battles against the same roster hit the network once. Transient failures
/// are retried with backoff before surfacing as `Unavailable`; a 404 is
/// `NotFound` immediately.
pub struct Dex {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
    combatants: Mutex<HashMap<String, CombatantDefinition>>,
    moves: Mutex<HashMap<String, Move>>,
}

impl Dex {
    /// A Dex talking to the public PokeAPI
    pub fn new() -> Self {
        Self::with_base_url(POKEAPI_URL)
    }

    /// A Dex talking to a custom endpoint (mirrors, test servers)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            retry: RetryPolicy::default(),
            combatants: Mutex::new(HashMap::new()),
            moves: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Resolve a combatant definition by name.
    ///
    /// The movepool is filled with the first resolvable moves from the
    /// species' move list, in API order, so resolution is deterministic.
    pub async fn resolve(&self, name: &str) -> Result<CombatantDefinition, DexError> {
        let key = name.to_ascii_lowercase();
        if let Some(hit) = self.combatants.lock().unwrap().get(&key) {
            return Ok(hit.clone());
        }

        tracing::info!(name = %key, "fetching combatant");
        let data: PokemonData = self.get_json(&format!("{}/pokemon/{key}", self.base_url)).await?;

        let mut moves = Vec::with_capacity(MOVEPOOL_SIZE);
        for slot in &data.moves {
            if moves.len() == MOVEPOOL_SIZE {
                break;
            }
            match self.resolve_move(&slot.entry.name).await {
                Ok(mv) => moves.push(mv),
                // A single unmodelable or missing move doesn't sink the
                // combatant; transient outages do
                Err(DexError::Unavailable(reason)) => return Err(DexError::Unavailable(reason)),
                Err(err) => {
                    tracing::warn!(move_name = %slot.entry.name, error = %err, "skipping move");
                }
            }
        }
        if moves.is_empty() {
            return Err(DexError::Decode(format!("{key} has no usable moves")));
        }

        let definition = combatant_from_api(&data, moves)?;
        self.combatants
            .lock()
            .unwrap()
            .insert(key, definition.clone());
        Ok(definition)
    }

    /// Resolve a caller-chosen list of moves, failing on the first miss
    pub async fn resolve_moveset(&self, names: &[&str]) -> Result<Vec<Move>, DexError> {
        let mut moves = Vec::with_capacity(names.len());
        for name in names {
            moves.push(self.resolve_move(name).await?);
        }
        Ok(moves)
    }

    /// Resolve and classify a single move by name
    pub async fn resolve_move(&self, name: &str) -> Result<Move, DexError> {
        let key = name.to_ascii_lowercase();
        if let Some(hit) = self.moves.lock().unwrap().get(&key) {
            return Ok(hit.clone());
        }

        let data: MoveData = self.get_json(&format!("{}/move/{key}", self.base_url)).await?;
        let mv = move_from_api(&data)?;
        self.moves.lock().unwrap().insert(key, mv.clone());
        Ok(mv)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, DexError> {
        let mut delay = self.retry.initial_delay;
        let mut attempt = 1;

        loop {
            match self.try_get::<T>(url).await {
                Ok(value) => return Ok(value),
                // Missing resources don't become findable by retrying
                Err(err @ (DexError::NotFound(_) | DexError::Decode(_))) => return Err(err),
                Err(err) if attempt >= self.retry.max_attempts => return Err(err),
                Err(err) => {
                    tracing::warn!(
                        attempt,
                        max_attempts = self.retry.max_attempts,
                        url,
                        error = %err,
                        "fetch failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    delay = Duration::from_secs_f64(
                        delay.as_secs_f64() * self.retry.backoff_multiplier,
                    );
                    attempt += 1;
                }
            }
        }
    }

    async fn try_get<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, DexError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| DexError::Unavailable(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(DexError::NotFound(url.to_string()));
        }
        let response = response
            .error_for_status()
            .map_err(|e| DexError::Unavailable(e.to_string()))?;

        response
            .json::<T>()
            .await
            .map_err(|e| DexError::Decode(e.to_string()))
    }
}

impl Default for Dex {
    fn default() -> Self {
        Self::new()
    }
}
