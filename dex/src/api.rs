//! Serde models for the slices of the PokeAPI payloads we consume

use serde::Deserialize;

/// A `{ "name": ... }` reference, which the API uses everywhere
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

/// `/pokemon/{name}` response
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonData {
    pub name: String,
    pub id: u32,
    pub stats: Vec<StatSlot>,
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u16,
    pub stat: NamedRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub entry: NamedRef,
}

/// `/move/{name}` response
#[derive(Debug, Clone, Deserialize)]
pub struct MoveData {
    pub name: String,
    #[serde(default)]
    pub power: Option<u16>,
    #[serde(default)]
    pub accuracy: Option<u8>,
    #[serde(rename = "type")]
    pub kind: NamedRef,
    pub damage_class: NamedRef,
    #[serde(default)]
    pub effect_chance: Option<u8>,
    #[serde(default)]
    pub meta: Option<MoveMeta>,
    #[serde(default)]
    pub stat_changes: Vec<StatChangeEntry>,
}

/// The `meta` block: ailments, hit counts, drain/healing, flinch
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoveMeta {
    #[serde(default)]
    pub ailment: Option<NamedRef>,
    #[serde(default)]
    pub ailment_chance: u8,
    #[serde(default)]
    pub min_hits: Option<u8>,
    #[serde(default)]
    pub max_hits: Option<u8>,
    /// Percent of damage dealt; negative values are recoil
    #[serde(default)]
    pub drain: i8,
    /// Percent of the user's max HP restored
    #[serde(default)]
    pub healing: i8,
    #[serde(default)]
    pub flinch_chance: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatChangeEntry {
    pub change: i8,
    pub stat: NamedRef,
}
