//! Mapping raw API payloads into the engine's closed domain types.
//!
//! The engine dispatches on a fixed set of effect variants; this module is
//! the one place that turns the API's loose move metadata into that set.

use rumble_engine::{
    Ailment, BaseStats, Category, CombatantDefinition, Effect, EffectTarget, Element, Move, Stat,
};

use crate::api::{MoveData, PokemonData};
use crate::error::DexError;

/// Power assigned to damaging moves the API reports with null power
const DEFAULT_POWER: u16 = 40;

/// Build a combatant definition from a pokemon payload plus its resolved moves
pub fn combatant_from_api(
    data: &PokemonData,
    moves: Vec<Move>,
) -> Result<CombatantDefinition, DexError> {
    let mut base = BaseStats::default();
    for slot in &data.stats {
        let value = slot.base_stat;
        match slot.stat.name.as_str() {
            "hp" => base.hp = value,
            "attack" => base.attack = value,
            "defense" => base.defense = value,
            "special-attack" => base.special_attack = value,
            "special-defense" => base.special_defense = value,
            "speed" => base.speed = value,
            other => {
                tracing::debug!(stat = other, pokemon = %data.name, "ignoring unknown stat");
            }
        }
    }

    let elements: Vec<Element> = data
        .types
        .iter()
        .filter_map(|slot| Element::from_name(&slot.kind.name))
        .collect();
    if elements.is_empty() {
        return Err(DexError::Decode(format!(
            "{} has no recognizable type",
            data.name
        )));
    }

    Ok(CombatantDefinition {
        name: data.name.clone(),
        elements,
        base_stats: base,
        abilities: data.abilities.iter().map(|a| a.ability.name.clone()).collect(),
        moves,
    })
}

/// Classify a move payload into the engine's move type.
///
/// Returns `Decode` when the element or damage class is unrecognizable;
/// the resolver skips such moves rather than failing the whole combatant.
pub fn move_from_api(data: &MoveData) -> Result<Move, DexError> {
    let element = Element::from_name(&data.kind.name)
        .ok_or_else(|| DexError::Decode(format!("{}: unknown type {}", data.name, data.kind.name)))?;
    let category = Category::from_name(&data.damage_class.name).ok_or_else(|| {
        DexError::Decode(format!(
            "{}: unknown damage class {}",
            data.name, data.damage_class.name
        ))
    })?;

    // Damaging moves with null power get a floor value (the API leaves
    // power null for variable-power moves)
    let power = match category {
        Category::Status => None,
        _ => Some(data.power.unwrap_or(DEFAULT_POWER)),
    };

    let mut effects = Vec::new();
    let meta = data.meta.clone().unwrap_or_default();

    if let Some(ailment) = meta.ailment.as_ref().and_then(|a| Ailment::from_name(&a.name)) {
        // Status moves report chance 0 for "always"; damaging moves carry
        // it in effect_chance
        let chance = match meta.ailment_chance {
            0 => data.effect_chance.unwrap_or(100),
            c => c,
        };
        effects.push(Effect::Inflict { ailment, chance });
    }

    for entry in &data.stat_changes {
        let Some(stat) = Stat::from_name(&entry.stat.name) else {
            tracing::debug!(move_name = %data.name, stat = %entry.stat.name, "ignoring unmodelable stat change");
            continue;
        };
        // Raises target the user (Swords Dance), drops target the opponent
        // (Growl, Psychic's defense drop)
        let target = if entry.change > 0 {
            EffectTarget::User
        } else {
            EffectTarget::Opponent
        };
        effects.push(Effect::StatChange {
            stat,
            stages: entry.change,
            target,
        });
    }

    if let (Some(min), Some(max)) = (meta.min_hits, meta.max_hits)
        && max > 1
    {
        effects.push(Effect::MultiHit { min, max });
    }

    if meta.healing > 0 {
        effects.push(Effect::Recovery {
            fraction: meta.healing as f32 / 100.0,
        });
    }
    match meta.drain {
        d if d > 0 => effects.push(Effect::Drain {
            fraction: d as f32 / 100.0,
        }),
        d if d < 0 => effects.push(Effect::Recoil {
            fraction: -(d as f32) / 100.0,
        }),
        _ => {}
    }
    if meta.flinch_chance > 0 {
        effects.push(Effect::Flinch {
            chance: meta.flinch_chance,
        });
    }

    Ok(Move {
        name: data.name.clone(),
        element,
        category,
        power,
        accuracy: data.accuracy,
        effects,
    })
}
