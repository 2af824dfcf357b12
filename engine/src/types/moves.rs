//! Moves and their closed effect descriptors

use super::element::Element;
use super::stats::Stat;
use super::status::Ailment;

/// Damage category of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Physical,
    Special,
    Status,
}

impl Category {
    /// Parse from an API damage-class name
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "physical" => Some(Category::Physical),
            "special" => Some(Category::Special),
            "status" => Some(Category::Status),
            _ => None,
        }
    }
}

/// Which combatant an effect applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectTarget {
    User,
    Opponent,
}

/// The closed set of move effects the turn resolver dispatches on.
///
/// Anything a move does beyond raw damage is expressed through these
/// variants; there is no free-form effect text at battle time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Shift a stat stage by `stages` on the given target
    StatChange {
        stat: Stat,
        stages: i8,
        target: EffectTarget,
    },
    /// Try to inflict a major ailment on the opponent, with a percent chance
    Inflict { ailment: Ailment, chance: u8 },
    /// Strike `min..=max` times in one use
    MultiHit { min: u8, max: u8 },
    /// Restore this fraction of the user's max HP
    Recovery { fraction: f32 },
    /// Heal the user by this fraction of the damage dealt
    Drain { fraction: f32 },
    /// Hurt the user by this fraction of the damage dealt
    Recoil { fraction: f32 },
    /// Chance (percent) to make the opponent flinch this turn
    Flinch { chance: u8 },
}

/// A single known move
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub name: String,
    pub element: Element,
    pub category: Category,
    /// Base power; None for pure status moves
    pub power: Option<u16>,
    /// Percent accuracy; None never misses
    pub accuracy: Option<u8>,
    pub effects: Vec<Effect>,
}

impl Move {
    /// Whether this move deals direct damage
    pub fn is_damaging(&self) -> bool {
        self.category != Category::Status && self.power.unwrap_or(0) > 0
    }

    /// The multi-hit range, if this move strikes more than once
    pub fn multi_hit(&self) -> Option<(u8, u8)> {
        self.effects.iter().find_map(|e| match e {
            Effect::MultiHit { min, max } => Some((*min, *max)),
            _ => None,
        })
    }
}
