//! Combatant definitions and per-battle mutable state

use super::element::Element;
use super::moves::Move;
use super::stats::{BaseStats, Stat, StatStages};
use super::status::{ActiveAilment, Ailment};

/// Immutable description of a combatant, as resolved by the data provider
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantDefinition {
    pub name: String,
    /// 1-2 elemental types
    pub elements: Vec<Element>,
    pub base_stats: BaseStats,
    /// Ability names; informational only, no battle mechanics attached
    pub abilities: Vec<String>,
    pub moves: Vec<Move>,
}

/// Mutable battle state for one side.
///
/// Owned exclusively by one battle; built from a definition plus a level
/// and discarded when the battle produces its result.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantState {
    definition: CombatantDefinition,
    level: u8,
    pub hp: u16,
    pub max_hp: u16,
    pub ailment: Option<ActiveAilment>,
    pub stages: StatStages,
    /// Set when the opponent's move made this combatant flinch; cleared
    /// when the flinch consumes the action or the turn ends
    pub flinched: bool,
}

impl CombatantState {
    /// Build battle state from a definition at the given level
    pub fn new(definition: CombatantDefinition, level: u8) -> Self {
        let max_hp = definition.base_stats.scaled_hp(level);
        Self {
            definition,
            level,
            hp: max_hp,
            max_hp,
            ailment: None,
            stages: StatStages::new(),
            flinched: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn elements(&self) -> &[Element] {
        &self.definition.elements
    }

    pub fn moves(&self) -> &[Move] {
        &self.definition.moves
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    /// Level-scaled stat with the stage multiplier applied.
    ///
    /// Burn's attack penalty and paralysis' speed penalty are applied where
    /// those stats are consumed (damage calculation and initiative), not here.
    pub fn effective_stat(&self, stat: Stat) -> u32 {
        let scaled = self.definition.base_stats.scaled(stat, self.level) as f64;
        let boosted = scaled * StatStages::multiplier(self.stages.get(stat));
        (boosted as u32).max(1)
    }

    /// Effective speed for initiative, halved under paralysis
    pub fn initiative_speed(&self) -> u32 {
        let speed = self.effective_stat(Stat::Speed);
        if self.has_ailment(Ailment::Paralysis) {
            (speed / 2).max(1)
        } else {
            speed
        }
    }

    pub fn has_ailment(&self, kind: Ailment) -> bool {
        self.ailment.map(|a| a.kind) == Some(kind)
    }

    /// Reduce HP, clamping at 0. Returns the damage actually taken.
    pub fn take_damage(&mut self, amount: u16) -> u16 {
        let taken = amount.min(self.hp);
        self.hp -= taken;
        taken
    }

    /// Restore HP, clamping at max. Returns the amount actually healed.
    pub fn heal(&mut self, amount: u16) -> u16 {
        let healed = amount.min(self.max_hp - self.hp);
        self.hp += healed;
        healed
    }
}
