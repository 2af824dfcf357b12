//! The battle event log and final result types

use crate::types::{Ailment, Stat};

/// One of the two sides of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Why a combatant's action was skipped this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkipReason {
    FullyParalyzed,
    Asleep,
    Frozen,
    Flinched,
}

/// Everything observable about a battle, in order.
///
/// The log is append-only; probabilistic outcomes (misses, failed status
/// rolls, crits) are events, never errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    TurnStart { turn: u32 },
    /// Speeds were exactly tied; the coin flip chose `first`
    SpeedTie { first: Side },
    MoveUsed { side: Side, name: String },
    Miss { side: Side, name: String },
    /// The move's element has no effect on the target
    Immune { target: Side },
    CriticalHit { side: Side },
    StabApplied { side: Side },
    /// Emitted once per move use when the multiplier is not 1.0
    EffectivenessNote { multiplier: f32 },
    DamageDealt {
        target: Side,
        amount: u16,
        remaining_hp: u16,
    },
    StatusInflicted { target: Side, ailment: Ailment },
    /// End-of-turn burn/poison damage
    StatusTick {
        target: Side,
        ailment: Ailment,
        damage: u16,
    },
    StatusCleared { side: Side, ailment: Ailment },
    /// `applied` is the clamped change (0 when pinned at a boundary);
    /// `stage` is the resulting stage
    StatChanged {
        side: Side,
        stat: Stat,
        applied: i8,
        stage: i8,
    },
    Recovered { side: Side, amount: u16 },
    /// User healed by a fraction of damage dealt
    Drained { side: Side, amount: u16 },
    /// User hurt by its own move's recoil
    RecoilHit { side: Side, amount: u16 },
    ActionSkipped { side: Side, reason: SkipReason },
    Fainted { side: Side },
    BattleEnded { outcome: Outcome, reason: EndReason },
}

/// Terminal outcome of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Winner(Side),
    Draw,
}

/// What ended the battle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndReason {
    Faint,
    TurnLimit,
}

/// The single output of a completed battle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleResult {
    pub outcome: Outcome,
    pub reason: EndReason,
    /// Number of turns resolved
    pub turns: u32,
    pub events: Vec<BattleEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::A.opponent(), Side::B);
        assert_eq!(Side::B.opponent(), Side::A);
    }

    #[test]
    fn test_events_compare_equal() {
        // Determinism checks compare whole logs; equality must be structural
        let a = BattleEvent::DamageDealt {
            target: Side::B,
            amount: 24,
            remaining_hp: 76,
        };
        let b = BattleEvent::DamageDealt {
            target: Side::B,
            amount: 24,
            remaining_hp: 76,
        };
        assert_eq!(a, b);
        assert_ne!(
            a,
            BattleEvent::DamageDealt {
                target: Side::B,
                amount: 25,
                remaining_hp: 75,
            }
        );
    }
}
