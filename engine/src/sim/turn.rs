//! Resolution of one full battle turn

use rand::Rng;

use crate::config::Config;
use crate::event::{BattleEvent, Side, SkipReason};
use crate::sim::damage::{compute_hit, roll_hit_count, roll_variance};
use crate::sim::status::{end_of_turn_tick, gate_action, try_inflict};
use crate::types::{CombatantState, Effect, EffectTarget, Move};

/// Split the pair into (actor, opponent) for one side
fn pair(sides: &mut [CombatantState; 2], side: Side) -> (&mut CombatantState, &mut CombatantState) {
    let [a, b] = sides;
    match side {
        Side::A => (a, b),
        Side::B => (b, a),
    }
}

fn percent_roll<R: Rng>(rng: &mut R, chance: u8) -> bool {
    chance > 0 && rng.gen_range(1..=100) <= chance as u32
}

/// Initiative: faster effective speed acts first; exact ties are a recorded
/// coin flip.
fn action_order<R: Rng>(
    sides: &[CombatantState; 2],
    rng: &mut R,
    events: &mut Vec<BattleEvent>,
) -> [Side; 2] {
    let speed_a = sides[0].initiative_speed();
    let speed_b = sides[1].initiative_speed();

    if speed_a > speed_b {
        [Side::A, Side::B]
    } else if speed_b > speed_a {
        [Side::B, Side::A]
    } else {
        let first = if rng.gen_bool(0.5) { Side::A } else { Side::B };
        events.push(BattleEvent::SpeedTie { first });
        [first, first.opponent()]
    }
}

/// Resolve one turn: ordering, both actions, then end-of-turn ticks.
///
/// Faints are checked after every HP-reducing step; a fainted combatant is
/// excluded from everything that follows in the same turn.
pub(crate) fn resolve_turn<R: Rng>(
    sides: &mut [CombatantState; 2],
    choices: [usize; 2],
    rng: &mut R,
    cfg: &Config,
    events: &mut Vec<BattleEvent>,
) {
    let order = action_order(sides, rng, events);

    for side in order {
        act(sides, side, choices[side.index()], rng, cfg, events);
    }

    for side in order {
        let state = &mut sides[side.index()];
        if state.is_fainted() {
            continue;
        }
        if let Some((ailment, damage)) = end_of_turn_tick(state, cfg) {
            events.push(BattleEvent::StatusTick {
                target: side,
                ailment,
                damage,
            });
            if state.is_fainted() {
                events.push(BattleEvent::Fainted { side });
            }
        }
    }

    // Flinch lasts for the turn it was inflicted, no longer
    sides[0].flinched = false;
    sides[1].flinched = false;
}

fn act<R: Rng>(
    sides: &mut [CombatantState; 2],
    side: Side,
    choice: usize,
    rng: &mut R,
    cfg: &Config,
    events: &mut Vec<BattleEvent>,
) {
    let (me, _) = pair(sides, side);
    if me.is_fainted() {
        return;
    }

    if me.flinched {
        me.flinched = false;
        events.push(BattleEvent::ActionSkipped {
            side,
            reason: SkipReason::Flinched,
        });
        return;
    }

    let gate = gate_action(me, rng, cfg);
    if let Some(ailment) = gate.cleared {
        events.push(BattleEvent::StatusCleared { side, ailment });
    }
    if let Some(reason) = gate.skip {
        events.push(BattleEvent::ActionSkipped { side, reason });
        return;
    }

    let mv = me.moves()[choice].clone();
    events.push(BattleEvent::MoveUsed {
        side,
        name: mv.name.clone(),
    });

    if let Some(accuracy) = mv.accuracy
        && !percent_roll(rng, accuracy)
    {
        events.push(BattleEvent::Miss {
            side,
            name: mv.name.clone(),
        });
        return;
    }

    if mv.is_damaging() {
        resolve_damaging(sides, side, &mv, rng, cfg, events);
    } else {
        resolve_effects(sides, side, &mv.effects, 0, rng, cfg, events);
    }
}

fn resolve_damaging<R: Rng>(
    sides: &mut [CombatantState; 2],
    side: Side,
    mv: &Move,
    rng: &mut R,
    cfg: &Config,
    events: &mut Vec<BattleEvent>,
) {
    let (me, them) = pair(sides, side);

    let effectiveness = mv.element.effectiveness_against(them.elements());
    if effectiveness == 0.0 {
        events.push(BattleEvent::Immune {
            target: side.opponent(),
        });
        return;
    }

    if me.elements().contains(&mv.element) {
        events.push(BattleEvent::StabApplied { side });
    }
    if effectiveness != 1.0 {
        events.push(BattleEvent::EffectivenessNote {
            multiplier: effectiveness,
        });
    }

    let hits = match mv.multi_hit() {
        Some((min, max)) => roll_hit_count(rng, min, max),
        None => 1,
    };

    let mut total_dealt: u32 = 0;
    for _ in 0..hits {
        let critical = rng.gen_bool(cfg.crit_chance);
        let variance = roll_variance(rng, cfg);
        let hit = compute_hit(me, them, mv, critical, variance);

        if hit.critical {
            events.push(BattleEvent::CriticalHit { side });
        }
        let taken = them.take_damage(hit.damage);
        total_dealt += taken as u32;
        events.push(BattleEvent::DamageDealt {
            target: side.opponent(),
            amount: taken,
            remaining_hp: them.hp,
        });

        if them.is_fainted() {
            events.push(BattleEvent::Fainted {
                side: side.opponent(),
            });
            break;
        }
    }

    resolve_effects(sides, side, &mv.effects, total_dealt, rng, cfg, events);
}

/// Dispatch a move's effects. `damage_dealt` is 0 for pure status moves.
fn resolve_effects<R: Rng>(
    sides: &mut [CombatantState; 2],
    side: Side,
    effects: &[Effect],
    damage_dealt: u32,
    rng: &mut R,
    cfg: &Config,
    events: &mut Vec<BattleEvent>,
) {
    for effect in effects {
        let (me, them) = pair(sides, side);
        match *effect {
            Effect::StatChange {
                stat,
                stages,
                target,
            } => {
                let (target_state, target_side) = match target {
                    EffectTarget::User => (me, side),
                    EffectTarget::Opponent => (them, side.opponent()),
                };
                if target_state.is_fainted() {
                    continue;
                }
                let applied = target_state.stages.apply(stat, stages);
                events.push(BattleEvent::StatChanged {
                    side: target_side,
                    stat,
                    applied,
                    stage: target_state.stages.get(stat),
                });
            }
            Effect::Inflict { ailment, chance } => {
                if percent_roll(rng, chance) && try_inflict(them, ailment, rng, cfg) {
                    events.push(BattleEvent::StatusInflicted {
                        target: side.opponent(),
                        ailment,
                    });
                }
            }
            Effect::Recovery { fraction } => {
                let amount = (me.max_hp as f32 * fraction) as u16;
                let healed = me.heal(amount.max(1));
                events.push(BattleEvent::Recovered {
                    side,
                    amount: healed,
                });
            }
            Effect::Drain { fraction } => {
                if damage_dealt == 0 {
                    continue;
                }
                let amount = ((damage_dealt as f32 * fraction) as u16).max(1);
                let healed = me.heal(amount);
                events.push(BattleEvent::Drained {
                    side,
                    amount: healed,
                });
            }
            Effect::Recoil { fraction } => {
                if damage_dealt == 0 {
                    continue;
                }
                let amount = ((damage_dealt as f32 * fraction) as u16).max(1);
                let taken = me.take_damage(amount);
                events.push(BattleEvent::RecoilHit { side, amount: taken });
                if me.is_fainted() {
                    events.push(BattleEvent::Fainted { side });
                }
            }
            Effect::Flinch { chance } => {
                if !them.is_fainted() && percent_roll(rng, chance) {
                    them.flinched = true;
                }
            }
            // Hit count is consumed by the damage phase
            Effect::MultiHit { .. } => {}
        }
    }
}
