//! Damage calculation for a single hit

use rand::Rng;

use crate::config::Config;
use crate::types::{Ailment, Category, CombatantState, Move, Stat};

/// Everything the turn resolver needs to report about one computed hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitOutcome {
    pub damage: u16,
    pub stab: bool,
    pub critical: bool,
    pub effectiveness: f32,
}

/// Compute one hit of a damaging move.
///
/// `critical` and `variance` are rolled by the caller so the math itself is
/// deterministic: `floor(base * effectiveness * stab * crit * variance)`
/// with `base = ((2*level/5 + 2) * power * atk / def) / 50 + 2`.
///
/// Attack/Defense or SpecialAttack/SpecialDefense are picked by category and
/// carry their stage multipliers; a burned attacker's physical attack is
/// halved. Non-zero effectiveness never yields less than 1 damage; zero
/// effectiveness yields exactly 0.
pub fn compute_hit(
    attacker: &CombatantState,
    defender: &CombatantState,
    mv: &Move,
    critical: bool,
    variance: f64,
) -> HitOutcome {
    let effectiveness = mv.element.effectiveness_against(defender.elements());
    let stab = attacker.elements().contains(&mv.element);
    let power = mv.power.unwrap_or(0);

    if effectiveness == 0.0 || power == 0 {
        return HitOutcome {
            damage: 0,
            stab,
            critical: false,
            effectiveness,
        };
    }

    let (atk_stat, def_stat) = match mv.category {
        Category::Special => (Stat::SpecialAttack, Stat::SpecialDefense),
        _ => (Stat::Attack, Stat::Defense),
    };

    let mut attack = attacker.effective_stat(atk_stat);
    if mv.category == Category::Physical && attacker.has_ailment(Ailment::Burn) {
        attack = (attack / 2).max(1);
    }
    let defense = defender.effective_stat(def_stat).max(1);

    let level = attacker.level() as f64;
    let base = ((2.0 * level / 5.0 + 2.0) * power as f64 * attack as f64 / defense as f64) / 50.0
        + 2.0;

    let crit_mult = if critical { 1.5 } else { 1.0 };
    let stab_mult = if stab { 1.5 } else { 1.0 };
    let raw = base * effectiveness as f64 * stab_mult * crit_mult * variance;

    HitOutcome {
        damage: (raw as u16).max(1),
        stab,
        critical,
        effectiveness,
    }
}

/// Roll the per-hit damage variance from the configured band
pub fn roll_variance<R: Rng>(rng: &mut R, cfg: &Config) -> f64 {
    if cfg.variance_floor >= 1.0 {
        return 1.0;
    }
    rng.gen_range(cfg.variance_floor..=1.0)
}

/// Roll how many times a multi-hit move strikes.
///
/// Counts in the lower half of `[min, max]` carry double weight, biasing
/// toward fewer hits.
pub fn roll_hit_count<R: Rng>(rng: &mut R, min: u8, max: u8) -> u8 {
    let min = min.max(1);
    let max = max.max(min);
    if min == max {
        return min;
    }

    let span = (max - min + 1) as u32;
    let lower = span.div_ceil(2);
    let total_weight = lower * 2 + (span - lower);
    let mut pick = rng.gen_range(0..total_weight);
    for offset in 0..span {
        let weight = if offset < lower { 2 } else { 1 };
        if pick < weight {
            return min + offset as u8;
        }
        pick -= weight;
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use crate::types::{BaseStats, CombatantDefinition, Element};

    fn combatant(name: &str, elements: Vec<Element>, base: BaseStats) -> CombatantState {
        CombatantState::new(
            CombatantDefinition {
                name: name.into(),
                elements,
                base_stats: base,
                abilities: Vec::new(),
                moves: Vec::new(),
            },
            50,
        )
    }

    fn flat_stats(value: u16) -> BaseStats {
        BaseStats {
            hp: value,
            attack: value,
            defense: value,
            special_attack: value,
            special_defense: value,
            speed: value,
        }
    }

    fn strike(power: u16, element: Element, category: Category) -> Move {
        Move {
            name: "strike".into(),
            element,
            category,
            power: Some(power),
            accuracy: Some(100),
            effects: Vec::new(),
        }
    }

    #[test]
    fn test_pinned_neutral_damage() {
        // Level 50, 100 base attack/defense both scale to 105:
        // base = (22 * 80 * 105/105) / 50 + 2 = 37.2, floored to 37
        let attacker = combatant("a", vec![Element::Fighting], flat_stats(100));
        let defender = combatant("b", vec![Element::Water], flat_stats(100));
        let mv = strike(80, Element::Normal, Category::Physical);

        let hit = compute_hit(&attacker, &defender, &mv, false, 1.0);
        assert_eq!(hit.damage, 37);
        assert!(!hit.stab);
        assert!(!hit.critical);
        assert_eq!(hit.effectiveness, 1.0);
    }

    #[test]
    fn test_stab_and_crit_multipliers() {
        let attacker = combatant("a", vec![Element::Normal], flat_stats(100));
        let defender = combatant("b", vec![Element::Water], flat_stats(100));
        let mv = strike(80, Element::Normal, Category::Physical);

        let stab = compute_hit(&attacker, &defender, &mv, false, 1.0);
        // 37.2 * 1.5 = 55.8 -> 55
        assert_eq!(stab.damage, 55);
        assert!(stab.stab);

        let crit = compute_hit(&attacker, &defender, &mv, true, 1.0);
        // 37.2 * 1.5 * 1.5 = 83.7 -> 83
        assert_eq!(crit.damage, 83);
        assert!(crit.critical);
    }

    #[test]
    fn test_immunity_deals_zero() {
        let attacker = combatant("a", vec![Element::Normal], flat_stats(100));
        let defender = combatant("b", vec![Element::Ghost], flat_stats(100));
        let mv = strike(80, Element::Normal, Category::Physical);

        let hit = compute_hit(&attacker, &defender, &mv, false, 1.0);
        assert_eq!(hit.damage, 0);
        assert_eq!(hit.effectiveness, 0.0);
    }

    #[test]
    fn test_minimum_one_damage() {
        // Pitiful power into a walled defender still chips for 1
        let attacker = combatant("a", vec![Element::Normal], flat_stats(5));
        let mut defender = combatant("b", vec![Element::Steel], flat_stats(200));
        defender.stages.apply(Stat::Defense, 6);
        let mv = strike(1, Element::Normal, Category::Physical);

        let hit = compute_hit(&attacker, &defender, &mv, false, 0.85);
        assert_eq!(hit.damage, 1);
    }

    #[test]
    fn test_burn_halves_physical_only() {
        use crate::types::ActiveAilment;

        let mut attacker = combatant("a", vec![Element::Fighting], flat_stats(100));
        let defender = combatant("b", vec![Element::Water], flat_stats(100));
        let physical = strike(80, Element::Normal, Category::Physical);
        let special = strike(80, Element::Normal, Category::Special);

        let healthy = compute_hit(&attacker, &defender, &physical, false, 1.0);
        let healthy_special = compute_hit(&attacker, &defender, &special, false, 1.0);

        attacker.ailment = Some(ActiveAilment::new(Ailment::Burn));
        let burned = compute_hit(&attacker, &defender, &physical, false, 1.0);
        let burned_special = compute_hit(&attacker, &defender, &special, false, 1.0);

        assert!(burned.damage < healthy.damage);
        assert_eq!(burned_special.damage, healthy_special.damage);
    }

    #[test]
    fn test_stage_scaling_feeds_damage() {
        let mut attacker = combatant("a", vec![Element::Fighting], flat_stats(100));
        let defender = combatant("b", vec![Element::Water], flat_stats(100));
        let mv = strike(80, Element::Normal, Category::Physical);

        let neutral = compute_hit(&attacker, &defender, &mv, false, 1.0);
        attacker.stages.apply(Stat::Attack, 2);
        let boosted = compute_hit(&attacker, &defender, &mv, false, 1.0);
        // +2 doubles the attack stat; base damage roughly doubles
        assert!(boosted.damage > neutral.damage + neutral.damage / 2);
    }

    #[test]
    fn test_hit_count_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let n = roll_hit_count(&mut rng, 2, 5);
            assert!((2..=5).contains(&n));
        }
        assert_eq!(roll_hit_count(&mut rng, 3, 3), 3);
    }

    #[test]
    fn test_hit_count_biased_low() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut low = 0;
        let mut high = 0;
        for _ in 0..2000 {
            if roll_hit_count(&mut rng, 2, 5) <= 3 {
                low += 1;
            } else {
                high += 1;
            }
        }
        // Lower half carries double weight: expect roughly 2:1
        assert!(low > high);
    }

    #[test]
    fn test_variance_band() {
        let mut rng = SmallRng::seed_from_u64(3);
        let cfg = Config::default();
        for _ in 0..200 {
            let v = roll_variance(&mut rng, &cfg);
            assert!((0.85..=1.0).contains(&v));
        }

        let pinned = Config {
            variance_floor: 1.0,
            ..Config::default()
        };
        assert_eq!(roll_variance(&mut rng, &pinned), 1.0);
    }
}
