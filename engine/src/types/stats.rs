//! Base stats, battle stats, and stat stage tracking

/// The five battle stats that stat stages can modify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stat {
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    /// Parse from an API stat name ("attack", "special-attack", ...)
    ///
    /// "hp" is not a stage-modifiable stat and returns None.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "attack" => Some(Stat::Attack),
            "defense" => Some(Stat::Defense),
            "special-attack" => Some(Stat::SpecialAttack),
            "special-defense" => Some(Stat::SpecialDefense),
            "speed" => Some(Stat::Speed),
            _ => None,
        }
    }

    /// Display name
    pub fn as_str(self) -> &'static str {
        match self {
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpecialAttack => "Special Attack",
            Stat::SpecialDefense => "Special Defense",
            Stat::Speed => "Speed",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Species base stats, as provided by the data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

impl BaseStats {
    /// Max HP at the given level: `2*base*level/100 + level + 10`
    pub fn scaled_hp(&self, level: u8) -> u16 {
        let level = level as u32;
        (2 * self.hp as u32 * level / 100 + level + 10) as u16
    }

    /// Non-HP stat at the given level: `2*base*level/100 + 5`
    pub fn scaled(&self, stat: Stat, level: u8) -> u16 {
        let base = match stat {
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        };
        (2 * base as u32 * level as u32 / 100 + 5) as u16
    }
}

/// Stat stage modifiers, each clamped to [-6, +6]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatStages {
    pub attack: i8,
    pub defense: i8,
    pub special_attack: i8,
    pub special_defense: i8,
    pub speed: i8,
}

impl StatStages {
    /// All stages at 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stage for a stat
    pub fn get(&self, stat: Stat) -> i8 {
        match stat {
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    /// Shift a stage by `delta`, clamping the result to [-6, +6].
    ///
    /// Returns the change actually applied, which is 0 when the stage is
    /// already pinned at the boundary; the turn resolver reports that case
    /// as a "won't go any higher/lower" stat event.
    pub fn apply(&mut self, stat: Stat, delta: i8) -> i8 {
        let current = self.get(stat);
        let next = current.saturating_add(delta).clamp(-6, 6);
        let slot = match stat {
            Stat::Attack => &mut self.attack,
            Stat::Defense => &mut self.defense,
            Stat::SpecialAttack => &mut self.special_attack,
            Stat::SpecialDefense => &mut self.special_defense,
            Stat::Speed => &mut self.speed,
        };
        *slot = next;
        next - current
    }

    /// Multiplier for a stage: positive stages are `(2+s)/2`, negative `2/(2-s)`.
    /// Boundaries: +6 = 4.0, -6 = 0.25.
    pub fn multiplier(stage: i8) -> f64 {
        let stage = stage.clamp(-6, 6) as i32;
        if stage >= 0 {
            (2 + stage) as f64 / 2.0
        } else {
            2.0 / (2 - stage) as f64
        }
    }
}
