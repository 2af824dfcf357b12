//! Major status ailments

/// Major status ailments. A combatant holds at most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ailment {
    Paralysis,
    Burn,
    Poison,
    Sleep,
    Freeze,
}

impl Ailment {
    /// Parse from an API ailment name
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "paralysis" => Some(Ailment::Paralysis),
            "burn" => Some(Ailment::Burn),
            "poison" => Some(Ailment::Poison),
            "sleep" => Some(Ailment::Sleep),
            "freeze" => Some(Ailment::Freeze),
            _ => None,
        }
    }

    /// Whether this ailment can block the action at turn start
    pub fn gates_action(self) -> bool {
        matches!(self, Ailment::Paralysis | Ailment::Sleep | Ailment::Freeze)
    }

    /// Whether this ailment carries a remaining-turns counter
    pub fn is_timed(self) -> bool {
        matches!(self, Ailment::Sleep | Ailment::Freeze)
    }

    /// Display name
    pub fn as_str(self) -> &'static str {
        match self {
            Ailment::Paralysis => "Paralysis",
            Ailment::Burn => "Burn",
            Ailment::Poison => "Poison",
            Ailment::Sleep => "Sleep",
            Ailment::Freeze => "Freeze",
        }
    }
}

impl std::fmt::Display for Ailment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An ailment together with its status-specific counter.
///
/// Sleep and Freeze track the turns left before a guaranteed recovery;
/// the other ailments persist until cured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveAilment {
    pub kind: Ailment,
    pub turns_remaining: Option<u8>,
}

impl ActiveAilment {
    pub fn new(kind: Ailment) -> Self {
        Self {
            kind,
            turns_remaining: None,
        }
    }

    pub fn timed(kind: Ailment, turns: u8) -> Self {
        Self {
            kind,
            turns_remaining: Some(turns),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Ailment::from_name("paralysis"), Some(Ailment::Paralysis));
        assert_eq!(Ailment::from_name("burn"), Some(Ailment::Burn));
        assert_eq!(Ailment::from_name("freeze"), Some(Ailment::Freeze));
        assert_eq!(Ailment::from_name("confusion"), None);
        assert_eq!(Ailment::from_name("none"), None);
    }

    #[test]
    fn test_gating_and_timing() {
        assert!(Ailment::Sleep.gates_action());
        assert!(Ailment::Paralysis.gates_action());
        assert!(!Ailment::Burn.gates_action());
        assert!(!Ailment::Poison.gates_action());

        assert!(Ailment::Sleep.is_timed());
        assert!(Ailment::Freeze.is_timed());
        assert!(!Ailment::Paralysis.is_timed());
    }
}
