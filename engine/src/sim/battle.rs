//! The battle controller: the engine's single public entry point

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::Config;
use crate::error::EngineError;
use crate::event::{BattleEvent, BattleResult, EndReason, Outcome, Side};
use crate::sim::turn::resolve_turn;
use crate::types::{CombatantDefinition, CombatantState};

/// Battle lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Finished,
}

/// A single battle between two combatants.
///
/// Owns both combatant states exclusively; all randomness flows through the
/// injected generator, so a fixed seed replays the identical battle. One
/// instance resolves one battle; construct a fresh one per call.
#[derive(Debug)]
pub struct Battle<R: Rng> {
    cfg: Config,
    rng: R,
    sides: [CombatantState; 2],
    turn: u32,
    phase: Phase,
    events: Vec<BattleEvent>,
    outcome: Option<(Outcome, EndReason)>,
}

impl Battle<SmallRng> {
    /// Construct with a seeded generator for deterministic replay
    pub fn seeded(
        a: CombatantDefinition,
        b: CombatantDefinition,
        cfg: Config,
        seed: u64,
    ) -> Result<Self, EngineError> {
        Self::new(a, b, cfg, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Battle<R> {
    /// Validate both definitions and build the starting states.
    ///
    /// Fails fast, before any turn executes.
    pub fn new(
        a: CombatantDefinition,
        b: CombatantDefinition,
        cfg: Config,
        rng: R,
    ) -> Result<Self, EngineError> {
        if !(1..=100).contains(&cfg.level) {
            return Err(EngineError::InvalidLevel { level: cfg.level });
        }
        validate(&a)?;
        validate(&b)?;

        let sides = [
            CombatantState::new(a, cfg.level),
            CombatantState::new(b, cfg.level),
        ];
        Ok(Self {
            cfg,
            rng,
            sides,
            turn: 0,
            phase: Phase::NotStarted,
            events: Vec::new(),
            outcome: None,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Turns resolved so far
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn side(&self, side: Side) -> &CombatantState {
        &self.sides[side.index()]
    }

    /// The full event log so far
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Resolve one turn with the given move choice per side (index into each
    /// combatant's movepool). Returns whether the battle just finished.
    pub fn step(&mut self, choices: [usize; 2]) -> Result<bool, EngineError> {
        if self.phase == Phase::Finished {
            return Err(EngineError::BattleOver);
        }
        for side in [Side::A, Side::B] {
            let state = &self.sides[side.index()];
            if choices[side.index()] >= state.moves().len() {
                return Err(EngineError::UnknownMove {
                    name: state.name().to_string(),
                    index: choices[side.index()],
                });
            }
        }

        self.phase = Phase::InProgress;
        self.turn += 1;
        self.events.push(BattleEvent::TurnStart { turn: self.turn });

        resolve_turn(
            &mut self.sides,
            choices,
            &mut self.rng,
            &self.cfg,
            &mut self.events,
        );

        if let Some((outcome, reason)) = self.terminal_check() {
            self.events.push(BattleEvent::BattleEnded { outcome, reason });
            self.outcome = Some((outcome, reason));
            self.phase = Phase::Finished;
            return Ok(true);
        }
        Ok(false)
    }

    fn terminal_check(&self) -> Option<(Outcome, EndReason)> {
        let a_down = self.sides[0].is_fainted();
        let b_down = self.sides[1].is_fainted();

        match (a_down, b_down) {
            (true, true) => Some((Outcome::Draw, EndReason::Faint)),
            (true, false) => Some((Outcome::Winner(Side::B), EndReason::Faint)),
            (false, true) => Some((Outcome::Winner(Side::A), EndReason::Faint)),
            (false, false) if self.turn >= self.cfg.max_turns => {
                Some((Outcome::Draw, EndReason::TurnLimit))
            }
            _ => None,
        }
    }

    /// Pick a move for each side at random, the automatic stand-in for a
    /// caller-supplied choice
    pub fn auto_choices(&mut self) -> [usize; 2] {
        let a = self.rng.gen_range(0..self.sides[0].moves().len());
        let b = self.rng.gen_range(0..self.sides[1].moves().len());
        [a, b]
    }

    /// Drive the battle with automatic choices until it terminates
    pub fn run_auto(mut self) -> Result<BattleResult, EngineError> {
        while !self.is_over() {
            let choices = self.auto_choices();
            self.step(choices)?;
        }
        self.into_result()
            .ok_or_else(|| EngineError::Internal("finished battle produced no result".into()))
    }

    /// The battle's result, once it is finished
    pub fn into_result(self) -> Option<BattleResult> {
        let (outcome, reason) = self.outcome?;
        Some(BattleResult {
            outcome,
            reason,
            turns: self.turn,
            events: self.events,
        })
    }
}

fn validate(def: &CombatantDefinition) -> Result<(), EngineError> {
    let fail = |reason: &str| EngineError::InvalidCombatant {
        name: def.name.clone(),
        reason: reason.to_string(),
    };

    if def.name.is_empty() {
        return Err(fail("empty name"));
    }
    if def.moves.is_empty() {
        return Err(fail("no moves"));
    }
    if def.elements.is_empty() || def.elements.len() > 2 {
        return Err(fail("must have 1-2 elemental types"));
    }
    if def.base_stats.hp == 0 {
        return Err(fail("zero base HP"));
    }
    Ok(())
}
