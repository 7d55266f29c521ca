use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info};

use super::placement::distribute;
use super::random::RandomSource;
use super::step::step;
use crate::error::WorldResult;
use crate::model::{DestructionEvent, WorldMap};

/// Hard upper bound on rounds. Aliens stranded on disconnected cities would
/// otherwise wander forever. Callers may lower it, never raise it.
pub const MAX_ROUNDS: u32 = 10_000;

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of aliens to place before the first round.
    pub aliens: u64,
    pub seed: u64,
    /// Clamped to [`MAX_ROUNDS`].
    pub max_rounds: u32,
}

impl SimConfig {
    pub fn new(aliens: u64, seed: u64) -> Self {
        Self {
            aliens,
            seed,
            max_rounds: MAX_ROUNDS,
        }
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// No aliens left alive.
    Extinct,
    /// The round cap was reached with aliens still alive.
    RoundLimit,
}

/// Summary of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Rounds actually executed.
    pub rounds: u32,
    pub termination: Termination,
    /// Every destruction in order. Placement collisions carry round 0.
    pub events: Vec<DestructionEvent>,
}

/// Step the world until no aliens remain or `max_rounds` rounds have run.
///
/// `max_rounds` above [`MAX_ROUNDS`] is clamped down to it.
pub fn run(
    world: &mut WorldMap,
    rng: &mut dyn RandomSource,
    max_rounds: u32,
) -> WorldResult<RunReport> {
    let max_rounds = max_rounds.min(MAX_ROUNDS);
    let mut rounds = 0;
    let mut events = Vec::new();

    while rounds < max_rounds && world.alive_alien_count() > 0 {
        rounds += 1;
        let report = step(world, rng)?;
        debug!(
            round = rounds,
            moved = report.moved,
            trapped = report.trapped,
            stayed = report.stayed,
            destroyed = report.destructions.len(),
            alive = world.alive_alien_count(),
            "round finished"
        );
        events.extend(
            report
                .destructions
                .into_iter()
                .map(|destruction| DestructionEvent {
                    round: rounds,
                    destruction,
                }),
        );
    }

    let termination = if world.alive_alien_count() == 0 {
        Termination::Extinct
    } else {
        Termination::RoundLimit
    };
    Ok(RunReport {
        rounds,
        termination,
        events,
    })
}

/// Place `config.aliens` aliens and run to completion.
///
/// Creates a deterministic RNG from `config.seed`, so the same seed and map
/// always produce the same outcome.
pub fn simulate(world: &mut WorldMap, config: &SimConfig) -> WorldResult<RunReport> {
    let mut rng = SmallRng::seed_from_u64(config.seed);

    let placed = distribute(world, config.aliens, &mut rng)?;
    let mut report = run(world, &mut rng, config.max_rounds)?;

    let mut events: Vec<DestructionEvent> = placed
        .into_iter()
        .map(|destruction| DestructionEvent {
            round: 0,
            destruction,
        })
        .collect();
    events.append(&mut report.events);
    report.events = events;

    info!(
        rounds = report.rounds,
        termination = ?report.termination,
        destroyed = report.events.len(),
        survivors = world.alive_alien_count(),
        cities_left = world.len(),
        "simulation finished"
    );
    Ok(report)
}
