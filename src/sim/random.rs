use rand::{Rng, RngCore};

use crate::error::{WorldError, WorldResult};

/// Source of uniform choices for placement and movement.
///
/// Every [`RngCore`] is a `RandomSource`, so a seeded `SmallRng` can be passed
/// straight in. Tests substitute [`ScriptedSource`] to force outcomes.
pub trait RandomSource {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Pick one candidate uniformly from an ordered, non-empty slice.
pub fn pick_one<'a, T>(source: &mut dyn RandomSource, candidates: &'a [T]) -> WorldResult<&'a T> {
    if candidates.is_empty() {
        return Err(WorldError::EmptyCandidateSet);
    }
    let index = source.pick_index(candidates.len());
    Ok(&candidates[index])
}

/// Replays a fixed sequence of indices, wrapping each into range.
///
/// Cycles back to the start once exhausted; an empty script always picks 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self {
            picks: picks.into(),
            cursor: 0,
        }
    }

    /// A source that always takes the first candidate.
    pub fn first() -> Self {
        Self::default()
    }
}

impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let pick = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        pick % len
    }
}
