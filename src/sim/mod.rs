mod placement;
mod random;
mod runner;
mod step;

pub use placement::distribute;
pub use random::{RandomSource, ScriptedSource, pick_one};
pub use runner::{MAX_ROUNDS, RunReport, SimConfig, Termination, run, simulate};
pub use step::{RoundReport, step};
