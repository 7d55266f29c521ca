pub mod error;
pub mod flush;
pub mod id;
pub mod loader;
pub mod model;
pub mod render;
pub mod sim;

#[cfg(test)]
mod testutil;

pub use error::{LineError, MapError, WorldError, WorldResult};
pub use id::IdGenerator;
pub use loader::{load_map, parse_city, parse_map};
pub use model::{
    AlienId, City, Destruction, DestructionEvent, Direction, Neighbors, Visit, WorldMap,
};
pub use render::{render_world, write_world};
pub use sim::{
    MAX_ROUNDS, RandomSource, RoundReport, RunReport, ScriptedSource, SimConfig, Termination,
    distribute, pick_one, run, simulate, step,
};
