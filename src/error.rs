use thiserror::Error;

use crate::model::{AlienId, Direction};

/// Precondition violations raised by the world graph and the simulation core.
///
/// None of these are recoverable: they indicate either a rejected input map or
/// a bookkeeping bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("city {0} already exists")]
    DuplicateCity(String),
    #[error("city {0} not found")]
    NotFound(String),
    #[error("city {city} is already occupied by alien {occupant}")]
    AlreadyOccupied { city: String, occupant: AlienId },
    #[error("alien {0} is already in play")]
    AlienInPlay(AlienId),
    #[error("cannot pick from an empty candidate set")]
    EmptyCandidateSet,
}

pub type WorldResult<T> = Result<T, WorldError>;

/// A problem with a single line of a map description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("city name is missing")]
    EmptyName,
    #[error("malformed direction pair {0:?}, expected key=value")]
    MalformedPair(String),
    #[error("unknown direction {0:?}")]
    UnknownDirection(String),
    #[error("direction {0} given more than once")]
    DuplicateDirection(Direction),
    #[error("city {0} is declared more than once")]
    DuplicateCity(String),
}

/// Failure to load a map. Any error rejects the whole map.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: LineError,
    },
    #[error(transparent)]
    World(#[from] WorldError),
    #[error("failed to read map: {0}")]
    Io(#[from] std::io::Error),
}
