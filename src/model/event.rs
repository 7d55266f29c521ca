use std::fmt;

use serde::{Deserialize, Serialize};

use super::alien::AlienId;

/// A collision: two aliens met in `city`, destroying it and themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destruction {
    pub city: String,
    /// The alien that was already in the city.
    pub occupant: AlienId,
    /// The alien that arrived.
    pub intruder: AlienId,
}

impl fmt::Display for Destruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has been destroyed by alien {} and alien {}",
            self.city, self.intruder, self.occupant
        )
    }
}

/// A destruction tagged with the round it happened in. Round 0 is placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestructionEvent {
    pub round: u32,
    #[serde(flatten)]
    pub destruction: Destruction,
}
