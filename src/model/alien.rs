use std::fmt;

use serde::{Deserialize, Serialize};

/// Permanent identity of an alien. Aliens have no other state: where they are
/// is recorded by the city that holds them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlienId(pub u64);

impl fmt::Display for AlienId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
