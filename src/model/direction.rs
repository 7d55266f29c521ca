use serde::{Deserialize, Serialize};

/// A cardinal link direction out of a city.
///
/// Declaration order is the canonical order for neighbor listing and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Direction {
    North,
    South,
    West,
    East,
}

string_enum!(Direction {
    North => "north",
    South => "south",
    West => "west",
    East => "east",
});

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
