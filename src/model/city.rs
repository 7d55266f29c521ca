use std::fmt;

use super::alien::AlienId;
use super::direction::Direction;

/// Outgoing links of a city, one optional slot per direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighbors {
    links: [Option<String>; 4],
}

impl Neighbors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Neighbors::set`].
    pub fn with(mut self, direction: Direction, city: impl Into<String>) -> Self {
        self.set(direction, city);
        self
    }

    pub fn get(&self, direction: Direction) -> Option<&str> {
        self.links[direction.index()].as_deref()
    }

    /// Set a link, returning the one it replaced.
    pub fn set(&mut self, direction: Direction, city: impl Into<String>) -> Option<String> {
        self.links[direction.index()].replace(city.into())
    }

    /// Clear every link that points at `city`. Returns how many were cleared.
    pub fn scrub(&mut self, city: &str) -> usize {
        let mut cleared = 0;
        for link in &mut self.links {
            if link.as_deref() == Some(city) {
                *link = None;
                cleared += 1;
            }
        }
        cleared
    }

    /// Present links in north, south, west, east order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &str)> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.get(dir).map(|city| (dir, city)))
    }

    pub fn is_empty(&self) -> bool {
        self.links.iter().all(Option::is_none)
    }
}

/// A named node of the world graph with at most one occupant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub name: String,
    pub neighbors: Neighbors,
    pub occupant: Option<AlienId>,
}

impl City {
    pub fn new(name: impl Into<String>, neighbors: Neighbors) -> Self {
        Self {
            name: name.into(),
            neighbors,
            occupant: None,
        }
    }
}

/// Map-file form: the name followed by each retained `direction=neighbor` pair.
impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for (dir, neighbor) in self.neighbors.iter() {
            write!(f, " {dir}={neighbor}")?;
        }
        Ok(())
    }
}
