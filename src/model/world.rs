use std::collections::BTreeMap;

use tracing::{info, trace};

use super::alien::AlienId;
use super::city::{City, Neighbors};
use super::event::Destruction;
use crate::error::{WorldError, WorldResult};

/// Result of [`WorldMap::visit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit {
    /// The city was empty and now holds the alien.
    Occupied,
    /// The alien was already the occupant; nothing changed.
    Stayed,
    /// The city was held by another alien. Both aliens and the city are gone.
    Collision(Destruction),
}

/// The world graph plus the count of aliens still in play.
///
/// BTreeMap for deterministic iteration: city listings, snapshots and
/// rendering all follow name order.
#[derive(Debug, Clone, Default)]
pub struct WorldMap {
    cities: BTreeMap<String, City>,
    alive_alien_count: u64,
}

impl WorldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new city.
    ///
    /// Neighbor names are not checked here: a map is usually declared before
    /// every referenced city exists. [`WorldMap::neighbors`] only ever lists
    /// cities that are present.
    pub fn add(&mut self, name: impl Into<String>, neighbors: Neighbors) -> WorldResult<()> {
        let name = name.into();
        if self.cities.contains_key(&name) {
            return Err(WorldError::DuplicateCity(name));
        }
        self.cities.insert(name.clone(), City::new(name, neighbors));
        Ok(())
    }

    pub fn get(&self, name: &str) -> WorldResult<&City> {
        self.cities
            .get(name)
            .ok_or_else(|| WorldError::NotFound(name.to_string()))
    }

    fn get_mut(&mut self, name: &str) -> WorldResult<&mut City> {
        self.cities
            .get_mut(name)
            .ok_or_else(|| WorldError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cities.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Cities in name order.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.values()
    }

    /// Names of all present cities, in name order.
    pub fn city_names(&self) -> Vec<String> {
        self.cities.keys().cloned().collect()
    }

    pub fn alive_alien_count(&self) -> u64 {
        self.alive_alien_count
    }

    /// Present neighbors of `name` in north, south, west, east order.
    pub fn neighbors(&self, name: &str) -> WorldResult<Vec<String>> {
        let city = self.get(name)?;
        Ok(city
            .neighbors
            .iter()
            .filter(|(_, neighbor)| self.cities.contains_key(*neighbor))
            .map(|(_, neighbor)| neighbor.to_string())
            .collect())
    }

    /// Occupant of `name`, or `None` if the city is empty or gone.
    pub fn occupant(&self, name: &str) -> Option<AlienId> {
        self.cities.get(name).and_then(|city| city.occupant)
    }

    /// Every (city, alien) pair currently occupied, in city-name order.
    pub fn occupants(&self) -> Vec<(String, AlienId)> {
        self.cities
            .values()
            .filter_map(|city| city.occupant.map(|alien| (city.name.clone(), alien)))
            .collect()
    }

    /// Put `alien` into an empty city. Does not touch the alive count.
    pub fn occupy(&mut self, name: &str, alien: AlienId) -> WorldResult<()> {
        let city = self.get_mut(name)?;
        if let Some(occupant) = city.occupant {
            return Err(WorldError::AlreadyOccupied {
                city: name.to_string(),
                occupant,
            });
        }
        city.occupant = Some(alien);
        Ok(())
    }

    /// Clear the occupant slot of `name`, returning whoever was there.
    pub fn vacate(&mut self, name: &str) -> WorldResult<Option<AlienId>> {
        Ok(self.get_mut(name)?.occupant.take())
    }

    /// Send `alien` into `name`, resolving a collision if the city is held by
    /// another alien.
    pub fn visit(&mut self, name: &str, alien: AlienId) -> WorldResult<Visit> {
        let current = self.get(name)?.occupant;
        match current {
            None => {
                self.occupy(name, alien)?;
                trace!(city = name, alien = alien.0, "alien occupied city");
                Ok(Visit::Occupied)
            }
            Some(occupant) if occupant == alien => Ok(Visit::Stayed),
            Some(occupant) => {
                self.remove(name)?;
                debug_assert!(
                    self.alive_alien_count >= 2,
                    "collision in {name} with fewer than two aliens alive"
                );
                self.alive_alien_count = self.alive_alien_count.saturating_sub(2);
                let destruction = Destruction {
                    city: name.to_string(),
                    occupant,
                    intruder: alien,
                };
                info!(
                    city = name,
                    occupant = occupant.0,
                    intruder = alien.0,
                    alive = self.alive_alien_count,
                    "city destroyed"
                );
                Ok(Visit::Collision(destruction))
            }
        }
    }

    /// Bring a new alien into play and send it to `name`.
    ///
    /// Counts the alien as alive before visiting, so a collision on arrival
    /// nets out to -1 for the two aliens involved. An alien that already
    /// occupies a city is rejected with `AlienInPlay`.
    pub fn place(&mut self, name: &str, alien: AlienId) -> WorldResult<Visit> {
        if !self.contains(name) {
            return Err(WorldError::NotFound(name.to_string()));
        }
        if self.cities.values().any(|city| city.occupant == Some(alien)) {
            return Err(WorldError::AlienInPlay(alien));
        }
        self.alive_alien_count += 1;
        self.visit(name, alien)
    }

    /// Delete `name` and clear every remaining reference to it.
    pub fn remove(&mut self, name: &str) -> WorldResult<City> {
        let removed = self
            .cities
            .remove(name)
            .ok_or_else(|| WorldError::NotFound(name.to_string()))?;
        for city in self.cities.values_mut() {
            city.neighbors.scrub(name);
        }
        Ok(removed)
    }
}
