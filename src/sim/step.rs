use tracing::trace;

use super::random::{RandomSource, pick_one};
use crate::error::WorldResult;
use crate::model::{Destruction, Visit, WorldMap};

/// What happened during one round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundReport {
    /// Aliens that left their city (including ones that died on arrival).
    pub moved: usize,
    /// Aliens with no present neighbor to move to.
    pub trapped: usize,
    /// Aliens that picked a link back to their own city.
    pub stayed: usize,
    /// Snapshot entries skipped because the alien died before its turn.
    pub destroyed_before_turn: usize,
    pub destructions: Vec<Destruction>,
}

/// Run one round: every alien alive at the start of the round tries one move.
///
/// The set of movers is fixed by a snapshot taken before any mutation, so an
/// alien that arrives somewhere this round never moves again in it, and the
/// outcome never depends on map traversal order. Each entry is checked against
/// the live graph when its turn comes: an alien killed earlier in the round is
/// skipped, and neighbor lists are read live because earlier collisions may
/// have removed cities.
pub fn step(world: &mut WorldMap, rng: &mut dyn RandomSource) -> WorldResult<RoundReport> {
    let snapshot = world.occupants();
    let mut report = RoundReport::default();

    for (origin, alien) in snapshot {
        if world.occupant(&origin) != Some(alien) {
            report.destroyed_before_turn += 1;
            continue;
        }

        let available = world.neighbors(&origin)?;
        if available.is_empty() {
            trace!(alien = alien.0, city = origin.as_str(), "alien trapped");
            report.trapped += 1;
            continue;
        }

        let destination = pick_one(rng, &available)?;
        if *destination == origin {
            trace!(alien = alien.0, city = origin.as_str(), "alien stayed");
            report.stayed += 1;
            continue;
        }

        world.vacate(&origin)?;
        trace!(
            alien = alien.0,
            from = origin.as_str(),
            to = destination.as_str(),
            "alien moved"
        );
        report.moved += 1;
        if let Visit::Collision(destruction) = world.visit(destination, alien)? {
            report.destructions.push(destruction);
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AlienId, Direction, Neighbors};
    use crate::sim::random::ScriptedSource;
    use crate::testutil::{ring_world, two_city_world, unlinked_world};

    #[test]
    fn lone_alien_moves_along_only_link() {
        let mut world = two_city_world();
        world.place("Bar", AlienId(1)).unwrap();

        let report = step(&mut world, &mut ScriptedSource::first()).unwrap();

        assert_eq!(report.moved, 1);
        assert!(report.destructions.is_empty());
        assert_eq!(world.occupant("Bar"), None);
        assert_eq!(world.occupant("Foo"), Some(AlienId(1)));
        assert_eq!(world.alive_alien_count(), 1);
    }

    #[test]
    fn moved_alien_does_not_move_twice() {
        // Ring A -> B -> C -> A. One alien in A; the snapshot walks A, B, C.
        // After moving into B it must not be picked up again at B's turn.
        let mut world = ring_world(&["A", "B", "C"]);
        world.place("A", AlienId(1)).unwrap();

        let report = step(&mut world, &mut ScriptedSource::first()).unwrap();

        assert_eq!(report.moved, 1);
        assert_eq!(world.occupant("B"), Some(AlienId(1)));
        assert_eq!(world.occupant("C"), None);
    }

    #[test]
    fn every_alien_moves_once_per_round() {
        let mut world = ring_world(&["A", "B", "C", "D"]);
        world.place("A", AlienId(1)).unwrap();
        world.place("C", AlienId(2)).unwrap();

        let report = step(&mut world, &mut ScriptedSource::first()).unwrap();

        assert_eq!(report.moved, 2);
        assert_eq!(world.occupant("B"), Some(AlienId(1)));
        assert_eq!(world.occupant("D"), Some(AlienId(2)));
    }

    #[test]
    fn trapped_alien_stays_put() {
        let mut world = unlinked_world(&["Island"]);
        world.place("Island", AlienId(9)).unwrap();

        let report = step(&mut world, &mut ScriptedSource::first()).unwrap();

        assert_eq!(report.trapped, 1);
        assert_eq!(report.moved, 0);
        assert_eq!(report.stayed, 0);
        assert_eq!(world.occupant("Island"), Some(AlienId(9)));
        assert_eq!(world.alive_alien_count(), 1);
    }

    #[test]
    fn alien_into_occupied_city_destroys_it() {
        // Foo north=Bar, Bar south=Foo, with an alien in each. Snapshot order
        // is Bar then Foo: alien 2 leaves Bar for Foo and collides with 1.
        let mut world = two_city_world();
        world.place("Foo", AlienId(1)).unwrap();
        world.place("Bar", AlienId(2)).unwrap();

        let report = step(&mut world, &mut ScriptedSource::first()).unwrap();

        assert_eq!(
            report.destructions,
            vec![Destruction {
                city: "Foo".to_string(),
                occupant: AlienId(1),
                intruder: AlienId(2),
            }]
        );
        assert_eq!(world.alive_alien_count(), 0);
        assert_eq!(world.city_names(), vec!["Bar".to_string()]);
        assert_eq!(world.occupant("Bar"), None);
        assert!(world.get("Bar").unwrap().neighbors.is_empty());
    }

    #[test]
    fn alien_killed_earlier_in_round_is_skipped() {
        // A -> C, B -> C, C -> D. Aliens in A and C. A's alien arrives at C
        // first and kills C's alien, which must not then try to move.
        let mut world = WorldMap::new();
        world
            .add("A", Neighbors::new().with(Direction::East, "C"))
            .unwrap();
        world
            .add("C", Neighbors::new().with(Direction::East, "D"))
            .unwrap();
        world.add("D", Neighbors::new()).unwrap();
        world.place("A", AlienId(1)).unwrap();
        world.place("C", AlienId(2)).unwrap();

        let report = step(&mut world, &mut ScriptedSource::first()).unwrap();

        assert_eq!(report.moved, 1);
        assert_eq!(report.destroyed_before_turn, 1);
        assert_eq!(report.destructions.len(), 1);
        assert_eq!(world.alive_alien_count(), 0);
        assert_eq!(world.occupant("D"), None);
        assert!(world.get("A").unwrap().neighbors.is_empty());
    }

    #[test]
    fn options_shrink_when_neighbor_destroyed_mid_round() {
        // Hub has north=X and south=Y. Earlier in the round, X is destroyed.
        // The hub alien must then choose among what is left (only Y).
        let mut world = WorldMap::new();
        world
            .add("A", Neighbors::new().with(Direction::North, "X"))
            .unwrap();
        world
            .add(
                "Hub",
                Neighbors::new()
                    .with(Direction::North, "X")
                    .with(Direction::South, "Y"),
            )
            .unwrap();
        world.add("X", Neighbors::new()).unwrap();
        world.add("Y", Neighbors::new()).unwrap();
        world.place("A", AlienId(1)).unwrap();
        world.place("X", AlienId(2)).unwrap();
        world.place("Hub", AlienId(3)).unwrap();

        // Index 0 for every pick: A's alien goes to X (collision) and the hub
        // alien, whose live options are now just [Y], goes to Y.
        let report = step(&mut world, &mut ScriptedSource::first()).unwrap();

        assert_eq!(report.destructions.len(), 1);
        assert_eq!(report.destructions[0].city, "X");
        assert_eq!(world.occupant("Y"), Some(AlienId(3)));
        assert_eq!(world.alive_alien_count(), 1);
    }

    #[test]
    fn every_snapshot_alien_is_accounted_for() {
        // Loop points at itself, A and B collide in C, Island has no links.
        let mut world = WorldMap::new();
        world
            .add("A", Neighbors::new().with(Direction::East, "C"))
            .unwrap();
        world
            .add("B", Neighbors::new().with(Direction::West, "C"))
            .unwrap();
        world
            .add("C", Neighbors::new().with(Direction::South, "Island"))
            .unwrap();
        world.add("Island", Neighbors::new()).unwrap();
        world
            .add("Loop", Neighbors::new().with(Direction::North, "Loop"))
            .unwrap();
        world.place("A", AlienId(1)).unwrap();
        world.place("B", AlienId(2)).unwrap();
        world.place("Island", AlienId(3)).unwrap();
        world.place("Loop", AlienId(4)).unwrap();

        let report = step(&mut world, &mut ScriptedSource::first()).unwrap();

        assert_eq!(report.moved, 2);
        assert_eq!(report.trapped, 1);
        assert_eq!(report.stayed, 1);
        assert_eq!(report.destroyed_before_turn, 0);
        assert_eq!(report.destructions.len(), 1);
        assert_eq!(
            report.moved + report.trapped + report.stayed + report.destroyed_before_turn,
            4
        );
        assert_eq!(world.alive_alien_count(), 2);
    }

    #[test]
    fn self_link_leaves_alien_in_place() {
        let mut world = WorldMap::new();
        world
            .add("Loop", Neighbors::new().with(Direction::North, "Loop"))
            .unwrap();
        world.place("Loop", AlienId(4)).unwrap();

        let report = step(&mut world, &mut ScriptedSource::first()).unwrap();

        assert_eq!(report.moved, 0);
        assert_eq!(report.trapped, 0);
        assert_eq!(report.stayed, 1);
        assert_eq!(world.occupant("Loop"), Some(AlienId(4)));
        assert_eq!(world.alive_alien_count(), 1);
    }
}
