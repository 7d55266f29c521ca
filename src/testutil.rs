use crate::model::{Direction, Neighbors, WorldMap};

/// `Foo north=Bar west=Bee` and `Bar south=Foo`. Bee is referenced but never
/// declared.
pub fn two_city_world() -> WorldMap {
    let mut world = WorldMap::new();
    world
        .add(
            "Foo",
            Neighbors::new()
                .with(Direction::North, "Bar")
                .with(Direction::West, "Bee"),
        )
        .unwrap();
    world
        .add("Bar", Neighbors::new().with(Direction::South, "Foo"))
        .unwrap();
    world
}

/// Directed ring: each city links east to the next, the last back to the first.
pub fn ring_world(names: &[&str]) -> WorldMap {
    let mut world = WorldMap::new();
    for (i, name) in names.iter().enumerate() {
        let next = names[(i + 1) % names.len()];
        world
            .add(*name, Neighbors::new().with(Direction::East, next))
            .unwrap();
    }
    world
}

/// Cities with no links at all.
pub fn unlinked_world(names: &[&str]) -> WorldMap {
    let mut world = WorldMap::new();
    for name in names {
        world.add(*name, Neighbors::new()).unwrap();
    }
    world
}
