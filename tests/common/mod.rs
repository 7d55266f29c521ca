#![allow(dead_code)]

use alien_invasion::{Direction, Neighbors, WorldMap};

/// `Foo north=Bar west=Bee` and `Bar south=Foo`.
pub fn build_two_city_world() -> WorldMap {
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

/// Foo, Bar and Bee all linked to each other.
pub fn build_triangle_world() -> WorldMap {
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
        .add(
            "Bar",
            Neighbors::new()
                .with(Direction::South, "Foo")
                .with(Direction::East, "Bee"),
        )
        .unwrap();
    world
        .add(
            "Bee",
            Neighbors::new()
                .with(Direction::East, "Foo")
                .with(Direction::West, "Bar"),
        )
        .unwrap();
    world
}

/// Square grid of `side * side` cities named `r{row}c{col}`, linked in all four
/// directions.
pub fn build_grid_world(side: usize) -> WorldMap {
    let name = |r: usize, c: usize| format!("r{r}c{c}");
    let mut world = WorldMap::new();
    for r in 0..side {
        for c in 0..side {
            let mut neighbors = Neighbors::new();
            if r > 0 {
                neighbors.set(Direction::North, name(r - 1, c));
            }
            if r + 1 < side {
                neighbors.set(Direction::South, name(r + 1, c));
            }
            if c > 0 {
                neighbors.set(Direction::West, name(r, c - 1));
            }
            if c + 1 < side {
                neighbors.set(Direction::East, name(r, c + 1));
            }
            world.add(name(r, c), neighbors).unwrap();
        }
    }
    world
}

/// Assert no city links to a city that is not in the world.
pub fn assert_links_consistent(world: &WorldMap) {
    for city in world.cities() {
        for (dir, neighbor) in city.neighbors.iter() {
            assert!(
                world.contains(neighbor),
                "{} {dir} links to missing city {neighbor}",
                city.name
            );
        }
    }
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
