use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{LineError, MapError};
use crate::model::{Direction, Neighbors, WorldMap};

/// Parse one map line: `<name> <dir>=<city> ...`.
pub fn parse_city(line: &str) -> Result<(String, Neighbors), LineError> {
    let mut tokens = line.split_whitespace();
    let name = match tokens.next() {
        Some(name) if !name.contains('=') => name.to_string(),
        _ => return Err(LineError::EmptyName),
    };

    let mut neighbors = Neighbors::new();
    for token in tokens {
        let (key, value) = match token.split_once('=') {
            Some((key, value)) if !key.is_empty() && !value.is_empty() && !value.contains('=') => {
                (key, value)
            }
            _ => return Err(LineError::MalformedPair(token.to_string())),
        };
        let direction: Direction = key
            .parse()
            .map_err(|_| LineError::UnknownDirection(key.to_string()))?;
        if neighbors.get(direction).is_some() {
            return Err(LineError::DuplicateDirection(direction));
        }
        neighbors.set(direction, value);
    }

    Ok((name, neighbors))
}

/// Build a world from a map description, one city per line.
///
/// Blank lines are skipped. Cities that appear only as someone's neighbor are
/// added with no links of their own, so every link in the result points at a
/// present city.
pub fn parse_map(reader: impl BufRead) -> Result<WorldMap, MapError> {
    let mut world = WorldMap::new();
    let mut referenced = BTreeSet::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;
        let at_line = |source| MapError::Line {
            line: line_no,
            source,
        };

        let (name, neighbors) = parse_city(&line).map_err(at_line)?;
        referenced.extend(neighbors.iter().map(|(_, city)| city.to_string()));
        world
            .add(name.clone(), neighbors)
            .map_err(|_| at_line(LineError::DuplicateCity(name)))?;
    }

    let declared = world.len();
    for name in referenced {
        if !world.contains(&name) {
            world.add(name, Neighbors::new())?;
        }
    }
    debug!(
        declared,
        implied = world.len() - declared,
        "map parsed"
    );
    Ok(world)
}

/// Open `path` and parse it with [`parse_map`].
pub fn load_map(path: &Path) -> Result<WorldMap, MapError> {
    let file = File::open(path)?;
    parse_map(BufReader::new(file))
}
