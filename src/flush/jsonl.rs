use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::{AlienId, City, Direction, WorldMap};
use crate::sim::RunReport;

/// One surviving city as written to `cities.jsonl`.
#[derive(Debug, Serialize)]
struct CityRecord<'a> {
    name: &'a str,
    neighbors: BTreeMap<Direction, &'a str>,
    occupant: Option<AlienId>,
}

impl<'a> From<&'a City> for CityRecord<'a> {
    fn from(city: &'a City) -> Self {
        Self {
            name: &city.name,
            neighbors: city.neighbors.iter().collect(),
            occupant: city.occupant,
        }
    }
}

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Flush the end state of a run to JSONL files in the given output directory.
///
/// Creates the output directory if it does not exist. Writes 2 files:
/// - `cities.jsonl` — one surviving city per line, with its remaining links
///   and occupant
/// - `destructions.jsonl` — one destruction per line, tagged with its round
pub fn flush_to_jsonl(world: &WorldMap, report: &RunReport, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(
        &output_dir.join("cities.jsonl"),
        world.cities().map(CityRecord::from),
    )?;
    write_jsonl(
        &output_dir.join("destructions.jsonl"),
        report.events.iter(),
    )?;

    Ok(())
}
