use std::io::{self, Write};

use crate::model::WorldMap;

/// Write the surviving cities in map-file form, one per line, in name order.
pub fn write_world<W: Write>(world: &WorldMap, out: &mut W) -> io::Result<()> {
    for city in world.cities() {
        writeln!(out, "{city}")?;
    }
    Ok(())
}

pub fn render_world(world: &WorldMap) -> String {
    let mut out = String::new();
    for city in world.cities() {
        out.push_str(&city.to_string());
        out.push('\n');
    }
    out
}
