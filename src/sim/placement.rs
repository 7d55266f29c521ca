use tracing::{debug, trace};

use super::random::{RandomSource, pick_one};
use crate::error::WorldResult;
use crate::id::IdGenerator;
use crate::model::{Destruction, Visit, WorldMap};

/// Scatter `count` fresh aliens (IDs 1..=count) over the world.
///
/// Each alien lands on a city picked uniformly from the cities present at that
/// moment. Landing on an occupied city is an ordinary collision, so placement
/// can already destroy cities. An empty world makes this a no-op.
pub fn distribute(
    world: &mut WorldMap,
    count: u64,
    rng: &mut dyn RandomSource,
) -> WorldResult<Vec<Destruction>> {
    let mut id_gen = IdGenerator::new();
    let mut destructions = Vec::new();

    for _ in 0..count {
        let alien = id_gen.next_id();
        if world.is_empty() {
            continue;
        }
        let names = world.city_names();
        let city = pick_one(rng, &names)?;
        trace!(alien = alien.0, city = city.as_str(), "placing alien");
        if let Visit::Collision(destruction) = world.place(city, alien)? {
            destructions.push(destruction);
        }
    }

    debug!(
        requested = id_gen.issued(),
        alive = world.alive_alien_count(),
        collisions = destructions.len(),
        cities = world.len(),
        "placement finished"
    );
    Ok(destructions)
}
