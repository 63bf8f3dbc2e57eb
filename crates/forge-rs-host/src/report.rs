//! Sample dungeons rolled at startup so table changes can be eyeballed.

use forge_rs_api::ItemStack;
use forge_rs_hooks::ForgeHooks;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DungeonReport {
    pub index: u32,
    /// Spawner mob, `None` if the mob table is empty.
    pub mob: Option<String>,
    pub chest: Vec<ItemStack>,
}

/// Roll `samples` dungeons from `seed`. The same seed gives the same dungeons.
pub fn roll_dungeons(hooks: &ForgeHooks, seed: u64, samples: u32) -> Vec<DungeonReport> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..samples)
        .map(|index| DungeonReport {
            index,
            mob: hooks.random_dungeon_mob(&mut rng).map(str::to_string),
            chest: hooks.roll_dungeon_chest(&mut rng),
        })
        .collect()
}
