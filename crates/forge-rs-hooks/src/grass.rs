//! Plants grown by bonemeal on grass, and seeds dropped by tall grass.

use forge_rs_api::{BlockId, ItemId, ItemStack};
use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::vanilla::{blocks, items};
use crate::weighted::WeightedTable;

/// A block placed on grass by bonemeal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrassPlant {
    pub block: BlockId,
    pub metadata: u8,
}

#[derive(Debug, Clone)]
pub struct GrassTables {
    plants: WeightedTable<GrassPlant>,
    seeds: WeightedTable<ItemStack>,
}

impl Default for GrassTables {
    fn default() -> Self {
        Self::vanilla()
    }
}

impl GrassTables {
    pub fn empty() -> Self {
        Self {
            plants: WeightedTable::new(),
            seeds: WeightedTable::new(),
        }
    }

    /// Yellow flowers at 20, red flowers at 10, wheat seeds at 10.
    pub fn vanilla() -> Self {
        let mut tables = Self::empty();
        for (block, probability) in [(blocks::YELLOW_FLOWER, 20), (blocks::RED_FLOWER, 10)] {
            tables
                .add_grass_plant(block, 0, probability)
                .expect("vanilla plant probabilities are positive");
        }
        tables
            .add_grass_seed(items::WHEAT_SEEDS, 0, 1, 10)
            .expect("vanilla seed probability is positive");
        tables
    }

    /// Register a plant for bonemeal on grass. `probability` is relative:
    /// red flowers are 10, yellow flowers 20.
    pub fn add_grass_plant(&mut self, block: BlockId, metadata: u8, probability: u32) -> Result<f32> {
        let total = self
            .plants
            .add(GrassPlant { block, metadata }, probability as f32)?;
        debug!("Grass plant {}:{metadata}: probability {total}", block.0);
        Ok(total)
    }

    /// Register a seed dropped when tall grass breaks. `probability` is
    /// relative: wheat seeds are 10.
    pub fn add_grass_seed(
        &mut self,
        item: ItemId,
        damage: u32,
        quantity: u32,
        probability: u32,
    ) -> Result<f32> {
        let total = self
            .seeds
            .add(ItemStack::with_damage(item, quantity, damage), probability as f32)?;
        debug!("Grass seed {}:{damage} x{quantity}: probability {total}", item.0);
        Ok(total)
    }

    pub fn random_grass_plant<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<GrassPlant> {
        self.plants.pick(rng).copied()
    }

    pub fn random_grass_seed<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<ItemStack> {
        self.seeds.pick(rng).cloned()
    }

    pub fn grass_plants(&self) -> &WeightedTable<GrassPlant> {
        &self.plants
    }

    pub fn grass_seeds(&self) -> &WeightedTable<ItemStack> {
        &self.seeds
    }
}
