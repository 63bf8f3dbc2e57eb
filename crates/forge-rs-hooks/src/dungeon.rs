//! Dungeon spawner mobs and chest loot.
//!
//! Both tables are weighted by "rarity": an entry with rarity 2 is picked twice
//! as often as one with rarity 1. Re-adding a mob or an identical loot entry
//! makes it more common instead of duplicating it.

use forge_rs_api::ItemStack;
use rand::Rng;
use tracing::debug;

use crate::error::{ForgeError, Result};
use crate::vanilla::items;
use crate::weighted::WeightedTable;

/// Item stacks attempted per dungeon chest unless changed.
pub const DEFAULT_LOOT_TRIES: u32 = 8;

/// A loot entry: an item and the stack size range it generates with.
///
/// Only built through [`DungeonLoot::new`], so `1 <= min_count <= max_count`.
#[derive(Debug, Clone, PartialEq)]
pub struct DungeonLoot {
    stack: ItemStack,
    min_count: u32,
    max_count: u32,
}

impl DungeonLoot {
    pub fn new(stack: ItemStack, min_count: u32, max_count: u32) -> Result<Self> {
        if min_count == 0 || min_count > max_count {
            return Err(ForgeError::InvalidCountRange {
                min: min_count,
                max: max_count,
            });
        }
        Ok(Self {
            stack,
            min_count,
            max_count,
        })
    }

    pub fn stack(&self) -> &ItemStack {
        &self.stack
    }

    pub fn min_count(&self) -> u32 {
        self.min_count
    }

    pub fn max_count(&self) -> u32 {
        self.max_count
    }

    /// Same item and damage, any stack size range.
    pub fn matches(&self, stack: &ItemStack) -> bool {
        self.stack.is_item_equal(stack)
    }

    /// Same item and damage with exactly this stack size range.
    pub fn matches_range(&self, stack: &ItemStack, min_count: u32, max_count: u32) -> bool {
        self.matches(stack) && self.min_count == min_count && self.max_count == max_count
    }

    /// A copy of the stack with a size drawn uniformly from the range.
    pub fn generate_stack<R: Rng + ?Sized>(&self, rng: &mut R) -> ItemStack {
        let mut stack = self.stack.clone();
        stack.count = rng.gen_range(self.min_count..=self.max_count);
        stack
    }
}

/// Weighted mob and loot tables used when generating dungeons.
#[derive(Debug, Clone)]
pub struct DungeonTables {
    loot_tries: u32,
    mobs: WeightedTable<String>,
    loot: WeightedTable<DungeonLoot>,
}

impl Default for DungeonTables {
    fn default() -> Self {
        Self::vanilla()
    }
}

impl DungeonTables {
    /// Tables with no mobs and no loot.
    pub fn empty() -> Self {
        Self {
            loot_tries: DEFAULT_LOOT_TRIES,
            mobs: WeightedTable::new(),
            loot: WeightedTable::new(),
        }
    }

    /// Tables holding the vanilla spawner mobs and chest loot.
    pub fn vanilla() -> Self {
        let mut tables = Self::empty();
        tables.seed_vanilla();
        tables
    }

    fn seed_vanilla(&mut self) {
        let mobs = [("Skeleton", 1.0), ("Zombie", 2.0), ("Spider", 1.0)];
        for (name, rarity) in mobs {
            self.mobs
                .add(name.to_string(), rarity)
                .expect("vanilla mob rarities are positive");
        }

        let loot = [
            (ItemStack::new(items::SADDLE), 1.00, 1, 1),
            (ItemStack::new(items::IRON_INGOT), 1.00, 1, 4),
            (ItemStack::new(items::BREAD), 1.00, 1, 1),
            (ItemStack::new(items::WHEAT), 1.00, 1, 4),
            (ItemStack::new(items::GUNPOWDER), 1.00, 1, 4),
            (ItemStack::new(items::STRING), 1.00, 1, 4),
            (ItemStack::new(items::BUCKET), 1.00, 1, 1),
            (ItemStack::new(items::GOLDEN_APPLE), 0.01, 1, 1),
            (ItemStack::new(items::REDSTONE), 0.50, 1, 4),
            (ItemStack::new(items::RECORD_13), 0.05, 1, 1),
            (ItemStack::new(items::RECORD_CAT), 0.05, 1, 1),
            (
                ItemStack::with_damage(items::DYE, 1, items::DYE_COCOA),
                1.00,
                1,
                1,
            ),
        ];
        for (stack, rarity, min, max) in loot {
            self.add_dungeon_loot(stack, rarity, min, max)
                .expect("vanilla loot entries are valid");
        }
    }

    /// Set how many item stacks are attempted per chest. Chests may end up
    /// with fewer.
    pub fn set_dungeon_loot_tries(&mut self, tries: u32) {
        self.loot_tries = tries;
    }

    pub fn dungeon_loot_tries(&self) -> u32 {
        self.loot_tries
    }

    /// Add a mob to the spawner table, or make an existing one more common.
    /// Returns the mob's resulting rarity.
    pub fn add_dungeon_mob(&mut self, name: &str, rarity: f32) -> Result<f32> {
        let total = self.mobs.add(name.to_string(), rarity)?;
        debug!("Dungeon mob {name}: rarity {total}");
        Ok(total)
    }

    /// Remove a mob entirely. Returns its rarity before removal, 0 if absent.
    pub fn remove_dungeon_mob(&mut self, name: &str) -> f32 {
        self.mobs.remove_where(|mob| mob == name)
    }

    pub fn dungeon_mob_rarity(&self, name: &str) -> Option<f32> {
        self.mobs.get_by(|mob| mob == name).map(|e| e.weight)
    }

    /// Pick the mob a new spawner creates. `None` when no mobs are registered.
    pub fn random_dungeon_mob<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.mobs.pick(rng).map(String::as_str)
    }

    pub fn dungeon_mobs(&self) -> &WeightedTable<String> {
        &self.mobs
    }

    /// Add a loot entry of size 1.
    pub fn add_dungeon_loot_single(&mut self, stack: ItemStack, rarity: f32) -> Result<f32> {
        self.add_dungeon_loot(stack, rarity, 1, 1)
    }

    /// Add a loot entry generating between `min_count` and `max_count` items.
    /// An entry with the same item and range becomes more common instead.
    /// Returns the entry's resulting rarity.
    pub fn add_dungeon_loot(
        &mut self,
        stack: ItemStack,
        rarity: f32,
        min_count: u32,
        max_count: u32,
    ) -> Result<f32> {
        let item = stack.item;
        let loot = DungeonLoot::new(stack, min_count, max_count)?;
        let total = self.loot.add_by(loot, rarity, |existing, new| {
            existing.matches_range(&new.stack, new.min_count, new.max_count)
        })?;
        debug!(
            "Dungeon loot item {} ({min_count}-{max_count}): rarity {total}",
            item.0
        );
        Ok(total)
    }

    /// Remove loot entries for `stack`. With `range`, only the entry with that
    /// exact `(min, max)` stack size range goes; without it, every entry for
    /// the item does. Returns the summed rarity removed.
    pub fn remove_dungeon_loot(&mut self, stack: &ItemStack, range: Option<(u32, u32)>) -> f32 {
        match range {
            Some((min, max)) => self
                .loot
                .remove_where(|loot| loot.matches_range(stack, min, max)),
            None => self.loot.remove_where(|loot| loot.matches(stack)),
        }
    }

    /// Pick one loot entry and generate its stack. `None` when the table is
    /// empty.
    pub fn random_dungeon_loot<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<ItemStack> {
        self.loot.pick(rng).map(|loot| loot.generate_stack(rng))
    }

    /// Fill a chest: one loot draw per configured try.
    pub fn roll_dungeon_chest<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<ItemStack> {
        (0..self.loot_tries)
            .filter_map(|_| self.random_dungeon_loot(rng))
            .collect()
    }

    pub fn dungeon_loot(&self) -> &WeightedTable<DungeonLoot> {
        &self.loot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_rs_api::ItemId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn vanilla_defaults() {
        let tables = DungeonTables::vanilla();
        assert_eq!(tables.dungeon_loot_tries(), 8);
        assert_eq!(tables.dungeon_mobs().len(), 3);
        assert_eq!(tables.dungeon_mob_rarity("Zombie"), Some(2.0));
        assert_eq!(tables.dungeon_loot().len(), 12);
    }

    #[test]
    fn mob_rarity_accumulates() {
        let mut tables = DungeonTables::vanilla();
        assert_eq!(tables.add_dungeon_mob("Spider", 1.5).unwrap(), 2.5);
        assert_eq!(tables.dungeon_mobs().len(), 3);
        assert_eq!(tables.add_dungeon_mob("CaveSpider", 0.5).unwrap(), 0.5);
        assert_eq!(tables.dungeon_mobs().len(), 4);
    }

    #[test]
    fn mob_rarity_must_be_positive() {
        let mut tables = DungeonTables::vanilla();
        assert_eq!(
            tables.add_dungeon_mob("Ghast", 0.0),
            Err(ForgeError::InvalidRarity { rarity: 0.0 })
        );
        assert!(tables.dungeon_mob_rarity("Ghast").is_none());
    }

    #[test]
    fn remove_named_mob_only() {
        let mut tables = DungeonTables::vanilla();
        assert_eq!(tables.remove_dungeon_mob("Zombie"), 2.0);
        assert_eq!(tables.dungeon_mob_rarity("Skeleton"), Some(1.0));
        assert!(tables.dungeon_mob_rarity("Zombie").is_none());
        assert_eq!(tables.remove_dungeon_mob("Zombie"), 0.0);
    }

    #[test]
    fn empty_tables_pick_nothing() {
        let tables = DungeonTables::empty();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(tables.random_dungeon_mob(&mut rng).is_none());
        assert!(tables.random_dungeon_loot(&mut rng).is_none());
        assert!(tables.roll_dungeon_chest(&mut rng).is_empty());
    }

    #[test]
    fn mob_frequencies_follow_rarity() {
        let tables = DungeonTables::vanilla();
        let mut rng = StdRng::seed_from_u64(11);
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for _ in 0..20_000 {
            *counts.entry(tables.random_dungeon_mob(&mut rng).unwrap()).or_default() += 1;
        }
        let zombie = counts["Zombie"] as f64 / 20_000.0;
        let spider = counts["Spider"] as f64 / 20_000.0;
        assert!((zombie - 0.5).abs() < 0.03, "zombie {zombie}");
        assert!((spider - 0.25).abs() < 0.03, "spider {spider}");
    }

    #[test]
    fn loot_merges_on_same_range_only() {
        let mut tables = DungeonTables::empty();
        let diamond = ItemStack::new(ItemId(264));
        assert_eq!(tables.add_dungeon_loot(diamond.clone(), 0.5, 1, 2).unwrap(), 0.5);
        assert_eq!(tables.add_dungeon_loot(diamond.clone(), 0.25, 1, 2).unwrap(), 0.75);
        assert_eq!(tables.dungeon_loot().len(), 1);

        tables.add_dungeon_loot(diamond.clone(), 1.0, 1, 3).unwrap();
        assert_eq!(tables.dungeon_loot().len(), 2);

        // Count of the stack passed in doesn't matter, only item and damage.
        tables
            .add_dungeon_loot_single(ItemStack::with_count(ItemId(264), 9), 1.0)
            .unwrap();
        tables.add_dungeon_loot_single(diamond, 1.0).unwrap();
        assert_eq!(tables.dungeon_loot().len(), 3);
    }

    #[test]
    fn loot_rejects_bad_input() {
        let mut tables = DungeonTables::empty();
        let stick = ItemStack::new(ItemId(280));
        assert!(tables.add_dungeon_loot(stick.clone(), -1.0, 1, 1).is_err());
        assert_eq!(
            tables.add_dungeon_loot(stick.clone(), 1.0, 4, 2),
            Err(ForgeError::InvalidCountRange { min: 4, max: 2 })
        );
        assert!(tables.add_dungeon_loot(stick, 1.0, 0, 2).is_err());
        assert!(tables.dungeon_loot().is_empty());
    }

    #[test]
    fn remove_loot_any_range() {
        let mut tables = DungeonTables::vanilla();
        let iron = ItemStack::new(items::IRON_INGOT);
        tables.add_dungeon_loot(iron.clone(), 2.0, 2, 8).unwrap();
        assert_eq!(tables.remove_dungeon_loot(&iron, None), 3.0);
        assert_eq!(tables.dungeon_loot().len(), 12 - 1);
        assert_eq!(tables.remove_dungeon_loot(&iron, None), 0.0);
    }

    #[test]
    fn remove_loot_exact_range() {
        let mut tables = DungeonTables::vanilla();
        let iron = ItemStack::new(items::IRON_INGOT);
        tables.add_dungeon_loot(iron.clone(), 2.0, 2, 8).unwrap();
        assert_eq!(tables.remove_dungeon_loot(&iron, Some((2, 8))), 2.0);
        assert_eq!(tables.remove_dungeon_loot(&iron, Some((2, 8))), 0.0);
        assert_eq!(tables.remove_dungeon_loot(&iron, Some((1, 4))), 1.0);
    }

    #[test]
    fn cocoa_is_distinct_from_other_dyes() {
        let mut tables = DungeonTables::vanilla();
        let ink = ItemStack::new(items::DYE);
        assert_eq!(tables.remove_dungeon_loot(&ink, None), 0.0);
        let cocoa = ItemStack::with_damage(items::DYE, 1, items::DYE_COCOA);
        assert_eq!(tables.remove_dungeon_loot(&cocoa, None), 1.0);
    }

    #[test]
    fn loot_entry_range_checked_on_construction() {
        let bone = ItemStack::new(ItemId(352));
        assert_eq!(
            DungeonLoot::new(bone.clone(), 3, 2),
            Err(ForgeError::InvalidCountRange { min: 3, max: 2 })
        );
        assert!(DungeonLoot::new(bone.clone(), 0, 0).is_err());

        let loot = DungeonLoot::new(bone.clone(), 2, 5).unwrap();
        assert_eq!(loot.stack(), &bone);
        assert_eq!((loot.min_count(), loot.max_count()), (2, 5));

        let tables = DungeonTables::vanilla();
        let iron = tables
            .dungeon_loot()
            .iter()
            .find(|e| e.value.stack().item == items::IRON_INGOT)
            .unwrap();
        assert_eq!((iron.value.min_count(), iron.value.max_count()), (1, 4));
    }

    #[test]
    fn generated_stack_size_in_range() {
        let loot = DungeonLoot::new(ItemStack::new(items::WHEAT), 1, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let stack = loot.generate_stack(&mut rng);
            assert_eq!(stack.item, items::WHEAT);
            assert!((1..=4).contains(&stack.count));
            seen[stack.count as usize] = true;
        }
        assert_eq!(seen, [false, true, true, true, true]);
    }

    #[test]
    fn chest_uses_loot_tries() {
        let mut tables = DungeonTables::vanilla();
        tables.set_dungeon_loot_tries(3);
        let mut rng = StdRng::seed_from_u64(21);
        assert_eq!(tables.roll_dungeon_chest(&mut rng).len(), 3);

        tables.set_dungeon_loot_tries(0);
        assert!(tables.roll_dungeon_chest(&mut rng).is_empty());
    }
}
