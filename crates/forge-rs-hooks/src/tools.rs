//! Tool classes and block harvest levels.
//!
//! A tool belongs to a class ("pickaxe", "shovel", "axe" or a mod-defined one)
//! with a harvest level. Blocks record, per metadata value and tool class, the
//! minimum level needed to get drops, and whether the class mines them faster.

use std::collections::{HashMap, HashSet};
use std::ops::RangeInclusive;

use forge_rs_api::{BlockId, ItemId, ItemStack};
use tracing::{debug, warn};

use crate::vanilla::{blocks, items};

/// Number of metadata values a block can carry.
pub const METADATA_VARIANTS: u8 = 16;

pub const PICKAXE: &str = "pickaxe";
pub const SHOVEL: &str = "shovel";
pub const AXE: &str = "axe";

/// Class and tier of a tool item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolClass {
    pub name: String,
    pub harvest_level: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct HarvestKey {
    block: BlockId,
    metadata: u8,
    tool_class: String,
}

impl HarvestKey {
    fn new(block: BlockId, metadata: u8, tool_class: &str) -> Self {
        Self {
            block,
            metadata,
            tool_class: tool_class.to_string(),
        }
    }
}

/// Result of a harvest check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarvestCheck {
    /// The held tool meets the block's harvest level.
    Harvestable,
    /// The held tool's class applies but its level is too low.
    TooWeak,
    /// No rule covers this tool and block; the host's own rule applies.
    Unregistered,
}

#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tool_classes: HashMap<ItemId, ToolClass>,
    harvest_levels: HashMap<HarvestKey, u32>,
    effective: HashSet<HarvestKey>,
}

/// Metadata values a rule covers. Values no block can carry cover nothing.
fn metadata_range(block: BlockId, metadata: Option<u8>) -> RangeInclusive<u8> {
    match metadata {
        Some(md) if md < METADATA_VARIANTS => md..=md,
        Some(md) => {
            warn!("Ignoring block {} metadata {md}, expected 0-15", block.0);
            RangeInclusive::new(1, 0)
        }
        None => 0..=METADATA_VARIANTS - 1,
    }
}

impl ToolRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the vanilla tools and blocks.
    pub fn vanilla() -> Self {
        let mut reg = Self::new();

        let tiers = [
            (items::WOODEN_PICKAXE, items::WOODEN_SHOVEL, items::WOODEN_AXE, 0),
            (items::STONE_PICKAXE, items::STONE_SHOVEL, items::STONE_AXE, 1),
            (items::IRON_PICKAXE, items::IRON_SHOVEL, items::IRON_AXE, 2),
            (items::GOLDEN_PICKAXE, items::GOLDEN_SHOVEL, items::GOLDEN_AXE, 0),
            (items::DIAMOND_PICKAXE, items::DIAMOND_SHOVEL, items::DIAMOND_AXE, 3),
        ];
        for (pickaxe, shovel, axe, level) in tiers {
            reg.set_tool_class(pickaxe, PICKAXE, level);
            reg.set_tool_class(shovel, SHOVEL, level);
            reg.set_tool_class(axe, AXE, level);
        }

        for (block, level) in [
            (blocks::OBSIDIAN, 3),
            (blocks::DIAMOND_ORE, 2),
            (blocks::DIAMOND_BLOCK, 2),
            (blocks::GOLD_ORE, 2),
            (blocks::GOLD_BLOCK, 2),
            (blocks::IRON_ORE, 1),
            (blocks::IRON_BLOCK, 1),
            (blocks::LAPIS_ORE, 1),
            (blocks::LAPIS_BLOCK, 1),
            (blocks::REDSTONE_ORE, 2),
            (blocks::LIT_REDSTONE_ORE, 2),
        ] {
            reg.set_block_harvest_level(block, None, PICKAXE, level);
        }
        // Redstone ore needs an iron pickaxe but isn't mined any faster by one.
        reg.remove_block_effectiveness(blocks::REDSTONE_ORE, None, PICKAXE);
        reg.remove_block_effectiveness(blocks::LIT_REDSTONE_ORE, None, PICKAXE);

        for block in [
            blocks::COBBLESTONE,
            blocks::DOUBLE_SLAB,
            blocks::SLAB,
            blocks::STONE,
            blocks::SANDSTONE,
            blocks::MOSSY_COBBLESTONE,
            blocks::COAL_ORE,
            blocks::ICE,
            blocks::NETHERRACK,
        ] {
            reg.set_block_harvest_level(block, None, PICKAXE, 0);
        }

        for block in [
            blocks::GRASS,
            blocks::DIRT,
            blocks::SAND,
            blocks::GRAVEL,
            blocks::SNOW_LAYER,
            blocks::SNOW,
            blocks::CLAY,
            blocks::FARMLAND,
            blocks::SOUL_SAND,
            blocks::MYCELIUM,
        ] {
            reg.set_block_harvest_level(block, None, SHOVEL, 0);
        }

        for block in [
            blocks::PLANKS,
            blocks::BOOKSHELF,
            blocks::LOG,
            blocks::CHEST,
            blocks::PUMPKIN,
            blocks::LIT_PUMPKIN,
        ] {
            reg.set_block_harvest_level(block, None, AXE, 0);
        }

        reg
    }

    /// Register `tool` as a member of `tool_class` with `harvest_level`.
    pub fn set_tool_class(&mut self, tool: ItemId, tool_class: &str, harvest_level: u32) {
        debug!("Tool {} is {tool_class} level {harvest_level}", tool.0);
        self.tool_classes.insert(
            tool,
            ToolClass {
                name: tool_class.to_string(),
                harvest_level,
            },
        );
    }

    /// Require `harvest_level` of `tool_class` to harvest `block`, and make the
    /// class effective against it. `None` covers every metadata value.
    ///
    /// A block may be registered under several tool classes.
    pub fn set_block_harvest_level(
        &mut self,
        block: BlockId,
        metadata: Option<u8>,
        tool_class: &str,
        harvest_level: u32,
    ) {
        for md in metadata_range(block, metadata) {
            let key = HarvestKey::new(block, md, tool_class);
            self.harvest_levels.insert(key.clone(), harvest_level);
            self.effective.insert(key);
        }
    }

    /// Stop `tool_class` from mining `block` faster. The harvest level
    /// requirement stays. `None` covers every metadata value.
    pub fn remove_block_effectiveness(
        &mut self,
        block: BlockId,
        metadata: Option<u8>,
        tool_class: &str,
    ) {
        for md in metadata_range(block, metadata) {
            self.effective
                .remove(&HarvestKey::new(block, md, tool_class));
        }
    }

    pub fn tool_class(&self, tool: ItemId) -> Option<&ToolClass> {
        self.tool_classes.get(&tool)
    }

    pub fn harvest_level(&self, block: BlockId, metadata: u8, tool_class: &str) -> Option<u32> {
        self.harvest_levels
            .get(&HarvestKey::new(block, metadata, tool_class))
            .copied()
    }

    /// Whether `held` can harvest the block.
    pub fn can_harvest_block(
        &self,
        block: BlockId,
        metadata: u8,
        held: Option<&ItemStack>,
    ) -> HarvestCheck {
        let Some(class) = held.and_then(|stack| self.tool_class(stack.item)) else {
            return HarvestCheck::Unregistered;
        };
        match self.harvest_level(block, metadata, &class.name) {
            None => HarvestCheck::Unregistered,
            Some(required) if required > class.harvest_level => HarvestCheck::TooWeak,
            Some(_) => HarvestCheck::Harvestable,
        }
    }

    /// Whether `held` mines the block faster than bare hands.
    pub fn is_tool_effective(&self, held: &ItemStack, block: BlockId, metadata: u8) -> bool {
        self.tool_class(held.item).is_some_and(|class| {
            self.effective
                .contains(&HarvestKey::new(block, metadata, &class.name))
        })
    }
}
