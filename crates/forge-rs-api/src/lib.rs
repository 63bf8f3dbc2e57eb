//! Hook API: value types and handler traits for mod authors.
//!
//! This crate defines the interface between the host engine, the hook registry
//! and extensions. It has no dependency on forge-rs-hooks or on the host.

use serde::{Deserialize, Serialize};

// ─── Types ───────────────────────────────────────────────────────────────────

/// Numeric item identifier as assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

/// Numeric block identifier as assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub u32);

/// A stack of items: what the host hands around for inventories and drops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: ItemId,
    pub count: u32,
    /// Damage value, doubles as the variant selector (dye colors, wool...).
    #[serde(default)]
    pub damage: u32,
}

impl ItemStack {
    /// A single item with damage 0.
    pub fn new(item: ItemId) -> Self {
        Self {
            item,
            count: 1,
            damage: 0,
        }
    }

    pub fn with_count(item: ItemId, count: u32) -> Self {
        Self {
            item,
            count,
            damage: 0,
        }
    }

    pub fn with_damage(item: ItemId, count: u32, damage: u32) -> Self {
        Self {
            item,
            count,
            damage,
        }
    }

    /// Same item and damage value; stack sizes are ignored.
    pub fn is_item_equal(&self, other: &ItemStack) -> bool {
        self.item == other.item && self.damage == other.damage
    }
}

/// Block position in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Player snapshot passed to handlers.
#[derive(Debug, Clone)]
pub struct HookPlayer {
    pub name: String,
    pub position: (f64, f64, f64),
    /// Item the player is holding, if any.
    pub current_item: Option<ItemStack>,
}

/// Outcome of trying to sleep in a bed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepStatus {
    Ok,
    NotPossibleHere,
    NotPossibleNow,
    TooFarAway,
    OtherProblem,
}

/// Narrow view of the host world that handlers may read and modify.
pub trait HookWorld {
    fn block_id(&self, pos: BlockPos) -> BlockId;
    fn block_metadata(&self, pos: BlockPos) -> u8;
    /// Replace a block. Returns `false` if the host refused the change.
    fn set_block_with_metadata(&mut self, pos: BlockPos, block: BlockId, metadata: u8) -> bool;
}

// ─── Handler traits ──────────────────────────────────────────────────────────

/// Fills buckets from custom liquids.
pub trait BucketHandler {
    /// Return the filled bucket if this handler owns the liquid at `pos`.
    fn fill_custom_bucket(&mut self, world: &mut dyn HookWorld, pos: BlockPos)
        -> Option<ItemStack>;
}

/// Overrides bed behavior.
pub trait SleepHandler {
    /// Return `Some` to decide the outcome, `None` to let the next handler (or
    /// the host) decide.
    fn sleep_in_bed_at(&mut self, player: &HookPlayer, pos: BlockPos) -> Option<SleepStatus>;
}

/// Reacts to bonemeal used on a block.
pub trait BonemealHandler {
    /// Return `true` if the bonemeal was consumed.
    fn on_use_bonemeal(&mut self, world: &mut dyn HookWorld, block: BlockId, pos: BlockPos)
        -> bool;
}

/// Reacts to a hoe used on a block.
pub trait HoeHandler {
    /// Return `true` if the hoe use was handled (the tool takes damage).
    fn on_use_hoe(
        &mut self,
        stack: &ItemStack,
        player: &HookPlayer,
        world: &mut dyn HookWorld,
        pos: BlockPos,
    ) -> bool;
}

/// Notified when the held item of a player breaks.
pub trait DestroyToolHandler {
    fn on_destroy_current_item(&mut self, player: &HookPlayer, stack: &ItemStack);
}

/// Notified when an item is taken from a crafting result slot.
pub trait CraftingHandler {
    /// `grid` is the crafting matrix at the time of crafting, row-major.
    fn on_taken_from_crafting(
        &mut self,
        player: &HookPlayer,
        stack: &ItemStack,
        grid: &[Option<ItemStack>],
    );
}

/// Observer of ore dictionary registrations.
pub trait OreHandler {
    fn register_ore(&mut self, ore_class: &str, ore: &ItemStack);
}

// ─── Tests ───────────────────────────────────────────────────────────────────
