//! The hook registry: handler lists plus every table mods can extend.
//!
//! The host owns one [`ForgeHooks`] and passes it to mods during startup, then
//! calls the dispatch methods from its own event code.

use forge_rs_api::{
    BlockId, BlockPos, BonemealHandler, BucketHandler, CraftingHandler, DestroyToolHandler,
    HoeHandler, HookPlayer, HookWorld, ItemId, ItemStack, OreHandler, SleepHandler, SleepStatus,
};
use rand::Rng;
use tracing::{debug, info};

use crate::dungeon::DungeonTables;
use crate::error::Result;
use crate::grass::{GrassPlant, GrassTables};
use crate::ore_dict::OreDictionary;
use crate::tools::{HarvestCheck, ToolRegistry};
use crate::version::{version_detect, version_detect_strict, ForgeVersion};

// ─── ForgeHooks ──────────────────────────────────────────────────────────────

pub struct ForgeHooks {
    version: ForgeVersion,
    bucket_handlers: Vec<Box<dyn BucketHandler>>,
    sleep_handlers: Vec<Box<dyn SleepHandler>>,
    bonemeal_handlers: Vec<Box<dyn BonemealHandler>>,
    hoe_handlers: Vec<Box<dyn HoeHandler>>,
    destroy_tool_handlers: Vec<Box<dyn DestroyToolHandler>>,
    crafting_handlers: Vec<Box<dyn CraftingHandler>>,
    ore_dict: OreDictionary,
    tools: ToolRegistry,
    dungeon: DungeonTables,
    grass: GrassTables,
}

impl Default for ForgeHooks {
    fn default() -> Self {
        Self::new()
    }
}

impl ForgeHooks {
    /// A registry at [`ForgeVersion::CURRENT`] with the vanilla tables.
    pub fn new() -> Self {
        Self::with_version(ForgeVersion::CURRENT)
    }

    /// A registry reporting `version` to mods, with the vanilla tables.
    pub fn with_version(version: ForgeVersion) -> Self {
        Self {
            version,
            bucket_handlers: Vec::new(),
            sleep_handlers: Vec::new(),
            bonemeal_handlers: Vec::new(),
            hoe_handlers: Vec::new(),
            destroy_tool_handlers: Vec::new(),
            crafting_handlers: Vec::new(),
            ore_dict: OreDictionary::new(),
            tools: ToolRegistry::vanilla(),
            dungeon: DungeonTables::vanilla(),
            grass: GrassTables::vanilla(),
        }
    }

    pub fn version(&self) -> ForgeVersion {
        self.version
    }

    // --- Version gate ---

    /// Fail unless this registry's version satisfies `required`. A newer minor
    /// version only warns.
    pub fn version_detect(&self, mod_name: &str, required: ForgeVersion) -> Result<()> {
        version_detect(mod_name, required, self.version)
    }

    /// Fail unless this registry's version has exactly `required`'s major and
    /// minor and at least its revision.
    pub fn version_detect_strict(&self, mod_name: &str, required: ForgeVersion) -> Result<()> {
        version_detect_strict(mod_name, required, self.version)
    }

    // --- Registration ---

    pub fn register_custom_bucket_handler(&mut self, handler: Box<dyn BucketHandler>) {
        self.bucket_handlers.push(handler);
        debug!("Registered bucket handler #{}", self.bucket_handlers.len());
    }

    pub fn register_sleep_handler(&mut self, handler: Box<dyn SleepHandler>) {
        self.sleep_handlers.push(handler);
        debug!("Registered sleep handler #{}", self.sleep_handlers.len());
    }

    pub fn register_bonemeal_handler(&mut self, handler: Box<dyn BonemealHandler>) {
        self.bonemeal_handlers.push(handler);
        debug!("Registered bonemeal handler #{}", self.bonemeal_handlers.len());
    }

    pub fn register_hoe_handler(&mut self, handler: Box<dyn HoeHandler>) {
        self.hoe_handlers.push(handler);
        debug!("Registered hoe handler #{}", self.hoe_handlers.len());
    }

    pub fn register_destroy_tool_handler(&mut self, handler: Box<dyn DestroyToolHandler>) {
        self.destroy_tool_handlers.push(handler);
        debug!(
            "Registered destroy tool handler #{}",
            self.destroy_tool_handlers.len()
        );
    }

    pub fn register_crafting_handler(&mut self, handler: Box<dyn CraftingHandler>) {
        self.crafting_handlers.push(handler);
        debug!("Registered crafting handler #{}", self.crafting_handlers.len());
    }

    /// Subscribe to the ore dictionary. The handler is replayed every ore
    /// registered so far.
    pub fn register_ore_handler(&mut self, handler: Box<dyn OreHandler>) {
        self.ore_dict.register_ore_handler(handler);
    }

    // --- Dispatch (called by the host) ---

    /// First handler that recognises the liquid at `pos` fills the bucket.
    pub fn fill_custom_bucket(
        &mut self,
        world: &mut dyn HookWorld,
        pos: BlockPos,
    ) -> Option<ItemStack> {
        self.bucket_handlers
            .iter_mut()
            .find_map(|handler| handler.fill_custom_bucket(world, pos))
    }

    /// First handler with an opinion decides; `None` means the host's bed
    /// logic applies.
    pub fn sleep_in_bed_at(&mut self, player: &HookPlayer, pos: BlockPos) -> Option<SleepStatus> {
        self.sleep_handlers
            .iter_mut()
            .find_map(|handler| handler.sleep_in_bed_at(player, pos))
    }

    /// Returns `true` once a handler consumed the bonemeal; later handlers are
    /// skipped.
    pub fn on_use_bonemeal(
        &mut self,
        world: &mut dyn HookWorld,
        block: BlockId,
        pos: BlockPos,
    ) -> bool {
        self.bonemeal_handlers
            .iter_mut()
            .any(|handler| handler.on_use_bonemeal(world, block, pos))
    }

    /// Returns `true` once a handler handled the hoe use; later handlers are
    /// skipped.
    pub fn on_use_hoe(
        &mut self,
        stack: &ItemStack,
        player: &HookPlayer,
        world: &mut dyn HookWorld,
        pos: BlockPos,
    ) -> bool {
        self.hoe_handlers
            .iter_mut()
            .any(|handler| handler.on_use_hoe(stack, player, world, pos))
    }

    /// Every handler is told.
    pub fn on_destroy_current_item(&mut self, player: &HookPlayer, stack: &ItemStack) {
        for handler in &mut self.destroy_tool_handlers {
            handler.on_destroy_current_item(player, stack);
        }
    }

    /// Every handler is told.
    pub fn on_taken_from_crafting(
        &mut self,
        player: &HookPlayer,
        stack: &ItemStack,
        grid: &[Option<ItemStack>],
    ) {
        for handler in &mut self.crafting_handlers {
            handler.on_taken_from_crafting(player, stack, grid);
        }
    }

    // --- Ore dictionary ---

    pub fn register_ore(&mut self, ore_class: &str, ore: ItemStack) {
        self.ore_dict.register_ore(ore_class, ore);
    }

    pub fn ore_class(&self, ore_class: &str) -> Option<&[ItemStack]> {
        self.ore_dict.ore_class(ore_class)
    }

    pub fn ore_dictionary(&self) -> &OreDictionary {
        &self.ore_dict
    }

    // --- Tools ---

    pub fn set_tool_class(&mut self, tool: ItemId, tool_class: &str, harvest_level: u32) {
        self.tools.set_tool_class(tool, tool_class, harvest_level);
    }

    /// `metadata` of `None` covers all 16 variants of the block.
    pub fn set_block_harvest_level(
        &mut self,
        block: BlockId,
        metadata: Option<u8>,
        tool_class: &str,
        harvest_level: u32,
    ) {
        self.tools
            .set_block_harvest_level(block, metadata, tool_class, harvest_level);
    }

    pub fn remove_block_effectiveness(
        &mut self,
        block: BlockId,
        metadata: Option<u8>,
        tool_class: &str,
    ) {
        self.tools
            .remove_block_effectiveness(block, metadata, tool_class);
    }

    pub fn can_harvest_block(
        &self,
        block: BlockId,
        metadata: u8,
        held: Option<&ItemStack>,
    ) -> HarvestCheck {
        self.tools.can_harvest_block(block, metadata, held)
    }

    pub fn is_tool_effective(&self, held: &ItemStack, block: BlockId, metadata: u8) -> bool {
        self.tools.is_tool_effective(held, block, metadata)
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    // --- Dungeons ---

    pub fn set_dungeon_loot_tries(&mut self, tries: u32) {
        info!("Dungeon chests now get {tries} loot tries");
        self.dungeon.set_dungeon_loot_tries(tries);
    }

    pub fn dungeon_loot_tries(&self) -> u32 {
        self.dungeon.dungeon_loot_tries()
    }

    pub fn add_dungeon_mob(&mut self, name: &str, rarity: f32) -> Result<f32> {
        self.dungeon.add_dungeon_mob(name, rarity)
    }

    pub fn remove_dungeon_mob(&mut self, name: &str) -> f32 {
        self.dungeon.remove_dungeon_mob(name)
    }

    pub fn random_dungeon_mob<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.dungeon.random_dungeon_mob(rng)
    }

    pub fn add_dungeon_loot(
        &mut self,
        stack: ItemStack,
        rarity: f32,
        min_count: u32,
        max_count: u32,
    ) -> Result<f32> {
        self.dungeon
            .add_dungeon_loot(stack, rarity, min_count, max_count)
    }

    pub fn add_dungeon_loot_single(&mut self, stack: ItemStack, rarity: f32) -> Result<f32> {
        self.dungeon.add_dungeon_loot_single(stack, rarity)
    }

    pub fn remove_dungeon_loot(&mut self, stack: &ItemStack, range: Option<(u32, u32)>) -> f32 {
        self.dungeon.remove_dungeon_loot(stack, range)
    }

    pub fn random_dungeon_loot<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<ItemStack> {
        self.dungeon.random_dungeon_loot(rng)
    }

    pub fn roll_dungeon_chest<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<ItemStack> {
        self.dungeon.roll_dungeon_chest(rng)
    }

    pub fn dungeon(&self) -> &DungeonTables {
        &self.dungeon
    }

    // --- Grass ---

    pub fn add_grass_plant(&mut self, block: BlockId, metadata: u8, probability: u32) -> Result<f32> {
        self.grass.add_grass_plant(block, metadata, probability)
    }

    pub fn add_grass_seed(
        &mut self,
        item: ItemId,
        damage: u32,
        quantity: u32,
        probability: u32,
    ) -> Result<f32> {
        self.grass
            .add_grass_seed(item, damage, quantity, probability)
    }

    pub fn random_grass_plant<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<GrassPlant> {
        self.grass.random_grass_plant(rng)
    }

    pub fn random_grass_seed<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<ItemStack> {
        self.grass.random_grass_seed(rng)
    }

    pub fn grass(&self) -> &GrassTables {
        &self.grass
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
