//! Vanilla item and block ids used by the default tables.

pub mod items {
    use forge_rs_api::ItemId;

    pub const IRON_SHOVEL: ItemId = ItemId(256);
    pub const IRON_PICKAXE: ItemId = ItemId(257);
    pub const IRON_AXE: ItemId = ItemId(258);
    pub const DIAMOND: ItemId = ItemId(264);
    pub const IRON_INGOT: ItemId = ItemId(265);
    pub const WOODEN_SHOVEL: ItemId = ItemId(269);
    pub const WOODEN_PICKAXE: ItemId = ItemId(270);
    pub const WOODEN_AXE: ItemId = ItemId(271);
    pub const STONE_SHOVEL: ItemId = ItemId(273);
    pub const STONE_PICKAXE: ItemId = ItemId(274);
    pub const STONE_AXE: ItemId = ItemId(275);
    pub const DIAMOND_SHOVEL: ItemId = ItemId(277);
    pub const DIAMOND_PICKAXE: ItemId = ItemId(278);
    pub const DIAMOND_AXE: ItemId = ItemId(279);
    pub const GOLDEN_SHOVEL: ItemId = ItemId(284);
    pub const GOLDEN_PICKAXE: ItemId = ItemId(285);
    pub const GOLDEN_AXE: ItemId = ItemId(286);
    pub const STRING: ItemId = ItemId(287);
    pub const GUNPOWDER: ItemId = ItemId(289);
    pub const WHEAT_SEEDS: ItemId = ItemId(295);
    pub const WHEAT: ItemId = ItemId(296);
    pub const BREAD: ItemId = ItemId(297);
    pub const GOLDEN_APPLE: ItemId = ItemId(322);
    pub const BUCKET: ItemId = ItemId(325);
    pub const SADDLE: ItemId = ItemId(329);
    pub const REDSTONE: ItemId = ItemId(331);
    pub const DYE: ItemId = ItemId(351);
    pub const RECORD_13: ItemId = ItemId(2256);
    pub const RECORD_CAT: ItemId = ItemId(2257);

    /// Dye damage value for cocoa beans.
    pub const DYE_COCOA: u32 = 3;
}

pub mod blocks {
    use forge_rs_api::BlockId;

    pub const STONE: BlockId = BlockId(1);
    pub const GRASS: BlockId = BlockId(2);
    pub const DIRT: BlockId = BlockId(3);
    pub const COBBLESTONE: BlockId = BlockId(4);
    pub const PLANKS: BlockId = BlockId(5);
    pub const SAND: BlockId = BlockId(12);
    pub const GRAVEL: BlockId = BlockId(13);
    pub const GOLD_ORE: BlockId = BlockId(14);
    pub const IRON_ORE: BlockId = BlockId(15);
    pub const COAL_ORE: BlockId = BlockId(16);
    pub const LOG: BlockId = BlockId(17);
    pub const LAPIS_ORE: BlockId = BlockId(21);
    pub const LAPIS_BLOCK: BlockId = BlockId(22);
    pub const SANDSTONE: BlockId = BlockId(24);
    pub const YELLOW_FLOWER: BlockId = BlockId(37);
    pub const RED_FLOWER: BlockId = BlockId(38);
    pub const GOLD_BLOCK: BlockId = BlockId(41);
    pub const IRON_BLOCK: BlockId = BlockId(42);
    pub const DOUBLE_SLAB: BlockId = BlockId(43);
    pub const SLAB: BlockId = BlockId(44);
    pub const BOOKSHELF: BlockId = BlockId(47);
    pub const MOSSY_COBBLESTONE: BlockId = BlockId(48);
    pub const OBSIDIAN: BlockId = BlockId(49);
    pub const CHEST: BlockId = BlockId(54);
    pub const DIAMOND_ORE: BlockId = BlockId(56);
    pub const DIAMOND_BLOCK: BlockId = BlockId(57);
    pub const FARMLAND: BlockId = BlockId(60);
    pub const REDSTONE_ORE: BlockId = BlockId(73);
    pub const LIT_REDSTONE_ORE: BlockId = BlockId(74);
    pub const SNOW_LAYER: BlockId = BlockId(78);
    pub const ICE: BlockId = BlockId(79);
    pub const SNOW: BlockId = BlockId(80);
    pub const CLAY: BlockId = BlockId(82);
    pub const PUMPKIN: BlockId = BlockId(86);
    pub const NETHERRACK: BlockId = BlockId(87);
    pub const SOUL_SAND: BlockId = BlockId(88);
    pub const LIT_PUMPKIN: BlockId = BlockId(91);
    pub const MYCELIUM: BlockId = BlockId(110);
}
