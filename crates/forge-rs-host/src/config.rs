use forge_rs_hooks::ForgeVersion;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct ForgeConfig {
    #[serde(default)]
    pub forge: ForgeSection,
    pub logging: LoggingSection,
    #[serde(default)]
    pub dungeon: DungeonSection,
    #[serde(default)]
    pub ores: Vec<OreEntry>,
    #[serde(default)]
    pub mods: Vec<ModEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ForgeSection {
    /// Hook API version reported to mods. Defaults to the built-in one.
    #[serde(default)]
    pub version: ForgeVersion,
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct DungeonSection {
    #[serde(default = "default_loot_tries")]
    pub loot_tries: u32,
    /// Seed for the sample dungeons rolled at startup.
    #[serde(default)]
    pub seed: u64,
    /// Number of sample dungeons to roll. 0 = none.
    #[serde(default)]
    pub samples: u32,
    #[serde(default)]
    pub mobs: Vec<MobEntry>,
    #[serde(default)]
    pub remove_mobs: Vec<String>,
    #[serde(default)]
    pub loot: Vec<LootEntry>,
}

fn default_loot_tries() -> u32 {
    forge_rs_hooks::dungeon::DEFAULT_LOOT_TRIES
}

impl Default for DungeonSection {
    fn default() -> Self {
        Self {
            loot_tries: default_loot_tries(),
            seed: 0,
            samples: 0,
            mobs: Vec::new(),
            remove_mobs: Vec::new(),
            loot: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MobEntry {
    pub name: String,
    pub rarity: f32,
}

#[derive(Debug, Deserialize)]
pub struct LootEntry {
    pub item: u32,
    #[serde(default)]
    pub damage: u32,
    pub rarity: f32,
    #[serde(default = "default_count")]
    pub min: u32,
    #[serde(default = "default_count")]
    pub max: u32,
}

fn default_count() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct OreEntry {
    pub class: String,
    pub item: u32,
    #[serde(default)]
    pub damage: u32,
}

/// A mod and the hook API version it was built against.
#[derive(Debug, Deserialize)]
pub struct ModEntry {
    pub name: String,
    pub requires: ForgeVersion,
    #[serde(default)]
    pub strict: bool,
}

impl ForgeConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}
