mod config;
mod mods;
mod report;

use config::ForgeConfig;
use forge_rs_hooks::ForgeHooks;
use tracing::{error, info};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "forge.toml".to_string());

    let config = match ForgeConfig::load(&path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load {path}: {e}");
            std::process::exit(1);
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!(
        "forge-host v{} providing hook API {}",
        env!("CARGO_PKG_VERSION"),
        config.forge.version
    );

    let mut hooks = ForgeHooks::with_version(config.forge.version);
    hooks.register_ore_handler(Box::new(mods::OreLogger));

    if let Err(e) = mods::check_mods(&hooks, &config.mods) {
        error!("{e}");
        std::process::exit(1);
    }
    info!("{} mod(s) passed the version check", config.mods.len());

    if let Err(e) = mods::apply_dungeon(&mut hooks, &config.dungeon) {
        error!("Invalid dungeon configuration: {e}");
        std::process::exit(1);
    }
    mods::register_ores(&mut hooks, &config.ores);

    for class in hooks.ore_dictionary().ore_classes() {
        let count = hooks.ore_class(class).map_or(0, |ores| ores.len());
        info!("Ore class {class}: {count} variant(s)");
    }

    let dungeon = hooks.dungeon();
    info!(
        "Dungeon tables: {} mob(s), {} loot entries, {} tries per chest",
        dungeon.dungeon_mobs().len(),
        dungeon.dungeon_loot().len(),
        dungeon.dungeon_loot_tries()
    );

    for report in report::roll_dungeons(&hooks, config.dungeon.seed, config.dungeon.samples) {
        match serde_json::to_string(&report) {
            Ok(json) => info!("{json}"),
            Err(e) => error!("Failed to serialize dungeon {}: {e}", report.index),
        }
    }
}
