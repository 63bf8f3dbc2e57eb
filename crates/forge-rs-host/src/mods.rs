//! Applies `forge.toml` to a hook registry: mod version gates, dungeon table
//! overrides and ore dictionary entries.

use forge_rs_api::{ItemId, ItemStack, OreHandler};
use forge_rs_hooks::{ForgeHooks, Result};
use tracing::{debug, info, warn};

use crate::config::{DungeonSection, ModEntry, OreEntry};

/// Run the version gate for every declared mod. Stops at the first fatal one.
pub fn check_mods(hooks: &ForgeHooks, mods: &[ModEntry]) -> Result<()> {
    for entry in mods {
        if entry.strict {
            hooks.version_detect_strict(&entry.name, entry.requires)?;
        } else {
            hooks.version_detect(&entry.name, entry.requires)?;
        }
        info!("Mod {} accepted (built against {})", entry.name, entry.requires);
    }
    Ok(())
}

/// Apply dungeon overrides: loot tries, removed mobs, then added mobs and loot.
pub fn apply_dungeon(hooks: &mut ForgeHooks, section: &DungeonSection) -> Result<()> {
    hooks.set_dungeon_loot_tries(section.loot_tries);

    for name in &section.remove_mobs {
        let rarity = hooks.remove_dungeon_mob(name);
        if rarity == 0.0 {
            warn!("Dungeon mob {name} is not registered, nothing to remove");
        }
    }

    for mob in &section.mobs {
        let rarity = hooks.add_dungeon_mob(&mob.name, mob.rarity)?;
        info!("Dungeon mob {} now has rarity {rarity}", mob.name);
    }

    for loot in &section.loot {
        let stack = ItemStack::with_damage(ItemId(loot.item), 1, loot.damage);
        let rarity = hooks.add_dungeon_loot(stack, loot.rarity, loot.min, loot.max)?;
        info!(
            "Dungeon loot {}:{} ({}-{}) now has rarity {rarity}",
            loot.item, loot.damage, loot.min, loot.max
        );
    }

    Ok(())
}

pub fn register_ores(hooks: &mut ForgeHooks, ores: &[OreEntry]) {
    for ore in ores {
        hooks.register_ore(
            &ore.class,
            ItemStack::with_damage(ItemId(ore.item), 1, ore.damage),
        );
    }
}

/// Logs every ore dictionary registration.
pub struct OreLogger;

impl OreHandler for OreLogger {
    fn register_ore(&mut self, ore_class: &str, ore: &ItemStack) {
        debug!("[ore] {ore_class} <- {}:{}", ore.item.0, ore.damage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LootEntry, MobEntry};
    use forge_rs_hooks::{ForgeError, ForgeVersion};

    fn entry(name: &str, requires: ForgeVersion, strict: bool) -> ModEntry {
        ModEntry {
            name: name.into(),
            requires,
            strict,
        }
    }

    #[test]
    fn compatible_mods_pass() {
        let hooks = ForgeHooks::with_version(ForgeVersion::new(3, 3, 7));
        let mods = [
            entry("A", ForgeVersion::new(3, 3, 7), true),
            entry("B", ForgeVersion::new(3, 1, 0), false),
        ];
        assert!(check_mods(&hooks, &mods).is_ok());
    }

    #[test]
    fn first_incompatible_mod_is_fatal() {
        let hooks = ForgeHooks::with_version(ForgeVersion::new(3, 3, 7));
        let mods = [
            entry("A", ForgeVersion::new(3, 3, 0), false),
            entry("B", ForgeVersion::new(3, 1, 0), true),
            entry("C", ForgeVersion::new(4, 0, 0), false),
        ];
        match check_mods(&hooks, &mods) {
            Err(ForgeError::Fatal { mod_name, message }) => {
                assert_eq!(mod_name, "B");
                assert!(message.contains("minor version mismatch"));
            }
            other => panic!("expected fatal error, got {other:?}"),
        }
    }

    #[test]
    fn dungeon_overrides_applied() {
        let mut hooks = ForgeHooks::new();
        let section = DungeonSection {
            loot_tries: 3,
            remove_mobs: vec!["Spider".into(), "Ghast".into()],
            mobs: vec![
                MobEntry {
                    name: "CaveSpider".into(),
                    rarity: 0.5,
                },
                MobEntry {
                    name: "Zombie".into(),
                    rarity: 1.0,
                },
            ],
            loot: vec![LootEntry {
                item: 264,
                damage: 0,
                rarity: 0.05,
                min: 1,
                max: 2,
            }],
            ..DungeonSection::default()
        };
        apply_dungeon(&mut hooks, &section).unwrap();

        let dungeon = hooks.dungeon();
        assert_eq!(dungeon.dungeon_loot_tries(), 3);
        assert!(dungeon.dungeon_mob_rarity("Spider").is_none());
        assert_eq!(dungeon.dungeon_mob_rarity("CaveSpider"), Some(0.5));
        assert_eq!(dungeon.dungeon_mob_rarity("Zombie"), Some(3.0));
        assert_eq!(dungeon.dungeon_loot().len(), 13);
    }

    #[test]
    fn bad_rarity_in_config_is_an_error() {
        let mut hooks = ForgeHooks::new();
        let section = DungeonSection {
            mobs: vec![MobEntry {
                name: "Creeper".into(),
                rarity: 0.0,
            }],
            ..DungeonSection::default()
        };
        assert_eq!(
            apply_dungeon(&mut hooks, &section),
            Err(ForgeError::InvalidRarity { rarity: 0.0 })
        );
    }

    #[test]
    fn infinite_rarity_in_config_is_an_error() {
        let section: DungeonSection = toml::from_str(
            r#"
            [[loot]]
            item = 264
            rarity = inf
            "#,
        )
        .unwrap();
        let mut hooks = ForgeHooks::new();
        let before = hooks.dungeon().dungeon_loot().len();
        assert_eq!(
            apply_dungeon(&mut hooks, &section),
            Err(ForgeError::InvalidRarity {
                rarity: f32::INFINITY
            })
        );
        assert_eq!(hooks.dungeon().dungeon_loot().len(), before);
    }

    #[test]
    fn ores_registered_and_observed() {
        let mut hooks = ForgeHooks::new();
        hooks.register_ore_handler(Box::new(OreLogger));
        register_ores(
            &mut hooks,
            &[
                OreEntry {
                    class: "ingotCopper".into(),
                    item: 5000,
                    damage: 0,
                },
                OreEntry {
                    class: "ingotCopper".into(),
                    item: 5100,
                    damage: 2,
                },
            ],
        );
        let coppers = hooks.ore_class("ingotCopper").unwrap();
        assert_eq!(coppers.len(), 2);
        assert_eq!(coppers[1].damage, 2);
        assert_eq!(hooks.ore_dictionary().handler_count(), 1);
    }
}
