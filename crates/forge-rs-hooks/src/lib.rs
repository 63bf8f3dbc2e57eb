//! Modification hook registry.
//!
//! Holds the callbacks mods register for game events, the ore dictionary, tool
//! harvesting tables, and the weighted tables used for dungeon and grass
//! generation. The host engine owns a [`ForgeHooks`] and calls into it.

pub mod dungeon;
pub mod error;
pub mod grass;
pub mod ore_dict;
pub mod ore_query;
pub mod registry;
pub mod tools;
pub mod vanilla;
pub mod version;
pub mod weighted;

pub use error::{kill_minecraft, ForgeError, Result};
pub use ore_query::{generate_recipes, OreQuery, Slot};
pub use registry::ForgeHooks;
pub use version::ForgeVersion;
