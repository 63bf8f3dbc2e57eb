//! Ore dictionary: category name → item variants.
//!
//! Lets recipes accept any mod's copper ingot instead of one specific item.
//! Observers registered through [`OreDictionary::register_ore_handler`] see
//! every registration, including the ones made before they subscribed.

use std::collections::BTreeMap;

use forge_rs_api::{ItemStack, OreHandler};
use tracing::debug;

use crate::ore_query::Slot;

#[derive(Default)]
pub struct OreDictionary {
    /// Sorted by category name; variants keep insertion order.
    ores: BTreeMap<String, Vec<ItemStack>>,
    handlers: Vec<Box<dyn OreHandler>>,
}

impl OreDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to ore registrations. The handler is immediately replayed
    /// every ore registered so far.
    pub fn register_ore_handler(&mut self, mut handler: Box<dyn OreHandler>) {
        for (class, stacks) in &self.ores {
            for stack in stacks {
                handler.register_ore(class, stack);
            }
        }
        self.handlers.push(handler);
        debug!("Registered ore handler #{}", self.handlers.len());
    }

    /// Add `ore` to `ore_class` and notify every handler.
    pub fn register_ore(&mut self, ore_class: &str, ore: ItemStack) {
        debug!(
            "Ore {ore_class}: item {} damage {}",
            ore.item.0, ore.damage
        );
        for handler in &mut self.handlers {
            handler.register_ore(ore_class, &ore);
        }
        self.ores.entry(ore_class.to_string()).or_default().push(ore);
    }

    /// Variants registered under `ore_class`, or `None` if the class is unknown.
    pub fn ore_class(&self, ore_class: &str) -> Option<&[ItemStack]> {
        self.ores.get(ore_class).map(Vec::as_slice)
    }

    /// All category names, sorted.
    pub fn ore_classes(&self) -> impl Iterator<Item = &str> {
        self.ores.keys().map(String::as_str)
    }

    /// Every category that contains a stack item-equal to `stack`.
    pub fn ore_classes_of(&self, stack: &ItemStack) -> Vec<&str> {
        self.ores
            .iter()
            .filter(|(_, stacks)| stacks.iter().any(|s| s.is_item_equal(stack)))
            .map(|(class, _)| class.as_str())
            .collect()
    }

    /// Pattern slot expanding to every variant of `ore_class`. Unknown classes
    /// expand to nothing, so the whole query yields no combinations.
    pub fn slot(&self, ore_class: &str) -> Slot<'_, ItemStack> {
        Slot::Expand(self.ore_class(ore_class).unwrap_or(&[]))
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}
