//! Weighted random tables.
//!
//! Entries keep insertion order. Adding a value that is already present sums
//! the weights instead of pushing a second entry.

use rand::Rng;

use crate::error::{ForgeError, Result};

/// A single value and its relative weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedEntry<T> {
    pub weight: f32,
    pub value: T,
}

/// Ordered table of weighted values.
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    entries: Vec<WeightedEntry<T>>,
}

impl<T> Default for WeightedTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> WeightedTable<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add `value`, merging into the first entry for which `same` holds.
    /// Returns the resulting weight of that entry. Weights must stay finite
    /// and positive; a rejected merge leaves the entry untouched.
    pub fn add_by<F>(&mut self, value: T, weight: f32, same: F) -> Result<f32>
    where
        F: Fn(&T, &T) -> bool,
    {
        check_weight(weight)?;

        if let Some(entry) = self.entries.iter_mut().find(|e| same(&e.value, &value)) {
            let merged = entry.weight + weight;
            check_weight(merged)?;
            entry.weight = merged;
            return Ok(merged);
        }

        self.entries.push(WeightedEntry { weight, value });
        Ok(weight)
    }

    /// Remove every entry matching `pred`. Returns the summed weight removed.
    pub fn remove_where<F>(&mut self, mut pred: F) -> f32
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0.0;
        self.entries.retain(|e| {
            if pred(&e.value) {
                removed += e.weight;
                false
            } else {
                true
            }
        });
        removed
    }

    pub fn total_weight(&self) -> f32 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    /// Select one value with probability `weight / total_weight`.
    ///
    /// Returns `None` for an empty table.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        let total = self.total_weight();
        if self.entries.is_empty() || total <= 0.0 {
            return None;
        }

        let mut target = rng.gen::<f32>() * total;
        for entry in &self.entries {
            if target < entry.weight {
                return Some(&entry.value);
            }
            target -= entry.weight;
        }

        // Float rounding can leave a sliver past the last entry.
        self.entries.last().map(|e| &e.value)
    }

    pub fn get_by<F>(&self, pred: F) -> Option<&WeightedEntry<T>>
    where
        F: Fn(&T) -> bool,
    {
        self.entries.iter().find(|e| pred(&e.value))
    }

    pub fn entries(&self) -> &[WeightedEntry<T>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeightedEntry<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: PartialEq> WeightedTable<T> {
    /// Add `value`, merging with an equal value already in the table.
    pub fn add(&mut self, value: T, weight: f32) -> Result<f32> {
        self.add_by(value, weight, |a, b| a == b)
    }
}

fn check_weight(weight: f32) -> Result<()> {
    // Written so NaN fails too.
    if weight.is_finite() && weight > 0.0 {
        Ok(())
    } else {
        Err(ForgeError::InvalidRarity { rarity: weight })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_table_picks_nothing() {
        let table: WeightedTable<&str> = WeightedTable::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(table.pick(&mut rng).is_none());
        assert_eq!(table.total_weight(), 0.0);
    }

    #[test]
    fn duplicate_add_sums_weight() {
        let mut table = WeightedTable::new();
        assert_eq!(table.add("zombie", 2.0).unwrap(), 2.0);
        assert_eq!(table.add("spider", 1.0).unwrap(), 1.0);
        assert_eq!(table.add("zombie", 1.5).unwrap(), 3.5);
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].value, "zombie");
        assert_eq!(table.entries()[0].weight, 3.5);
    }

    #[test]
    fn non_positive_weight_rejected() {
        let mut table = WeightedTable::new();
        assert_eq!(
            table.add("a", 0.0),
            Err(ForgeError::InvalidRarity { rarity: 0.0 })
        );
        assert!(table.add("a", -3.0).is_err());
        assert!(table.add("a", f32::NAN).is_err());
        assert!(table.is_empty());
    }

    #[test]
    fn infinite_weight_rejected() {
        let mut table = WeightedTable::new();
        assert_eq!(
            table.add("a", f32::INFINITY),
            Err(ForgeError::InvalidRarity {
                rarity: f32::INFINITY
            })
        );
        assert!(table.is_empty());

        assert_eq!(table.add("x", f32::MAX).unwrap(), f32::MAX);
        assert_eq!(
            table.add("x", f32::MAX),
            Err(ForgeError::InvalidRarity {
                rarity: f32::INFINITY
            })
        );
        assert_eq!(table.entries()[0].weight, f32::MAX);
    }

    #[test]
    fn remove_where_returns_removed_weight() {
        let mut table = WeightedTable::new();
        table.add(1, 1.0).unwrap();
        table.add(2, 2.0).unwrap();
        table.add(3, 4.0).unwrap();
        assert_eq!(table.remove_where(|v| *v >= 2), 6.0);
        assert_eq!(table.len(), 1);
        assert_eq!(table.remove_where(|v| *v == 9), 0.0);
    }

    #[test]
    fn single_entry_always_picked() {
        let mut table = WeightedTable::new();
        table.add("only", 0.01).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            assert_eq!(table.pick(&mut rng), Some(&"only"));
        }
    }

    #[test]
    fn frequencies_follow_weights() {
        let mut table = WeightedTable::new();
        table.add("skeleton", 1.0).unwrap();
        table.add("zombie", 2.0).unwrap();
        table.add("spider", 1.0).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let samples = 40_000;
        let mut counts = [0u32; 3];
        for _ in 0..samples {
            match *table.pick(&mut rng).unwrap() {
                "skeleton" => counts[0] += 1,
                "zombie" => counts[1] += 1,
                "spider" => counts[2] += 1,
                other => panic!("unexpected pick {other}"),
            }
        }

        let expected = [0.25, 0.5, 0.25];
        for (count, want) in counts.iter().zip(expected) {
            let freq = *count as f64 / samples as f64;
            assert!((freq - want).abs() < 0.02, "freq {freq} vs {want}");
        }
    }
}
