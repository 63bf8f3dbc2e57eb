//! Lazy recipe permutation generator.
//!
//! A pattern is a fixed-length list of slots. Each slot is either a constant or
//! a list of alternatives; the query yields the Cartesian product over all
//! alternative lists, one `Vec` per combination, constants held in place.

use std::iter::FusedIterator;

/// One position of a recipe pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<'a, T> {
    /// Copied into every combination.
    Fixed(T),
    /// Expanded to each alternative in turn.
    Expand(&'a [T]),
}

/// A restartable query over every expansion of a pattern.
#[derive(Debug, Clone)]
pub struct OreQuery<'a, T> {
    pattern: Vec<Slot<'a, T>>,
}

/// Build a query that expands every [`Slot::Expand`] in `pattern`.
pub fn generate_recipes<'a, T: Clone>(pattern: Vec<Slot<'a, T>>) -> OreQuery<'a, T> {
    OreQuery::new(pattern)
}

impl<'a, T: Clone> OreQuery<'a, T> {
    pub fn new(pattern: Vec<Slot<'a, T>>) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &[Slot<'a, T>] {
        &self.pattern
    }

    /// Number of combinations this query yields, `None` if it does not fit
    /// in a `usize`.
    pub fn combinations(&self) -> Option<usize> {
        let any_empty = self
            .pattern
            .iter()
            .any(|slot| matches!(slot, Slot::Expand(items) if items.is_empty()));
        if any_empty {
            return Some(0);
        }
        self.pattern
            .iter()
            .map(|slot| match slot {
                Slot::Fixed(_) => 1,
                Slot::Expand(items) => items.len(),
            })
            .try_fold(1usize, usize::checked_mul)
    }

    /// A fresh iterator starting from the first combination.
    pub fn iter(&self) -> OreQueryIter<'_, 'a, T> {
        let remaining = self.combinations();
        OreQueryIter {
            pattern: &self.pattern,
            cursors: vec![0; self.pattern.len()],
            done: remaining == Some(0),
            remaining,
        }
    }
}

impl<'q, 'a, T: Clone> IntoIterator for &'q OreQuery<'a, T> {
    type Item = Vec<T>;
    type IntoIter = OreQueryIter<'q, 'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Odometer over the expandable slots of a pattern.
pub struct OreQueryIter<'q, 'a, T> {
    pattern: &'q [Slot<'a, T>],
    /// Current index into each slot; always 0 for fixed slots.
    cursors: Vec<usize>,
    done: bool,
    /// `None` once the count overflowed `usize`.
    remaining: Option<usize>,
}

impl<T: Clone> OreQueryIter<'_, '_, T> {
    fn current(&self) -> Vec<T> {
        self.pattern
            .iter()
            .zip(&self.cursors)
            .map(|(slot, &cursor)| match slot {
                Slot::Fixed(value) => value.clone(),
                Slot::Expand(items) => items[cursor].clone(),
            })
            .collect()
    }

    /// Step the rightmost cursor, carrying leftward. Sets `done` once the
    /// leftmost expandable slot overflows.
    fn advance(&mut self) {
        for (slot, cursor) in self.pattern.iter().zip(self.cursors.iter_mut()).rev() {
            if let Slot::Expand(items) = slot {
                *cursor += 1;
                if *cursor < items.len() {
                    return;
                }
                *cursor = 0;
            }
        }
        self.done = true;
    }
}

impl<T: Clone> Iterator for OreQueryIter<'_, '_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        let combination = self.current();
        self.remaining = self.remaining.map(|n| n.saturating_sub(1));
        self.advance();
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.done, self.remaining) {
            (true, _) => (0, Some(0)),
            (false, Some(n)) => (n, Some(n)),
            (false, None) => (usize::MAX, None),
        }
    }
}

impl<T: Clone> FusedIterator for OreQueryIter<'_, '_, T> {}
