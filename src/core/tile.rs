//! Tile module - a single mergeable board value
//!
//! A tile holds a power-of-two value and a per-turn `merged` flag. The flag
//! blocks a tile that was produced by a merge from merging again in the same
//! move; it is cleared across the whole board before each spawn.

/// A numbered tile on the board. Values are always powers of two >= 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    value: u32,
    merged: bool,
}

impl Tile {
    pub fn new(value: u32) -> Self {
        debug_assert!(value >= 2 && value.is_power_of_two());
        Self {
            value,
            merged: false,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn has_merged(&self) -> bool {
        self.merged
    }

    /// Whether `other` may merge into this tile: equal values and neither
    /// side already merged this turn.
    pub fn can_merge_with(&self, other: &Tile) -> bool {
        !self.merged && !other.merged && self.value == other.value
    }

    /// Absorb `other` into this tile, doubling the value and marking this
    /// tile merged. Returns the new value, or `None` (and no mutation) if
    /// the pair is not mergeable.
    pub fn merge_from(&mut self, other: Tile) -> Option<u32> {
        if !self.can_merge_with(&other) {
            return None;
        }
        self.value *= 2;
        self.merged = true;
        Some(self.value)
    }

    /// Reset the per-turn merge flag.
    pub fn clear_merged(&mut self) {
        self.merged = false;
    }
}
