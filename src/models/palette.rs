//! Saved palette chips.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Color;

/// Default number of chips a palette holds.
pub const DEFAULT_MAX_CHIPS: usize = 24;

/// Errors from palette edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The palette already holds its maximum number of chips.
    #[error("palette is full ({0} chips)")]
    Full(usize),
}

/// An ordered list of saved colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    chips: Vec<Color>,
    capacity: usize,
}

impl Palette {
    /// Creates an empty palette holding at most `capacity` chips.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            chips: Vec::new(),
            capacity,
        }
    }

    /// Appends a chip and returns its index. Duplicates are allowed.
    pub fn add(&mut self, color: Color) -> Result<usize, PaletteError> {
        if self.chips.len() >= self.capacity {
            return Err(PaletteError::Full(self.capacity));
        }
        self.chips.push(color);
        Ok(self.chips.len() - 1)
    }

    /// Removes the chip at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Color> {
        (index < self.chips.len()).then(|| self.chips.remove(index))
    }

    /// Removes every chip.
    pub fn clear(&mut self) {
        self.chips.clear();
    }

    /// Chip at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.chips.get(index).copied()
    }

    /// Number of chips.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chips.len()
    }

    /// True when no chips are saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    /// Maximum number of chips.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates chips in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.chips.iter()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHIPS)
    }
}
