//! Ragged attribute access
//!
//! An item's four attribute lists are parallel but may differ in length. The
//! element count is the longest list; reading past the end of a shorter list
//! yields `None`, which downstream transforms treat as "randomize".

use super::{Color, Item, Vector3};
use crate::error::{ArenaError, Result};

/// Number of placements described by an item
pub fn element_count(item: &Item) -> usize {
    item.positions
        .len()
        .max(item.rotations.len())
        .max(item.sizes.len())
        .max(item.colors.len())
}

/// Element `index` of one attribute list, or `None` when unspecified
#[inline]
pub fn field<T: Copy>(sequence: &[Option<T>], index: usize) -> Option<T> {
    sequence.get(index).copied().flatten()
}

/// Attributes of a single placement, each possibly unspecified
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    pub index: usize,
    pub position: Option<Vector3>,
    pub rotation: Option<f32>,
    pub size: Option<Vector3>,
    pub color: Option<Color>,
}

impl Placement {
    pub fn of(item: &Item, index: usize) -> Self {
        Self {
            index,
            position: field(&item.positions, index),
            rotation: field(&item.rotations, index),
            size: field(&item.sizes, index),
            color: field(&item.colors, index),
        }
    }

    /// Size is structurally required for volumetric shapes
    pub fn require_size(&self, item: &Item) -> Result<Vector3> {
        self.size.ok_or_else(|| ArenaError::MissingField {
            item: item.name.clone(),
            field: "size",
            index: self.index,
        })
    }
}

impl Item {
    pub fn element_count(&self) -> usize {
        element_count(self)
    }

    /// All placements of this item, in list order
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        (0..self.element_count()).map(|i| Placement::of(self, i))
    }
}
