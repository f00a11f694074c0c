//! Fixed-capacity recipe catalog.

use crate::recipe::Recipe;
use log::debug;

/// Ordered collection of up to [`Catalog::CAPACITY`] recipe slots.
///
/// Slots are addressed by index; a slot is either empty or holds one recipe.
/// No two occupied slots share a name (case-sensitive). The catalog never
/// grows beyond its fixed capacity: additions past that point are silent
/// no-ops, not errors.
#[derive(Debug, Default)]
pub struct Catalog {
    slots: [Option<Recipe>; Catalog::CAPACITY],
}

impl Catalog {
    /// Number of recipe slots.
    pub const CAPACITY: usize = 3;

    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a recipe into the lowest-index empty slot.
    ///
    /// Returns `false` without mutation when every slot is occupied or an
    /// occupied slot already holds a recipe with the same name.
    pub fn add(&mut self, recipe: Recipe) -> bool {
        if self
            .slots
            .iter()
            .flatten()
            .any(|existing| existing.name() == recipe.name())
        {
            debug!("catalog already holds a recipe named {:?}", recipe.name());
            return false;
        }

        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(recipe);
                true
            }
            None => {
                debug!("catalog full, {:?} not added", recipe.name());
                false
            }
        }
    }

    /// Clears the slot at `index`, returning the removed recipe's name.
    ///
    /// Deleting an empty slot or an out-of-range index is a tolerated no-op
    /// returning `None`.
    pub fn delete(&mut self, index: usize) -> Option<String> {
        let removed = self.slots.get_mut(index)?.take()?;
        Some(removed.name().to_string())
    }

    /// Replaces the occupied slot at `index` with `recipe` entirely.
    ///
    /// Returns the new recipe's name, or `None` without mutation when the
    /// slot is empty or out of range. Unlike [`add`](Catalog::add), no
    /// duplicate-name check applies.
    pub fn replace(&mut self, index: usize, recipe: Recipe) -> Option<String> {
        let slot = self.slots.get_mut(index)?;
        if slot.is_none() {
            return None;
        }
        let name = recipe.name().to_string();
        *slot = Some(recipe);
        Some(name)
    }

    /// The recipe occupying slot `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.slots.get(index)?.as_ref()
    }

    /// Fixed-length view of all slots in index order, empty slots included.
    pub fn slots(&self) -> &[Option<Recipe>; Catalog::CAPACITY] {
        &self.slots
    }
}
