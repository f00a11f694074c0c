//! Ingredient stock shared by all recipes.
//!
//! Counters never go negative: restocks validate every token before any
//! counter moves, and debits require a prior sufficiency check.

use crate::error::InventoryError;
use crate::quantity::parse_units;
use crate::recipe::{Ingredient, Recipe};
use serde::Serialize;
use std::fmt;

/// Mutable stock of the four ingredients.
///
/// A fresh inventory starts at [`Inventory::DEFAULT_STOCK`] units of each
/// ingredient. All mutation goes through [`add`](Inventory::add) and
/// [`consume`](Inventory::consume); there is no way to drive a counter
/// negative through the public API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inventory {
    coffee: u32,
    milk: u32,
    sugar: u32,
    chocolate: u32,
}

impl Inventory {
    /// Starting stock of each ingredient in a fresh inventory.
    pub const DEFAULT_STOCK: u32 = 15;

    /// Creates an inventory with the default stock of every ingredient.
    pub fn new() -> Self {
        Inventory {
            coffee: Self::DEFAULT_STOCK,
            milk: Self::DEFAULT_STOCK,
            sugar: Self::DEFAULT_STOCK,
            chocolate: Self::DEFAULT_STOCK,
        }
    }

    /// Creates an inventory with explicit per-ingredient stock.
    pub fn with_stock(coffee: u32, milk: u32, sugar: u32, chocolate: u32) -> Self {
        Inventory {
            coffee,
            milk,
            sugar,
            chocolate,
        }
    }

    /// Current stock of one ingredient.
    pub fn stock(&self, ingredient: Ingredient) -> u32 {
        match ingredient {
            Ingredient::Coffee => self.coffee,
            Ingredient::Milk => self.milk,
            Ingredient::Sugar => self.sugar,
            Ingredient::Chocolate => self.chocolate,
        }
    }

    fn stock_mut(&mut self, ingredient: Ingredient) -> &mut u32 {
        match ingredient {
            Ingredient::Coffee => &mut self.coffee,
            Ingredient::Milk => &mut self.milk,
            Ingredient::Sugar => &mut self.sugar,
            Ingredient::Chocolate => &mut self.chocolate,
        }
    }

    /// Adds stock from four text tokens, one per ingredient.
    ///
    /// All four tokens are parsed before any counter is touched. If any
    /// token is non-numeric or negative the whole call fails with an
    /// [`InventoryError`] naming the first offending ingredient, and no
    /// counter is modified.
    pub fn add(
        &mut self,
        coffee: &str,
        milk: &str,
        sugar: &str,
        chocolate: &str,
    ) -> Result<(), InventoryError> {
        let parse = |ingredient: Ingredient, token: &str| {
            parse_units(token).map_err(|source| InventoryError { ingredient, source })
        };

        let coffee = parse(Ingredient::Coffee, coffee)?;
        let milk = parse(Ingredient::Milk, milk)?;
        let sugar = parse(Ingredient::Sugar, sugar)?;
        let chocolate = parse(Ingredient::Chocolate, chocolate)?;

        self.coffee += coffee;
        self.milk += milk;
        self.sugar += sugar;
        self.chocolate += chocolate;
        Ok(())
    }

    /// Returns `true` if every counter covers the recipe's requirement.
    ///
    /// Pure query, no mutation.
    pub fn enough_for(&self, recipe: &Recipe) -> bool {
        Ingredient::ALL
            .iter()
            .all(|&ingredient| self.stock(ingredient) >= recipe.amount(ingredient))
    }

    /// Debits each counter by the recipe's requirement.
    ///
    /// Callers must check [`enough_for`](Inventory::enough_for) first; the
    /// purchase path does. Debug builds assert the precondition.
    pub fn consume(&mut self, recipe: &Recipe) {
        debug_assert!(self.enough_for(recipe), "consume without sufficiency check");

        for &ingredient in &Ingredient::ALL {
            *self.stock_mut(ingredient) -= recipe.amount(ingredient);
        }
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Inventory {
    /// Renders the stock report: one `"<Label>: <count>"` line per
    /// ingredient, newline-terminated, in fixed order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &ingredient in &Ingredient::ALL {
            writeln!(f, "{}: {}", ingredient, self.stock(ingredient))?;
        }
        Ok(())
    }
}
