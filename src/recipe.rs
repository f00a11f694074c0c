//! Beverage recipes and the fixed ingredient set.

use crate::error::RecipeError;
use crate::quantity::parse_units;
use serde::Serialize;
use std::fmt;

/// The four ingredients every machine stocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Ingredient {
    Coffee,
    Milk,
    Sugar,
    Chocolate,
}

impl Ingredient {
    /// All ingredients in display order.
    pub const ALL: [Ingredient; 4] = [
        Ingredient::Coffee,
        Ingredient::Milk,
        Ingredient::Sugar,
        Ingredient::Chocolate,
    ];

    /// Display label, also used in the inventory report.
    pub fn label(&self) -> &'static str {
        match self {
            Ingredient::Coffee => "Coffee",
            Ingredient::Milk => "Milk",
            Ingredient::Sugar => "Sugar",
            Ingredient::Chocolate => "Chocolate",
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named beverage formula: ingredient requirements plus a price.
///
/// All numeric fields are set from text and validated through the shared
/// quantity parser; a rejected token leaves the field at its previous value.
/// Recipes hold no reference to the catalog or the inventory.
///
/// # Equality
///
/// Two recipes are equal iff every field matches, including the name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Recipe {
    name: String,
    price: u32,
    coffee: u32,
    milk: u32,
    sugar: u32,
    chocolate: u32,
}

impl Recipe {
    /// Sets the recipe name, stored verbatim.
    ///
    /// Empty or whitespace-only input is ignored and the previous name kept;
    /// any further name policy (uniqueness) belongs to the catalog.
    pub fn set_name(&mut self, name: &str) {
        if !name.trim().is_empty() {
            self.name = name.to_string();
        }
    }

    /// Sets the price from a text token.
    pub fn set_price(&mut self, token: &str) -> Result<(), RecipeError> {
        self.price = parse_units(token).map_err(|source| RecipeError {
            field: "price",
            source,
        })?;
        Ok(())
    }

    /// Sets the required amount of one ingredient from a text token.
    pub fn set_amount(&mut self, ingredient: Ingredient, token: &str) -> Result<(), RecipeError> {
        let field = match ingredient {
            Ingredient::Coffee => "coffee amount",
            Ingredient::Milk => "milk amount",
            Ingredient::Sugar => "sugar amount",
            Ingredient::Chocolate => "chocolate amount",
        };
        let units = parse_units(token).map_err(|source| RecipeError { field, source })?;

        match ingredient {
            Ingredient::Coffee => self.coffee = units,
            Ingredient::Milk => self.milk = units,
            Ingredient::Sugar => self.sugar = units,
            Ingredient::Chocolate => self.chocolate = units,
        }
        Ok(())
    }

    /// The recipe name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The price in whole currency units.
    pub fn price(&self) -> u32 {
        self.price
    }

    /// The required amount of one ingredient.
    pub fn amount(&self, ingredient: Ingredient) -> u32 {
        match ingredient {
            Ingredient::Coffee => self.coffee,
            Ingredient::Milk => self.milk,
            Ingredient::Sugar => self.sugar,
            Ingredient::Chocolate => self.chocolate,
        }
    }
}
