//! # Vending Engine
//!
//! The in-memory core of a self-service beverage vending unit: a bounded
//! recipe catalog, a shared ingredient inventory, and the purchase
//! transaction that turns a recipe selection and a payment into either a
//! dispensed beverage with change or a full refund.
//!
//! ## Design Principles
//!
//! - **Integer money and quantities**: all amounts are non-negative `u32`
//!   values parsed from text through one shared parser
//! - **All-or-nothing mutation**: a rejected restock or recipe edit leaves
//!   state exactly as it was
//! - **Refunds are values, errors are errors**: failed purchases return the
//!   tendered amount; only malformed configuration input raises
//! - **Owned state**: each machine owns its catalog and inventory, so
//!   independent instances coexist and tests need no globals
//!
//! ## Example
//!
//! ```no_run
//! use vending_engine::{Ingredient, Recipe, VendingMachine};
//!
//! let mut recipe = Recipe::default();
//! recipe.set_name("Coffee");
//! recipe.set_amount(Ingredient::Coffee, "3").unwrap();
//! recipe.set_price("50").unwrap();
//!
//! let mut machine = VendingMachine::new();
//! machine.add_recipe(recipe);
//! let change = machine.purchase(0, 75);
//! assert_eq!(change, 25);
//! ```

pub mod catalog;
pub mod error;
pub mod inventory;
pub mod machine;
pub mod quantity;
pub mod recipe;
pub mod script;

pub use catalog::Catalog;
pub use error::{InventoryError, QuantityError, RecipeError, Result, ScriptError};
pub use inventory::Inventory;
pub use machine::VendingMachine;
pub use recipe::{Ingredient, Recipe};
pub use script::{Command, CommandRecord, Receipt, ScriptRunner};
