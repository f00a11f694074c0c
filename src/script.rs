//! Batch command processing for the vending machine.
//!
//! Replays a CSV script of configuration and purchase commands against one
//! machine instance. Records are processed in order, one at a time; rows
//! that fail to parse are logged and skipped so one bad line never aborts
//! the run.

use crate::error::Result;
use crate::machine::VendingMachine;
use crate::recipe::{Ingredient, Recipe};
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::Deserialize;
use std::io::{Read, Write};

/// Raw command record as read from CSV.
///
/// Every column is optional apart from `op`; each operation picks the
/// columns it needs and ignores the rest.
#[derive(Debug, Deserialize)]
pub struct CommandRecord {
    /// Operation: add_recipe, edit_recipe, delete_recipe, restock, purchase
    pub op: String,

    /// Recipe name (add_recipe, edit_recipe)
    pub name: Option<String>,

    /// Ingredient amount tokens, kept as text for downstream validation
    pub coffee: Option<String>,
    pub milk: Option<String>,
    pub sugar: Option<String>,
    pub chocolate: Option<String>,

    /// Recipe price token (add_recipe, edit_recipe)
    pub price: Option<String>,

    /// Catalog slot index (edit_recipe, delete_recipe, purchase)
    pub slot: Option<usize>,

    /// Tendered amount (purchase)
    pub paid: Option<u32>,
}

impl CommandRecord {
    /// Parses the raw record into a typed command.
    ///
    /// Returns `None` if the operation is unknown or a required column is
    /// missing or malformed.
    pub fn parse(&self) -> Option<Command> {
        let op = self.op.trim().to_lowercase();

        match op.as_str() {
            "add_recipe" => Some(Command::AddRecipe(self.build_recipe()?)),
            "edit_recipe" => Some(Command::EditRecipe {
                slot: self.slot?,
                recipe: self.build_recipe()?,
            }),
            "delete_recipe" => Some(Command::DeleteRecipe { slot: self.slot? }),
            "restock" => Some(Command::Restock {
                coffee: self.coffee.clone()?,
                milk: self.milk.clone()?,
                sugar: self.sugar.clone()?,
                chocolate: self.chocolate.clone()?,
            }),
            "purchase" => Some(Command::Purchase {
                slot: self.slot?,
                paid: self.paid?,
            }),
            _ => None,
        }
    }

    /// Builds a recipe from the name, amount, and price columns.
    fn build_recipe(&self) -> Option<Recipe> {
        let mut recipe = Recipe::default();
        recipe.set_name(self.name.as_deref()?);

        let fields = [
            (Ingredient::Coffee, self.coffee.as_deref()?),
            (Ingredient::Milk, self.milk.as_deref()?),
            (Ingredient::Sugar, self.sugar.as_deref()?),
            (Ingredient::Chocolate, self.chocolate.as_deref()?),
        ];
        for (ingredient, token) in fields {
            if let Err(e) = recipe.set_amount(ingredient, token) {
                warn!("recipe {:?} rejected: {}", self.name.as_deref().unwrap_or(""), e);
                return None;
            }
        }
        if let Err(e) = recipe.set_price(self.price.as_deref()?) {
            warn!("recipe {:?} rejected: {}", self.name.as_deref().unwrap_or(""), e);
            return None;
        }
        Some(recipe)
    }
}

/// A parsed command ready to apply to the machine.
#[derive(Debug)]
pub enum Command {
    /// Add a fully-built recipe to the catalog.
    AddRecipe(Recipe),

    /// Replace the recipe in an occupied slot.
    EditRecipe { slot: usize, recipe: Recipe },

    /// Clear a catalog slot.
    DeleteRecipe { slot: usize },

    /// Add ingredient stock; tokens validated by the inventory itself.
    Restock {
        coffee: String,
        milk: String,
        sugar: String,
        chocolate: String,
    },

    /// Attempt a purchase; the outcome becomes a receipt row.
    Purchase { slot: usize, paid: u32 },
}

/// Outcome of one purchase command.
///
/// `returned` is the change on success and the full tendered amount on any
/// rejected transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Selected catalog slot
    pub slot: usize,

    /// Amount tendered
    pub tendered: u32,

    /// Amount handed back
    pub returned: u32,
}

/// Replays command scripts against a vending machine.
///
/// Purchases are recorded as receipts in input order; the receipt report is
/// the runner's deterministic output.
#[derive(Debug, Default)]
pub struct ScriptRunner {
    machine: VendingMachine,
    receipts: Vec<Receipt>,
}

impl ScriptRunner {
    /// Creates a runner around a fresh machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a runner around a prepared machine.
    pub fn with_machine(machine: VendingMachine) -> Self {
        ScriptRunner {
            machine,
            receipts: Vec::new(),
        }
    }

    /// The machine being driven.
    pub fn machine(&self) -> &VendingMachine {
        &self.machine
    }

    /// Receipts recorded so far, in input order.
    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    /// Processes commands from a CSV reader in streaming fashion.
    ///
    /// Invalid rows are logged at warn level with their row number and
    /// skipped.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<CommandRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => {
                    if let Some(command) = record.parse() {
                        self.apply(command, row_num);
                    } else {
                        warn!("Row {}: Failed to parse command record", row_num);
                    }
                }
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        Ok(())
    }

    /// Applies a single command to the machine.
    fn apply(&mut self, command: Command, row: usize) {
        match command {
            Command::AddRecipe(recipe) => {
                let name = recipe.name().to_string();
                if self.machine.add_recipe(recipe) {
                    debug!("Row {}: Added recipe {:?}", row, name);
                } else {
                    warn!(
                        "Row {}: Recipe {:?} not added (catalog full or duplicate name)",
                        row, name
                    );
                }
            }
            Command::EditRecipe { slot, recipe } => match self.machine.edit_recipe(slot, recipe) {
                Some(name) => debug!("Row {}: Slot {} now holds {:?}", row, slot, name),
                None => warn!("Row {}: Edit of empty slot {} ignored", row, slot),
            },
            Command::DeleteRecipe { slot } => match self.machine.delete_recipe(slot) {
                Some(name) => debug!("Row {}: Deleted {:?} from slot {}", row, name, slot),
                None => debug!("Row {}: Delete of empty slot {} ignored", row, slot),
            },
            Command::Restock {
                coffee,
                milk,
                sugar,
                chocolate,
            } => {
                if let Err(e) = self.machine.add_inventory(&coffee, &milk, &sugar, &chocolate) {
                    warn!("Row {}: {}", row, e);
                } else {
                    debug!("Row {}: Restocked inventory", row);
                }
            }
            Command::Purchase { slot, paid } => {
                let returned = self.machine.purchase(slot, paid);
                debug!(
                    "Row {}: Purchase from slot {} tendered {} returned {}",
                    row, slot, paid, returned
                );
                self.receipts.push(Receipt {
                    slot,
                    tendered: paid,
                    returned,
                });
            }
        }
    }

    /// Writes the receipt report as CSV.
    ///
    /// One row per purchase command, in input order.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["slot", "tendered", "returned"])?;

        for receipt in &self.receipts {
            csv_writer.write_record([
                receipt.slot.to_string(),
                receipt.tendered.to_string(),
                receipt.returned.to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
