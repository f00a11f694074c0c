//! The vending machine facade.
//!
//! Ties the recipe catalog and the ingredient inventory together behind the
//! interface a presentation layer consumes, including the purchase
//! transaction. One machine instance serves one kiosk; callers serialize
//! purchases externally.

use crate::catalog::Catalog;
use crate::error::InventoryError;
use crate::inventory::Inventory;
use crate::recipe::Recipe;
use log::debug;

/// A self-service beverage vending unit.
///
/// Owns its catalog and inventory outright; there is no shared or global
/// state, so independent machines coexist and tests construct them
/// directly. Configuration failures (malformed restock or recipe input)
/// surface as errors; purchase failures are ordinary refund returns, never
/// errors.
#[derive(Debug, Default)]
pub struct VendingMachine {
    catalog: Catalog,
    inventory: Inventory,
}

impl VendingMachine {
    /// Creates a machine with an empty catalog and default inventory stock.
    pub fn new() -> Self {
        VendingMachine {
            catalog: Catalog::new(),
            inventory: Inventory::new(),
        }
    }

    /// Creates a machine from prepared components.
    pub fn with_parts(catalog: Catalog, inventory: Inventory) -> Self {
        VendingMachine { catalog, inventory }
    }

    /// Adds a recipe to the catalog.
    ///
    /// Returns `false` when the catalog is full or already holds a recipe
    /// with the same name.
    pub fn add_recipe(&mut self, recipe: Recipe) -> bool {
        self.catalog.add(recipe)
    }

    /// Deletes the recipe in slot `index`, returning its name.
    ///
    /// Returns `None` for an empty slot or out-of-range index.
    pub fn delete_recipe(&mut self, index: usize) -> Option<String> {
        self.catalog.delete(index)
    }

    /// Replaces the recipe in slot `index`, returning the new recipe's name.
    ///
    /// Returns `None` without mutation when the slot is empty or out of
    /// range. The replacement recipe arrives fully built, so a multi-field
    /// edit either lands completely or not at all.
    pub fn edit_recipe(&mut self, index: usize, recipe: Recipe) -> Option<String> {
        self.catalog.replace(index, recipe)
    }

    /// Adds ingredient stock from four text tokens.
    ///
    /// Any malformed token aborts the whole addition with an
    /// [`InventoryError`] and no counter changes.
    pub fn add_inventory(
        &mut self,
        coffee: &str,
        milk: &str,
        sugar: &str,
        chocolate: &str,
    ) -> Result<(), InventoryError> {
        self.inventory.add(coffee, milk, sugar, chocolate)
    }

    /// Renders the current stock report.
    pub fn check_inventory(&self) -> String {
        self.inventory.to_string()
    }

    /// Fixed-length view of the catalog slots.
    pub fn recipes(&self) -> &[Option<Recipe>; Catalog::CAPACITY] {
        self.catalog.slots()
    }

    /// The current inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Attempts to buy the beverage in slot `index` with `amount_paid`.
    ///
    /// On success the inventory is debited and the change
    /// (`amount_paid - price`) is returned. On any failure (empty slot,
    /// out-of-range index, insufficient funds, insufficient stock) the full
    /// `amount_paid` comes back and nothing is mutated.
    ///
    /// The funds check runs before the stock check: a customer who cannot
    /// afford the drink is turned away without consulting the inventory.
    pub fn purchase(&mut self, index: usize, amount_paid: u32) -> u32 {
        let recipe = match self.catalog.get(index) {
            Some(recipe) => recipe,
            None => {
                debug!("purchase rejected: no recipe in slot {}", index);
                return amount_paid;
            }
        };

        if amount_paid < recipe.price() {
            debug!(
                "purchase rejected: {} paid for {:?} priced {}",
                amount_paid,
                recipe.name(),
                recipe.price()
            );
            return amount_paid;
        }

        if !self.inventory.enough_for(recipe) {
            debug!("purchase rejected: not enough stock for {:?}", recipe.name());
            return amount_paid;
        }

        self.inventory.consume(recipe);
        let change = amount_paid - recipe.price();
        debug!(
            "dispensed {:?} from slot {}, change {}",
            recipe.name(),
            index,
            change
        );
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Ingredient;

    fn recipe(name: &str, coffee: &str, milk: &str, sugar: &str, chocolate: &str, price: &str) -> Recipe {
        let mut r = Recipe::default();
        r.set_name(name);
        r.set_amount(Ingredient::Coffee, coffee).unwrap();
        r.set_amount(Ingredient::Milk, milk).unwrap();
        r.set_amount(Ingredient::Sugar, sugar).unwrap();
        r.set_amount(Ingredient::Chocolate, chocolate).unwrap();
        r.set_price(price).unwrap();
        r
    }

    fn coffee() -> Recipe {
        recipe("Coffee", "3", "1", "1", "0", "50")
    }

    #[test]
    fn test_purchase_returns_change_and_debits_stock() {
        let mut machine = VendingMachine::new();
        assert!(machine.add_recipe(coffee()));

        assert_eq!(machine.purchase(0, 75), 25);
        assert_eq!(
            machine.check_inventory(),
            "Coffee: 12\nMilk: 14\nSugar: 14\nChocolate: 15\n"
        );
    }

    #[test]
    fn test_purchase_with_exact_payment() {
        let mut machine = VendingMachine::new();
        machine.add_recipe(coffee());

        assert_eq!(machine.purchase(0, 50), 0);
        assert_eq!(machine.inventory().stock(Ingredient::Coffee), 12);
    }

    #[test]
    fn test_insufficient_funds_refunds_everything() {
        let mut machine = VendingMachine::new();
        machine.add_recipe(coffee());

        assert_eq!(machine.purchase(0, 25), 25);
        assert_eq!(
            machine.check_inventory(),
            "Coffee: 15\nMilk: 15\nSugar: 15\nChocolate: 15\n"
        );
    }

    #[test]
    fn test_insufficient_stock_refunds_everything() {
        let mut machine = VendingMachine::new();
        machine.add_recipe(recipe("Cocoa", "0", "0", "0", "100", "100"));

        assert_eq!(machine.purchase(0, 100), 100);
        assert_eq!(machine.inventory().stock(Ingredient::Chocolate), 15);
    }

    #[test]
    fn test_each_ingredient_can_block_a_purchase() {
        for (coffee_amt, milk_amt, sugar_amt, chocolate_amt) in [
            ("100", "0", "0", "0"),
            ("0", "100", "0", "0"),
            ("0", "0", "100", "0"),
            ("0", "0", "0", "100"),
        ] {
            let mut machine = VendingMachine::new();
            machine.add_recipe(recipe(
                "Greedy",
                coffee_amt,
                milk_amt,
                sugar_amt,
                chocolate_amt,
                "100",
            ));
            assert_eq!(machine.purchase(0, 100), 100);
            assert_eq!(machine.inventory(), &Inventory::new());
        }
    }

    #[test]
    fn test_purchase_from_empty_slot_refunds() {
        let mut machine = VendingMachine::new();
        assert_eq!(machine.purchase(0, 75), 75);
        assert_eq!(machine.purchase(99, 75), 75);
        assert_eq!(machine.inventory(), &Inventory::new());
    }

    #[test]
    fn test_successive_purchases_drain_stock() {
        let mut machine = VendingMachine::new();
        machine.add_recipe(recipe("Espresso", "6", "0", "0", "0", "40"));

        assert_eq!(machine.purchase(0, 40), 0);
        assert_eq!(machine.purchase(0, 40), 0);
        // 3 units left, recipe needs 6
        assert_eq!(machine.purchase(0, 40), 40);
        assert_eq!(machine.inventory().stock(Ingredient::Coffee), 3);
    }

    #[test]
    fn test_restock_enables_a_blocked_purchase() {
        let mut machine = VendingMachine::new();
        machine.add_recipe(recipe("Cocoa", "0", "0", "0", "20", "60"));

        assert_eq!(machine.purchase(0, 60), 60);
        machine.add_inventory("0", "0", "0", "10").unwrap();
        assert_eq!(machine.purchase(0, 60), 0);
        assert_eq!(machine.inventory().stock(Ingredient::Chocolate), 5);
    }

    #[test]
    fn test_add_inventory_failure_is_atomic() {
        let mut machine = VendingMachine::new();
        assert!(machine.add_inventory("4", "-1", "aaaa", "3").is_err());
        assert_eq!(
            machine.check_inventory(),
            "Coffee: 15\nMilk: 15\nSugar: 15\nChocolate: 15\n"
        );
    }

    #[test]
    fn test_edit_replaces_the_whole_slot() {
        let mut machine = VendingMachine::new();
        machine.add_recipe(coffee());

        let edited = recipe("Edited", "2", "0", "0", "1", "65");
        assert_eq!(machine.edit_recipe(0, edited.clone()), Some("Edited".to_string()));
        assert_eq!(machine.recipes()[0], Some(edited));
    }

    #[test]
    fn test_edit_empty_slot_returns_none() {
        let mut machine = VendingMachine::new();
        assert_eq!(machine.edit_recipe(0, coffee()), None);
        assert_eq!(machine.recipes()[0], None);
    }

    #[test]
    fn test_delete_then_purchase_refunds() {
        let mut machine = VendingMachine::new();
        machine.add_recipe(coffee());
        assert_eq!(machine.delete_recipe(0), Some("Coffee".to_string()));
        assert_eq!(machine.purchase(0, 75), 75);
    }

    #[test]
    fn test_with_parts_injects_prepared_state() {
        let mut catalog = Catalog::new();
        catalog.add(coffee());
        let inventory = Inventory::with_stock(3, 1, 1, 0);

        let mut machine = VendingMachine::with_parts(catalog, inventory);
        assert_eq!(machine.purchase(0, 50), 0);
        assert_eq!(
            machine.check_inventory(),
            "Coffee: 0\nMilk: 0\nSugar: 0\nChocolate: 0\n"
        );
        // Stock is gone now, so the same purchase bounces
        assert_eq!(machine.purchase(0, 50), 50);
    }
}
