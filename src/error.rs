//! Error types for the vending engine.

use crate::recipe::Ingredient;
use thiserror::Error;

/// Result type alias for script runner and CLI operations
pub type Result<T> = std::result::Result<T, ScriptError>;

/// Failure to turn a text token into a non-negative quantity.
///
/// Negative values are reported distinctly from unparseable text so callers
/// can tell a sign error apart from garbage input. Quantities are never
/// clamped or coerced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// Token is not a base-10 integer (or does not fit in a `u32`)
    #[error("cannot parse {0:?} as a quantity")]
    Parse(String),

    /// Token is a well-formed integer but negative
    #[error("negative quantity {0} is not allowed")]
    Negative(String),
}

/// A recipe field rejected its input while being set.
///
/// Carries the name of the offending field and the underlying parse failure.
/// The field keeps its previous value.
#[derive(Error, Debug)]
#[error("invalid recipe {field}: {source}")]
pub struct RecipeError {
    /// Which field rejected the input ("price", "coffee amount", ...)
    pub field: &'static str,

    /// The parse failure that caused the rejection
    #[source]
    pub source: QuantityError,
}

/// A bulk inventory addition was rejected.
///
/// Raised when any one of the four restock tokens fails to parse; no counter
/// is modified when this error is returned.
#[derive(Error, Debug)]
#[error("invalid {ingredient} restock amount: {source}")]
pub struct InventoryError {
    /// The ingredient whose token was rejected
    pub ingredient: Ingredient,

    /// The parse failure that caused the rejection
    #[source]
    pub source: QuantityError,
}

/// Errors that can occur while running a command script.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// Failed to open or read the script file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing script file argument
    #[error("Missing script file argument. Usage: vending-engine <script.csv>")]
    MissingArgument,
}
