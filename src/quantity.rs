//! Shared parsing of textual quantities.
//!
//! Recipe fields and inventory restocks both arrive as text. This module is
//! the single place that text becomes a validated non-negative integer, so
//! the two paths cannot drift apart in what they accept.

use crate::error::QuantityError;

/// Parses a text token into a non-negative quantity.
///
/// The trimmed token must be an optional leading minus sign followed by one
/// or more ASCII digits. A minus sign yields [`QuantityError::Negative`];
/// anything else that is not a plain base-10 integer fitting in a `u32`
/// yields [`QuantityError::Parse`].
///
/// # Examples
///
/// ```
/// use vending_engine::quantity::parse_units;
/// use vending_engine::QuantityError;
///
/// assert_eq!(parse_units("12"), Ok(12));
/// assert_eq!(parse_units(" 0 "), Ok(0));
/// assert!(matches!(parse_units("-3"), Err(QuantityError::Negative(_))));
/// assert!(matches!(parse_units("abc"), Err(QuantityError::Parse(_))));
/// ```
pub fn parse_units(token: &str) -> Result<u32, QuantityError> {
    let trimmed = token.trim();

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(QuantityError::Parse(token.to_string()));
    }

    if negative {
        return Err(QuantityError::Negative(trimmed.to_string()));
    }

    digits
        .parse::<u32>()
        .map_err(|_| QuantityError::Parse(token.to_string()))
}
