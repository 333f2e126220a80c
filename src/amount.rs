//! Resolves the text between an entity's braces into an [`Amount`].
//!
//! `3%items` is a quantity of 3 with unit "items", `1/2%cup` is half a cup and
//! anything that does not read as a number (`few`, `7 k`, `01/2`) is kept as
//! raw text. Resolution never fails.

use crate::model::{Amount, Quantity};

pub const UNIT_SEPARATOR: char = '%';
const FRACTION_SEPARATOR: char = '/';

/// Resolve a brace body, falling back to `default` when it is empty.
///
/// An empty quantity with a unit (`%g`) keeps the default quantity and the unit.
pub fn resolve(body: &str, default: &Amount) -> Amount {
    if body.trim().is_empty() {
        return default.clone();
    }

    let (quantity, units) = match body.split_once(UNIT_SEPARATOR) {
        Some((quantity, units)) => (quantity, units.trim()),
        None => (body, ""),
    };

    let quantity = if quantity.trim().is_empty() {
        default.quantity.clone()
    } else {
        parse_quantity(quantity)
    };

    Amount {
        quantity,
        units: units.to_string(),
    }
}

/// Read a quantity as a decimal number or an `a/b` fraction, or keep it as text.
pub fn parse_quantity(text: &str) -> Quantity {
    let trimmed = text.trim();

    if let Some(value) = parse_decimal(trimmed) {
        return Quantity::Number(value);
    }

    if let Some((numerator, denominator)) = trimmed.split_once(FRACTION_SEPARATOR) {
        let (numerator, denominator) = (numerator.trim(), denominator.trim());
        match (parse_operand(numerator), parse_operand(denominator)) {
            (Some(n), Some(d)) if d != 0.0 => return Quantity::Number(n / d),
            // Looks like a fraction but is not one, e.g. a `01/2` product code
            _ if is_digits(numerator) && is_digits(denominator) => {
                return Quantity::Text(format!(
                    "{}{}{}",
                    numerator, FRACTION_SEPARATOR, denominator
                ));
            }
            _ => {}
        }
    }

    Quantity::Text(trimmed.to_string())
}

fn parse_decimal(text: &str) -> Option<f64> {
    let has_digit = text.chars().any(|c| c.is_ascii_digit());
    let only_digits_and_dot = text.chars().all(|c| c.is_ascii_digit() || c == '.');
    if !has_digit || !only_digits_and_dot || text.matches('.').count() > 1 {
        return None;
    }
    text.parse().ok()
}

/// A fraction operand: a non-negative integer without a leading zero.
fn parse_operand(text: &str) -> Option<f64> {
    if !is_digits(text) || (text.len() > 1 && text.starts_with('0')) {
        return None;
    }
    text.parse().ok()
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}
