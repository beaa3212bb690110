//! Money calculation utilities using rust_decimal for precision
//!
//! Amounts are `f64` on the wire; sums are done in `Decimal` and rounded
//! back to 2 decimal places.

use rust_decimal::prelude::*;
use shared::models::LineItem;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Line price: customization final price, else unit price
fn line_unit_price(item: &LineItem) -> Decimal {
    let price = item
        .customization
        .as_ref()
        .map(|c| c.final_price)
        .unwrap_or(item.unit_price);
    to_decimal(price)
}

/// Σ finalPrice × quantity over a freshplan day's items
pub fn day_total(items: &[LineItem]) -> f64 {
    let total: Decimal = items
        .iter()
        .map(|item| line_unit_price(item) * Decimal::from(item.quantity))
        .sum();
    to_f64(total)
}
