//! Order pricing.

use boxoffice_core::types::seat_code::SeatId;
use boxoffice_entity::order::OrderPricing;
use boxoffice_entity::seat::SeatCategory;

/// Price for one seat: base price scaled by the category multiplier.
pub fn seat_price(base_price: f64, category: SeatCategory) -> f64 {
    base_price * category.price_multiplier()
}

/// Price a whole order from its seats' categories.
///
/// `total = subtotal + tax - discount`, clamped at zero so a generous
/// discount can never produce a negative amount due.
pub fn price_order(
    base_price: f64,
    categories: &[(SeatId, SeatCategory)],
    tax_rate: f64,
    discount: f64,
) -> OrderPricing {
    let subtotal: f64 = categories
        .iter()
        .map(|(_, category)| seat_price(base_price, *category))
        .sum();
    let tax = subtotal * tax_rate;
    let total = (subtotal + tax - discount).max(0.0);
    OrderPricing {
        subtotal,
        tax,
        discount,
        total,
    }
}
