/*
[INPUT]:  Best bid price and price factor
[OUTPUT]: Limit price for the demo order
[POS]:    Pricing layer - order price derivation
[UPDATE]: When changing price derivation or precision
*/

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places of the order price sent to the exchange
pub const PRICE_SCALE: u32 = 8;

/// `best_bid * factor`, rounded half-up and padded to [`PRICE_SCALE`] places.
///
/// Returns `None` if the product overflows.
pub fn target_price(best_bid: Decimal, factor: Decimal) -> Option<Decimal> {
    let mut price = best_bid
        .checked_mul(factor)?
        .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    price.rescale(PRICE_SCALE);
    Some(price)
}
