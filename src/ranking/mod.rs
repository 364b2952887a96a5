pub mod aggregate;
pub mod engine;
pub mod favorite;
pub mod models;
pub mod names;
pub mod report;
pub mod tiebreaker;

use rust_decimal::{Decimal, RoundingStrategy};

/// Spreads are shown to the tenth of a point, halves rounded away from zero
/// (-3.25 becomes -3.3).
pub fn round_spread(spread: Decimal) -> Decimal {
    spread.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Totals are shown in whole points, halves rounded away from zero.
pub fn round_total(total: Decimal) -> Decimal {
    total.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
