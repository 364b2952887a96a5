use rust_decimal::Decimal;

use crate::ranking::models::Side;

/// Turn a home-referenced spread into the favored side and a spread from
/// the favorite's perspective.
///
/// The returned spread is never positive, so "more negative" always means
/// "bigger favorite" regardless of who is at home. A pick'em (zero) is
/// credited to the home team.
pub fn resolve_favorite(home_spread: Decimal) -> (Side, Decimal) {
    if home_spread > Decimal::ZERO {
        (Side::Away, -home_spread)
    } else {
        (Side::Home, home_spread)
    }
}
