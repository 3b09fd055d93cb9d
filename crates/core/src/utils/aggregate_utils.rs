//! Generic aggregation primitives shared by the metrics services.

use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Sums `amount_of(item)` over the items satisfying `predicate`.
/// Empty input sums to zero.
pub fn sum_where<T, P, F>(items: &[T], predicate: P, amount_of: F) -> Decimal
where
    P: Fn(&T) -> bool,
    F: Fn(&T) -> Decimal,
{
    items
        .iter()
        .filter(|item| predicate(item))
        .map(|item| amount_of(item))
        .sum()
}

/// Groups items by key, preserving first-seen key order.
pub fn group_by<'a, T, K, F>(items: &'a [T], key_of: F) -> Vec<(K, Vec<&'a T>)>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<(K, Vec<&T>)> = Vec::new();
    for item in items {
        let key = key_of(item);
        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, members)) => members.push(item),
            None => groups.push((key, vec![item])),
        }
    }
    groups
}

/// Percentage of `part` over `whole`, rounded for display.
/// A zero `whole` yields zero, never an error.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        (part / whole * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
    }
}
