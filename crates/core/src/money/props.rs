//! Property-based tests for money operations.
//!
//! - Banker's rounding picks the even candidate at exact halves
//! - Decimal conversion round-trips to the canonical form
//! - Addition and subtraction are exact inverses
//! - Allocation never loses or gains a minor unit
//! - Split parts differ by at most one minor unit
//! - Average and median of identical values are that value

use num_bigint::BigInt;
use num_integer::Integer;
use proptest::prelude::*;

use super::Money;
use super::aggregate::{average, median, sum};
use crate::conversion::{minor_units_to_decimal, parse_decimal_to_minor_units};
use crate::rounding::bankers_round;
use centum_shared::RoundingMode;

/// Strategy to generate USD amounts in cents (-10,000,000.00 to 10,000,000.00).
fn usd_amount() -> impl Strategy<Value = Money> {
    (-1_000_000_000i64..1_000_000_000i64)
        .prop_map(|cents| Money::from_minor_units(cents, "USD").unwrap())
}

/// Strategy to generate non-negative ratio sets with a positive total.
fn ratios() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..1000, 1..12)
        .prop_filter("ratios must sum to a positive value", |r| {
            r.iter().any(|v| *v > 0)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* quotient q and non-zero divisor d, the value exactly halfway
    /// between q*d and (q+1)*d rounds to whichever of q, q+1 is even.
    #[test]
    fn prop_bankers_round_halfway_is_even(
        quotient in -1_000_000i64..1_000_000,
        half_divisor in 1i64..10_000,
        negative_divisor in any::<bool>(),
    ) {
        let divisor = if negative_divisor { -2 * half_divisor } else { 2 * half_divisor };
        // value = quotient * |d| + |d| / 2, which is an exact halfway point
        let value = BigInt::from(quotient) * BigInt::from(2 * half_divisor)
            + BigInt::from(half_divisor);
        let result = bankers_round(&value, &BigInt::from(divisor)).unwrap();

        let magnitude = if negative_divisor { -result } else { result };
        prop_assert!(magnitude.is_even(), "{} / {} rounded to odd", value, divisor);
        let lower = BigInt::from(quotient);
        prop_assert!(magnitude == lower || magnitude == lower + 1);
    }

    /// *For any* remainder that is not exactly half, rounding picks the
    /// nearest candidate.
    #[test]
    fn prop_bankers_round_nearest(
        value in -1_000_000_000i64..1_000_000_000,
        divisor in 1i64..100_000,
    ) {
        let result = bankers_round(&BigInt::from(value), &BigInt::from(divisor)).unwrap();
        // |value - result * divisor| <= divisor / 2
        let distance = (BigInt::from(value) - &result * BigInt::from(divisor)) * 2;
        let bound = BigInt::from(divisor);
        prop_assert!(distance <= bound && distance >= -bound);
    }

    /// *For any* decimal string with at most `k` fractional digits,
    /// formatting the parsed value reconstructs the canonical form.
    #[test]
    fn prop_decimal_round_trip(
        integer in 0u64..1_000_000_000_000,
        fraction in prop::collection::vec(0u8..10, 0..=6),
        negative in any::<bool>(),
        extra_scale in 0u32..4,
    ) {
        let fraction: String = fraction.iter().map(|d| char::from(b'0' + d)).collect();
        let scale = u32::try_from(fraction.len()).unwrap() + extra_scale;
        let sign = if negative { "-" } else { "" };
        let input = if fraction.is_empty() {
            format!("{sign}{integer}")
        } else {
            format!("{sign}{integer}.{fraction}")
        };

        let minor = parse_decimal_to_minor_units(&input, scale, RoundingMode::Truncate).unwrap();
        let formatted = minor_units_to_decimal(&minor, scale);

        let is_zero = integer == 0 && fraction.bytes().all(|b| b == b'0');
        let canonical_sign = if negative && !is_zero { "-" } else { "" };
        let expected = if scale == 0 {
            format!("{canonical_sign}{integer}")
        } else {
            let width = scale as usize;
            format!("{canonical_sign}{integer}.{fraction:0<width$}")
        };
        prop_assert_eq!(formatted, expected);
    }

    /// *For any* same-currency a and b, subtract(add(a, b), b) == a.
    #[test]
    fn prop_add_subtract_inverse(a in usd_amount(), b in usd_amount()) {
        let restored = a.add(&b).unwrap().subtract(&b).unwrap();
        prop_assert_eq!(restored, a);
    }

    /// *For any* non-negative ratios with a positive sum, the allocated
    /// parts sum exactly to the original.
    #[test]
    fn prop_allocate_sum_invariant(money in usd_amount(), ratios in ratios()) {
        let parts = money.allocate(ratios.clone()).unwrap();
        prop_assert_eq!(parts.len(), ratios.len());
        prop_assert_eq!(sum(&parts).unwrap(), money);
    }

    /// *For any* value, allocating its negation mirrors the allocation.
    #[test]
    fn prop_allocate_is_sign_symmetric(money in usd_amount(), ratios in ratios()) {
        let positive = money.allocate(ratios.clone()).unwrap();
        let negative = money.negate().allocate(ratios).unwrap();
        let mirrored: Vec<Money> = positive.iter().map(Money::negate).collect();
        prop_assert_eq!(negative, mirrored);
    }

    /// *For any* value and count, split parts differ pairwise by at most
    /// one minor unit.
    #[test]
    fn prop_split_parts_are_fair(money in usd_amount(), count in 1usize..50) {
        let parts = money.split(count).unwrap();
        let smallest = parts.iter().map(Money::amount).min().unwrap();
        let largest = parts.iter().map(Money::amount).max().unwrap();
        prop_assert!(largest - smallest <= BigInt::from(1));
        prop_assert_eq!(sum(&parts).unwrap(), money);
    }

    /// *For any* value repeated n times, average and median are the value.
    #[test]
    fn prop_average_median_of_identical(money in usd_amount(), count in 1usize..20) {
        let values = vec![money.clone(); count];
        prop_assert_eq!(average(&values).unwrap(), money.clone());
        prop_assert_eq!(median(&values).unwrap(), money);
    }

    /// *For any* value, multiplying or dividing by one is the identity.
    #[test]
    fn prop_multiply_divide_identity(money in usd_amount()) {
        prop_assert_eq!(money.multiply(1).unwrap(), money.clone());
        prop_assert_eq!(money.divide("1.000").unwrap(), money);
    }

    /// *For any* value, the compact string form round-trips.
    #[test]
    fn prop_compact_form_round_trip(money in usd_amount()) {
        prop_assert_eq!(Money::deserialize(&money.serialize()).unwrap(), money);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    // =========================================================================
    // Rounding - Specific Examples
    // =========================================================================

    /// 25 / 10 rounds to 2 (nearest even).
    #[test]
    fn test_bankers_rounding_25() {
        let result = bankers_round(&BigInt::from(25), &BigInt::from(10)).unwrap();
        assert_eq!(result, BigInt::from(2));
    }

    /// 35 / 10 rounds to 4 (nearest even).
    #[test]
    fn test_bankers_rounding_35() {
        let result = bankers_round(&BigInt::from(35), &BigInt::from(10)).unwrap();
        assert_eq!(result, BigInt::from(4));
    }

    // =========================================================================
    // Money Operations - Specific Examples
    // =========================================================================

    /// 10.00 + 5.25 = 15.25.
    #[test]
    fn test_add_example() {
        let total = Money::of("10.00", "USD")
            .unwrap()
            .add(&Money::of("5.25", "USD").unwrap())
            .unwrap();
        assert_eq!(total.amount(), &BigInt::from(1525));
    }

    /// 100.00 by [1, 1, 1] = [33.34, 33.33, 33.33].
    #[test]
    fn test_allocate_example() {
        let parts = Money::of("100.00", "USD")
            .unwrap()
            .allocate([1, 1, 1])
            .unwrap();
        let cents: Vec<i64> = parts.iter().map(|p| p.to_minor_units().unwrap()).collect();
        assert_eq!(cents, vec![3334, 3333, 3333]);
        assert_eq!(cents.iter().sum::<i64>(), 10_000);
    }

    /// 33.33 * 3 = 99.99.
    #[test]
    fn test_multiply_example() {
        let product = Money::of("33.33", "USD").unwrap().multiply(3).unwrap();
        assert_eq!(product.to_minor_units().unwrap(), 9999);
    }

    /// 10.00 / 3 = 3.33.
    #[test]
    fn test_divide_example() {
        let quotient = Money::of("10.00", "USD").unwrap().divide(3).unwrap();
        assert_eq!(quotient.to_minor_units().unwrap(), 333);
    }

    /// "R$ 1.234,56" in pt-BR is 1234.56 BRL.
    #[test]
    fn test_parse_example() {
        let parsed = Money::parse("R$ 1.234,56", "pt-BR", "BRL").unwrap();
        assert_eq!(parsed, Money::of("1234.56", "BRL").unwrap());
    }
}
