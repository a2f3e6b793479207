//! Amount allocation using the Largest Remainder Method.
//!
//! Allocation guarantees the parts sum EXACTLY to the original amount. No
//! minor unit is ever lost or gained.
//!
//! The method works by:
//! 1. Computing each bucket's ideal share with 15 extra digits of precision
//! 2. Truncating each share to whole minor units
//! 3. Handing the leftover units to the buckets with the largest
//!    fractional remainders
//!
//! Shares are truncated toward zero, so a positive amount leaves a residual
//! in `[0, n)` and a negative amount one in `(-n, 0]`. Negative residuals
//! are taken back from the most negative remainders first, which keeps
//! `allocate(-m) == -allocate(m)`.

use centum_shared::error::invalid_amount;
use centum_shared::{MoneyError, MoneyResult};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use tracing::error;

use super::Money;
use super::arithmetic::parse_scaled;
use super::input::AmountInput;
use crate::rounding::pow10;

/// Decimal digits kept when parsing ratios.
pub const RATIO_PRECISION: u32 = 15;

struct Bucket {
    base: BigInt,
    remainder: BigInt,
}

impl Money {
    /// Splits the value proportionally to `ratios`.
    ///
    /// Ratios are parsed as decimal text, so `[0.1, 0.2, 0.7]` and
    /// `["1", "2", "7"]` allocate identically.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if `ratios` is empty, contains a negative
    /// value, or sums to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use centum_core::Money;
    ///
    /// let parts = Money::of("100.00", "USD").unwrap().allocate([1, 1, 1]).unwrap();
    /// let cents: Vec<String> = parts.iter().map(Money::to_decimal_string).collect();
    /// assert_eq!(cents, ["33.34", "33.33", "33.33"]);
    /// ```
    pub fn allocate<I, T>(&self, ratios: I) -> MoneyResult<Vec<Self>>
    where
        I: IntoIterator<Item = T>,
        T: Into<AmountInput>,
    {
        let ratios = ratios
            .into_iter()
            .map(|ratio| parse_scaled(ratio.into(), RATIO_PRECISION))
            .collect::<MoneyResult<Vec<BigInt>>>()?;

        if ratios.is_empty() {
            return Err(invalid_amount("allocation needs at least one ratio"));
        }
        if ratios.iter().any(Signed::is_negative) {
            return Err(invalid_amount("allocation ratios cannot be negative"));
        }
        let total: BigInt = ratios.iter().sum();
        if total.is_zero() {
            return Err(invalid_amount("allocation ratios cannot sum to zero"));
        }
        if ratios.len() == 1 {
            return Ok(vec![self.clone()]);
        }

        let precision = pow10(RATIO_PRECISION);
        let scaled_amount = self.amount() * &precision;

        let mut buckets: Vec<Bucket> = ratios
            .iter()
            .map(|ratio| {
                let ideal = &scaled_amount * ratio / &total;
                let base = &ideal / &precision;
                let remainder = ideal - &base * &precision;
                Bucket { base, remainder }
            })
            .collect();

        let allocated: BigInt = buckets.iter().map(|b| &b.base).sum();
        let mut residual = self.amount() - allocated;

        // Stable sorts: ties keep their original bucket order.
        let mut by_largest: Vec<usize> = (0..buckets.len()).collect();
        by_largest.sort_by(|&a, &b| buckets[b].remainder.cmp(&buckets[a].remainder));

        if residual.is_positive() {
            for &index in by_largest.iter().cycle() {
                if !residual.is_positive() {
                    break;
                }
                buckets[index].base += BigInt::one();
                residual -= BigInt::one();
            }
        } else if residual.is_negative() {
            let mut by_smallest: Vec<usize> = (0..buckets.len()).collect();
            by_smallest.sort_by(|&a, &b| buckets[a].remainder.cmp(&buckets[b].remainder));

            // |residual| < n, so one pass suffices; the cap only guards
            // against a defect turning this into an endless loop.
            let cap = buckets.len() * 2;
            for &index in by_smallest.iter().cycle().take(cap) {
                if !residual.is_negative() {
                    break;
                }
                buckets[index].base -= BigInt::one();
                residual += BigInt::one();
            }
        }

        let parts: Vec<Self> = buckets
            .into_iter()
            .map(|bucket| self.with_amount(bucket.base))
            .collect();

        let sum: BigInt = parts.iter().map(Money::amount).sum();
        if &sum != self.amount() {
            error!(
                amount = %self.amount(),
                sum = %sum,
                currency = %self.currency(),
                "Allocation lost or gained minor units"
            );
            return Err(MoneyError::InvariantViolation(format!(
                "allocation of {self} summed to {sum} minor units"
            )));
        }

        Ok(parts)
    }

    /// Splits the value into `count` parts differing by at most one unit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if `count` is zero.
    pub fn split(&self, count: usize) -> MoneyResult<Vec<Self>> {
        self.allocate(std::iter::repeat_n(1u32, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(amount: &str) -> Money {
        Money::of(amount, "USD").unwrap()
    }

    fn amounts(parts: &[Money]) -> Vec<String> {
        parts.iter().map(Money::to_decimal_string).collect()
    }

    // =========================================================================
    // allocate tests
    // =========================================================================

    #[test]
    fn test_allocate_thirds() {
        // 100 / 3 = 33.33... → [33.34, 33.33, 33.33]
        let parts = usd("100.00").allocate([1, 1, 1]).unwrap();
        let cents: Vec<BigInt> = parts.iter().map(|p| p.amount().clone()).collect();
        assert_eq!(
            cents,
            vec![BigInt::from(3334), BigInt::from(3333), BigInt::from(3333)]
        );
    }

    #[test]
    fn test_allocate_single_ratio_returns_original() {
        let money = usd("12.34");
        assert_eq!(money.allocate([7]).unwrap(), vec![money]);
    }

    #[test]
    fn test_allocate_uneven() {
        // 50% / 30% / 20%
        let parts = usd("100.00").allocate([50, 30, 20]).unwrap();
        assert_eq!(amounts(&parts), ["50.00", "30.00", "20.00"]);
    }

    #[test]
    fn test_allocate_largest_remainder_wins() {
        // 0.05 by [3, 7] → ideal [1.5, 3.5] → base [1, 3], residual 1, tie → first
        let parts = usd("0.05").allocate([3, 7]).unwrap();
        assert_eq!(amounts(&parts), ["0.02", "0.03"]);

        // 1.00 by [1, 2] → ideal [33.33, 66.67] → the second bucket gets the cent
        let parts = usd("1.00").allocate([1, 2]).unwrap();
        assert_eq!(amounts(&parts), ["0.33", "0.67"]);
    }

    #[test]
    fn test_allocate_decimal_and_string_ratios_agree() {
        let money = usd("99.99");
        let by_fraction = money.allocate(["0.1", "0.2", "0.7"]).unwrap();
        let by_integer = money.allocate([1, 2, 7]).unwrap();
        let by_float = money.allocate([0.1, 0.2, 0.7]).unwrap();
        assert_eq!(by_fraction, by_integer);
        assert_eq!(by_float, by_integer);
    }

    #[test]
    fn test_allocate_zero_ratio_bucket_gets_nothing() {
        let parts = usd("10.00").allocate([1, 0, 1]).unwrap();
        assert_eq!(amounts(&parts), ["5.00", "0.00", "5.00"]);
    }

    #[test]
    fn test_allocate_negative_amount_mirrors_positive() {
        let positive = usd("100.00").allocate([1, 1, 1]).unwrap();
        let negative = usd("-100.00").allocate([1, 1, 1]).unwrap();
        let mirrored: Vec<Money> = positive.iter().map(Money::negate).collect();
        assert_eq!(negative, mirrored);
    }

    #[test]
    fn test_allocate_penny_among_many() {
        let parts = usd("0.01").allocate([1, 1, 1, 1]).unwrap();
        assert_eq!(amounts(&parts), ["0.01", "0.00", "0.00", "0.00"]);
    }

    #[test]
    fn test_allocate_invalid_ratios() {
        let money = usd("10");
        let empty: [u32; 0] = [];
        assert_eq!(
            money.allocate(empty).unwrap_err().error_code(),
            "INVALID_AMOUNT"
        );
        assert_eq!(
            money.allocate([1, -1]).unwrap_err().error_code(),
            "INVALID_AMOUNT"
        );
        assert_eq!(
            money.allocate([0, 0]).unwrap_err().error_code(),
            "INVALID_AMOUNT"
        );
        assert_eq!(
            money.allocate(["1", "abc"]).unwrap_err().error_code(),
            "INVALID_AMOUNT"
        );
    }

    #[test]
    fn test_allocate_sum_invariant() {
        let test_cases = [
            ("100", vec![3, 3, 3]),
            ("100", vec![1, 2, 3, 4, 5, 6, 7]),
            ("0.01", vec![1, 1, 1]),
            ("999.99", vec![13, 17, 19, 23]),
            ("-47.11", vec![2, 5, 11]),
        ];

        for (total, ratios) in test_cases {
            let money = usd(total);
            let parts = money.allocate(ratios.clone()).unwrap();
            let sum: BigInt = parts.iter().map(Money::amount).sum();
            assert_eq!(
                &sum,
                money.amount(),
                "Sum invariant failed for total={total}, ratios={ratios:?}"
            );
        }
    }

    // =========================================================================
    // split tests
    // =========================================================================

    #[test]
    fn test_split_even() {
        let parts = usd("100").split(4).unwrap();
        assert_eq!(amounts(&parts), ["25.00", "25.00", "25.00", "25.00"]);
    }

    #[test]
    fn test_split_uneven() {
        let parts = usd("10.00").split(3).unwrap();
        assert_eq!(amounts(&parts), ["3.34", "3.33", "3.33"]);
    }

    #[test]
    fn test_split_zero_decimal_currency() {
        let parts = Money::of("100", "JPY").unwrap().split(7).unwrap();
        let values: Vec<String> = amounts(&parts);
        assert_eq!(values, ["15", "15", "14", "14", "14", "14", "14"]);
    }

    #[test]
    fn test_split_zero_count() {
        assert_eq!(
            usd("1").split(0).unwrap_err().error_code(),
            "INVALID_AMOUNT"
        );
    }
}
