//! Same-currency guards.
//!
//! Two values may only be combined when they share a currency code and a
//! scale. The scale check only fires for values built with
//! [`Money::from_raw_parts`]: every factory derives the scale from the
//! registry, so factory-built values of one currency always agree.

use centum_shared::{MoneyError, MoneyResult};

use super::Money;

/// Ensures two values can be combined.
///
/// # Errors
///
/// Returns `CurrencyMismatch` for different codes and `ScaleMismatch` for
/// the same code at different scales.
pub fn assert_same_currency(a: &Money, b: &Money) -> MoneyResult<()> {
    if a.currency() != b.currency() {
        return Err(MoneyError::CurrencyMismatch {
            expected: a.currency().to_string(),
            got: b.currency().to_string(),
        });
    }
    if a.scale() != b.scale() {
        return Err(MoneyError::ScaleMismatch {
            currency: a.currency().to_string(),
            expected: a.scale(),
            got: b.scale(),
        });
    }
    Ok(())
}

/// Ensures every value in the slice matches the first one.
///
/// An empty or single-element slice passes.
///
/// # Errors
///
/// See [`assert_same_currency`].
pub fn assert_all_same_currency(values: &[Money]) -> MoneyResult<()> {
    let Some((first, rest)) = values.split_first() else {
        return Ok(());
    };
    rest.iter()
        .try_for_each(|other| assert_same_currency(first, other))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_same_currency_passes() {
        let a = Money::of("1.00", "USD").unwrap();
        let b = Money::of("2.00", "usd").unwrap();
        assert!(assert_same_currency(&a, &b).is_ok());
    }

    #[test]
    fn test_currency_mismatch() {
        let a = Money::of("1.00", "USD").unwrap();
        let b = Money::of("1.00", "EUR").unwrap();
        assert_eq!(
            assert_same_currency(&a, &b).unwrap_err(),
            MoneyError::CurrencyMismatch {
                expected: "USD".into(),
                got: "EUR".into()
            }
        );
    }

    #[test]
    fn test_scale_mismatch_only_via_raw_parts() {
        let a = Money::of("1.00", "USD").unwrap();
        let b = Money::from_raw_parts(BigInt::from(1000), "USD", 3);
        assert_eq!(
            assert_same_currency(&a, &b).unwrap_err(),
            MoneyError::ScaleMismatch {
                currency: "USD".into(),
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn test_all_same_currency() {
        assert!(assert_all_same_currency(&[]).is_ok());

        let usd = Money::of("1", "USD").unwrap();
        let values = vec![usd.clone(), usd.clone(), usd.clone()];
        assert!(assert_all_same_currency(&values).is_ok());

        let mixed = vec![usd.clone(), usd, Money::of("1", "GBP").unwrap()];
        assert_eq!(
            assert_all_same_currency(&mixed).unwrap_err().error_code(),
            "CURRENCY_MISMATCH"
        );
    }
}
