//! Locale-aware parsing of formatted amounts ("R$ 1.234,56", "($12.00)").

use centum_shared::MoneyResult;
use centum_shared::error::invalid_amount;

use super::Money;
use super::locale::separators_for;
use crate::context::MoneyContext;

const MINUS_SIGNS: [char; 2] = ['-', '\u{2212}'];

impl MoneyContext {
    /// Parses a human-formatted amount.
    ///
    /// The currency's symbol and code are stripped, negativity is detected
    /// from a leading minus or accounting parentheses, and the locale's
    /// decimal separator is normalized to `.` before delegating to `of`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if more than one decimal separator remains or
    /// no digits are left, and `UnknownCurrency` for unregistered codes.
    ///
    /// # Example
    ///
    /// ```
    /// use centum_core::{Money, MoneyContext};
    ///
    /// let parsed = MoneyContext::global().parse("R$ 1.234,56", "pt-BR", "BRL").unwrap();
    /// assert_eq!(parsed, Money::of("1234.56", "BRL").unwrap());
    /// ```
    pub fn parse(&self, formatted: &str, locale: &str, currency: &str) -> MoneyResult<Money> {
        let meta = self.registry().get(currency)?;
        let separators = separators_for(locale);
        let trimmed = formatted.trim();

        let mut text = trimmed.to_string();
        if !meta.symbol.is_empty() {
            text = text.replace(&meta.symbol, "");
        }
        text = text
            .replace(&meta.code, "")
            .replace(&meta.code.to_lowercase(), "");

        let stripped = text.trim();
        let kept: String = stripped
            .chars()
            .filter(|c| {
                c.is_ascii_digit()
                    || *c == separators.decimal
                    || *c == separators.group
                    || MINUS_SIGNS.contains(c)
            })
            .collect();

        let negative = (stripped.starts_with('(') && stripped.ends_with(')'))
            || kept.starts_with(MINUS_SIGNS);

        let ungrouped: String = kept.chars().filter(|c| *c != separators.group).collect();
        if ungrouped.matches(separators.decimal).count() > 1 {
            return Err(invalid_amount(format!(
                "'{formatted}' has more than one decimal separator for locale {locale}"
            )));
        }
        if !ungrouped.chars().any(|c| c.is_ascii_digit()) {
            return Err(invalid_amount(format!("'{formatted}' contains no digits")));
        }

        let unsigned: String = ungrouped
            .replace(separators.decimal, ".")
            .chars()
            .filter(|c| !MINUS_SIGNS.contains(c))
            .collect();
        let normalized = if negative {
            format!("-{unsigned}")
        } else {
            unsigned
        };

        self.of(normalized, &meta.code)
    }

    /// Parses a human-formatted amount using the context's default locale.
    ///
    /// # Errors
    ///
    /// See [`MoneyContext::parse`].
    pub fn parse_default(&self, formatted: &str, currency: &str) -> MoneyResult<Money> {
        self.parse(formatted, self.default_locale(), currency)
    }
}

impl Money {
    /// Parses a human-formatted amount on the global context.
    ///
    /// # Errors
    ///
    /// See [`MoneyContext::parse`].
    pub fn parse(formatted: &str, locale: &str, currency: &str) -> MoneyResult<Self> {
        MoneyContext::global().parse(formatted, locale, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use centum_shared::Currency;
    use rstest::rstest;

    #[rstest]
    #[case("R$ 1.234,56", "pt-BR", "BRL", "1234.56")]
    #[case("$1,234.56", "en-US", "USD", "1234.56")]
    #[case("1,234.56 USD", "en-US", "USD", "1234.56")]
    #[case("usd 12", "en-US", "USD", "12.00")]
    #[case("-$5.00", "en-US", "USD", "-5.00")]
    #[case("$-5.00", "en-US", "USD", "-5.00")]
    #[case("($12.00)", "en-US", "USD", "-12.00")]
    #[case("USD (5.00)", "en-US", "USD", "-5.00")]
    #[case("(5.00) USD", "en-US", "USD", "-5.00")]
    #[case("$ (5.00)", "en-US", "USD", "-5.00")]
    #[case("(1.234,56 €)", "de-DE", "EUR", "-1234.56")]
    #[case("−7,50 €", "de-DE", "EUR", "-7.50")]
    #[case("1.234.567,8 €", "de-DE", "EUR", "1234567.80")]
    #[case("1\u{202f}234,56 €", "fr-FR", "EUR", "1234.56")]
    #[case("1 234,56 €", "fr-FR", "EUR", "1234.56")]
    #[case("CHF 1’234.50", "de-CH", "CHF", "1234.50")]
    #[case("¥1,500", "ja-JP", "JPY", "1500")]
    #[case("1.2345", "en-US", "USD", "1.23")]
    #[case("Bs. 10,50", "es-BO", "BOB", "10.50")]
    fn test_parse(
        #[case] formatted: &str,
        #[case] locale: &str,
        #[case] currency: &str,
        #[case] expected: &str,
    ) {
        let parsed = Money::parse(formatted, locale, currency).unwrap();
        assert_eq!(parsed, Money::of(expected, currency).unwrap());
    }

    #[rstest]
    #[case("1,234,56", "pt-BR")]
    #[case("1.2.3", "en-US")]
    #[case("$", "en-US")]
    #[case("", "en-US")]
    fn test_parse_rejects(#[case] formatted: &str, #[case] locale: &str) {
        let currency = if locale == "pt-BR" { "BRL" } else { "USD" };
        let err = Money::parse(formatted, locale, currency).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_AMOUNT");
    }

    #[test]
    fn test_parse_unknown_currency() {
        let err = Money::parse("1.00", "en-US", "ABC").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_CURRENCY");
    }

    #[test]
    fn test_parse_custom_currency_symbol() {
        let context = MoneyContext::new();
        context
            .registry()
            .register(Currency::new("PTS", "Points", 0, "pts"));
        let parsed = context.parse("1,250 pts", "en-US", "PTS").unwrap();
        assert_eq!(parsed.to_decimal_string(), "1250");
    }

    #[test]
    fn test_parse_parentheses_outside_symbol_is_negative() {
        let parsed = Money::parse("USD (5.00)", "en-US", "USD").unwrap();
        assert!(parsed.is_negative());
    }

    #[test]
    fn test_parse_default_locale() {
        let context = MoneyContext::new();
        assert_eq!(
            context.parse_default("$1,000.10", "USD").unwrap(),
            Money::of("1000.10", "USD").unwrap()
        );
    }
}
