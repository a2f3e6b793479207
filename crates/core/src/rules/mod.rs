//! Money predicates for JSON rule evaluators.
//!
//! Rule engines hand over a fact and a compare value as JSON. Both must be in
//! the money JSON shape (`{"amount": "12.50", "currency": "USD"}`); they are
//! re-parsed through a [`MoneyContext`] so the scale always comes from the
//! registry.

use std::fmt;

use centum_shared::MoneyResult;
use centum_shared::error::invalid_amount;
use serde_json::Value;
use tracing::trace;

use crate::context::MoneyContext;
use crate::money::{Money, MoneyJson};

/// Named money predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoneyOperator {
    /// Fact equals the compare value.
    Equals,
    /// Fact differs from the compare value.
    NotEquals,
    /// Fact is strictly greater.
    GreaterThan,
    /// Fact is greater or equal.
    GreaterThanOrEqual,
    /// Fact is strictly less.
    LessThan,
    /// Fact is less or equal.
    LessThanOrEqual,
    /// Fact lies in `[min, max]`; the compare value is a two-element array.
    Between,
    /// Fact is zero. The compare value is ignored.
    IsZero,
    /// Fact is strictly positive. The compare value is ignored.
    IsPositive,
    /// Fact is strictly negative. The compare value is ignored.
    IsNegative,
}

impl MoneyOperator {
    /// Every operator, in registration order.
    pub const ALL: [Self; 10] = [
        Self::Equals,
        Self::NotEquals,
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
        Self::LessThan,
        Self::LessThanOrEqual,
        Self::Between,
        Self::IsZero,
        Self::IsPositive,
        Self::IsNegative,
    ];

    /// Parses an operator from its registered name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }

    /// Returns the registered name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "moneyEquals",
            Self::NotEquals => "moneyNotEquals",
            Self::GreaterThan => "moneyGreaterThan",
            Self::GreaterThanOrEqual => "moneyGreaterThanOrEqual",
            Self::LessThan => "moneyLessThan",
            Self::LessThanOrEqual => "moneyLessThanOrEqual",
            Self::Between => "moneyBetween",
            Self::IsZero => "moneyIsZero",
            Self::IsPositive => "moneyIsPositive",
            Self::IsNegative => "moneyIsNegative",
        }
    }

    /// Returns true if the operator only inspects the fact.
    #[must_use]
    pub fn is_unary(&self) -> bool {
        matches!(self, Self::IsZero | Self::IsPositive | Self::IsNegative)
    }
}

impl fmt::Display for MoneyOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Registered operator names, for wiring into a rule engine.
#[must_use]
pub fn names() -> Vec<&'static str> {
    MoneyOperator::ALL.iter().map(MoneyOperator::as_str).collect()
}

impl MoneyContext {
    /// Reads a money value out of a JSON operand.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the value is not in the money JSON shape,
    /// or any error from `from_json`.
    pub fn money_from_value(&self, value: &Value) -> MoneyResult<Money> {
        let json: MoneyJson = serde_json::from_value(value.clone())
            .map_err(|err| invalid_amount(format!("operand {value} is not a money value: {err}")))?;
        self.from_json(&json)
    }

    /// Applies `operator` to a fact and compare value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for operands that are not money-shaped (or a
    /// `moneyBetween` compare value that is not a two-element array), and
    /// `CurrencyMismatch`/`ScaleMismatch` when the operands disagree.
    pub fn evaluate(
        &self,
        operator: MoneyOperator,
        fact: &Value,
        compare: &Value,
    ) -> MoneyResult<bool> {
        let fact = self.money_from_value(fact)?;
        let outcome = match operator {
            MoneyOperator::IsZero => fact.is_zero(),
            MoneyOperator::IsPositive => fact.is_positive(),
            MoneyOperator::IsNegative => fact.is_negative(),
            MoneyOperator::Between => {
                let Some([min, max]) = compare.as_array().map(Vec::as_slice).and_then(|bounds| {
                    <&[Value; 2]>::try_from(bounds).ok()
                }) else {
                    return Err(invalid_amount(format!(
                        "moneyBetween expects [min, max], got {compare}"
                    )));
                };
                fact.between(&self.money_from_value(min)?, &self.money_from_value(max)?)?
            }
            MoneyOperator::Equals => fact.equals(&self.money_from_value(compare)?)?,
            MoneyOperator::NotEquals => !fact.equals(&self.money_from_value(compare)?)?,
            MoneyOperator::GreaterThan => fact.greater_than(&self.money_from_value(compare)?)?,
            MoneyOperator::GreaterThanOrEqual => {
                fact.greater_than_or_equal(&self.money_from_value(compare)?)?
            }
            MoneyOperator::LessThan => fact.less_than(&self.money_from_value(compare)?)?,
            MoneyOperator::LessThanOrEqual => {
                fact.less_than_or_equal(&self.money_from_value(compare)?)?
            }
        };
        trace!(operator = %operator, %fact, outcome, "Money rule evaluated");
        Ok(outcome)
    }
}

/// Applies `operator` on the global context.
///
/// # Errors
///
/// See [`MoneyContext::evaluate`].
pub fn evaluate(operator: MoneyOperator, fact: &Value, compare: &Value) -> MoneyResult<bool> {
    MoneyContext::global().evaluate(operator, fact, compare)
}
