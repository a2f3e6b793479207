//! Subcommand definitions and dispatch.

use anyhow::Context;
use clap::{Parser, Subcommand};

use centum_core::money::{average, median, sum};
use centum_core::{Money, MoneyContext};
use centum_shared::Currency;

#[derive(Parser, Debug)]
#[command(name = "centum", about = "Exact money arithmetic")]
#[command(version)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add two amounts of the same currency
    Add {
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
    },

    /// Subtract the second amount from the first
    Subtract {
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
    },

    /// Multiply by a decimal factor, rounding half to even
    Multiply {
        #[arg(allow_hyphen_values = true)]
        money: String,
        #[arg(allow_hyphen_values = true)]
        factor: String,
    },

    /// Divide by a decimal divisor, rounding half to even
    Divide {
        #[arg(allow_hyphen_values = true)]
        money: String,
        #[arg(allow_hyphen_values = true)]
        divisor: String,
    },

    /// Take a percentage, rounding half to even
    Percentage {
        #[arg(allow_hyphen_values = true)]
        money: String,
        #[arg(allow_hyphen_values = true)]
        percent: String,
    },

    /// Distribute an amount by ratios without losing a minor unit
    Allocate {
        #[arg(allow_hyphen_values = true)]
        money: String,
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        ratios: Vec<String>,
    },

    /// Split an amount into equal parts
    Split {
        #[arg(allow_hyphen_values = true)]
        money: String,
        count: usize,
    },

    /// Sum amounts of one currency
    Sum {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Mean of amounts of one currency
    Average {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Median of amounts of one currency
    Median {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Parse a locale-formatted amount such as "R$ 1.234,56"
    Parse {
        #[arg(allow_hyphen_values = true)]
        formatted: String,

        /// Currency code
        #[arg(short, long)]
        currency: String,

        /// BCP-47 locale (defaults to the configured locale)
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Show one currency, or list every registered currency
    Currency { code: Option<String> },
}

/// Result of a command, rendered as text or JSON.
#[derive(Debug)]
pub enum Output {
    Single(Money),
    Many(Vec<Money>),
    Currencies(Vec<Currency>),
}

impl Output {
    pub fn render(&self, json: bool) -> anyhow::Result<String> {
        if json {
            let rendered = match self {
                Self::Single(money) => serde_json::to_string(money)?,
                Self::Many(values) => serde_json::to_string(values)?,
                Self::Currencies(currencies) => serde_json::to_string(currencies)?,
            };
            return Ok(rendered);
        }

        let lines: Vec<String> = match self {
            Self::Single(money) => vec![money.to_string()],
            Self::Many(values) => values.iter().map(ToString::to_string).collect(),
            Self::Currencies(currencies) => currencies
                .iter()
                .map(|c| format!("{}\t{}\t{}\t{}", c.code, c.decimal_places, c.symbol, c.name))
                .collect(),
        };
        Ok(lines.join("\n"))
    }
}

fn operand(context: &MoneyContext, input: &str) -> anyhow::Result<Money> {
    context
        .deserialize(input)
        .with_context(|| format!("Invalid money operand '{input}'"))
}

fn operands(context: &MoneyContext, inputs: &[String]) -> anyhow::Result<Vec<Money>> {
    inputs.iter().map(|input| operand(context, input)).collect()
}

/// Executes a command against the given context.
pub fn run(command: &Command, context: &MoneyContext) -> anyhow::Result<Output> {
    let output = match command {
        Command::Add { left, right } => {
            Output::Single(operand(context, left)?.add(&operand(context, right)?)?)
        }
        Command::Subtract { left, right } => {
            Output::Single(operand(context, left)?.subtract(&operand(context, right)?)?)
        }
        Command::Multiply { money, factor } => {
            Output::Single(operand(context, money)?.multiply(factor)?)
        }
        Command::Divide { money, divisor } => {
            Output::Single(operand(context, money)?.divide(divisor)?)
        }
        Command::Percentage { money, percent } => {
            Output::Single(operand(context, money)?.percentage(percent)?)
        }
        Command::Allocate { money, ratios } => {
            Output::Many(operand(context, money)?.allocate(ratios.iter())?)
        }
        Command::Split { money, count } => Output::Many(operand(context, money)?.split(*count)?),
        Command::Sum { values } => Output::Single(sum(&operands(context, values)?)?),
        Command::Average { values } => Output::Single(average(&operands(context, values)?)?),
        Command::Median { values } => Output::Single(median(&operands(context, values)?)?),
        Command::Parse {
            formatted,
            currency,
            locale,
        } => Output::Single(match locale {
            Some(locale) => context.parse(formatted, locale, currency)?,
            None => context.parse_default(formatted, currency)?,
        }),
        Command::Currency { code: Some(code) } => {
            Output::Currencies(vec![context.registry().get(code)?])
        }
        Command::Currency { code: None } => Output::Currencies(context.registry().all()),
    };
    Ok(output)
}
