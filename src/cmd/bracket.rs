//! Bracket command - classify an income without the interactive session

use crate::core::TaxBracket;
use crate::money::{format_inr, parse_inr};
use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct BracketCommand {
    /// Annual income in INR
    #[arg(short, long, value_parser = parse_inr)]
    income: Decimal,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct BracketOutput {
    income: String,
    bracket: String,
    rate_pct: String,
}

impl BracketCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let bracket = TaxBracket::from_income(self.income);
        if self.json {
            let output = BracketOutput {
                income: self.income.to_string(),
                bracket: bracket.label().to_string(),
                rate_pct: format!("{:.0}", bracket.rate() * dec!(100)),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}: {}", format_inr(self.income), bracket);
        }
        Ok(())
    }
}
