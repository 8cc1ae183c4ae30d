//! Schemes command - list the tax-saving schemes available at a given age

use super::display::write_section_details;
use crate::core::{
    eligible_sections, Catalog, EligibilityRule, EligibleSection, TaxBracket, TaxSection,
};
use crate::money::{format_inr, parse_inr};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct SchemesCommand {
    /// Age of the person claiming the deductions
    #[arg(short, long)]
    age: u32,

    /// Annual income in INR (defaults to 0)
    #[arg(short, long, value_parser = parse_inr)]
    income: Option<Decimal>,

    /// Show full details of the scheme at this position in the list
    #[arg(short, long, conflicts_with_all = ["json", "csv"])]
    section: Option<usize>,

    /// Output as JSON instead of formatted table
    #[arg(long, conflicts_with = "csv")]
    json: bool,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

/// Row for the schemes table output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SchemeRow {
    #[tabled(rename = "#")]
    pub row_num: usize,

    #[tabled(rename = "Section")]
    pub section: String,

    #[tabled(rename = "Description")]
    pub description: String,

    #[tabled(rename = "Limit")]
    pub limit: String,

    #[tabled(rename = "Investments")]
    pub investments: String,

    #[tabled(rename = "Eligible")]
    pub eligible_person: String,

    #[tabled(rename = "Age Limit")]
    pub age_limit: String,
}

#[derive(Debug, Serialize)]
struct SchemesOutput<'a> {
    income: String,
    age: u32,
    bracket: String,
    schemes: Vec<SchemeView<'a>>,
}

#[derive(Debug, Serialize)]
struct SchemeView<'a> {
    index: usize,
    section: &'a TaxSection,
    eligibility: &'a EligibilityRule,
}

impl SchemesCommand {
    pub fn exec(&self, catalog: &Catalog) -> anyhow::Result<()> {
        let income = self.income.unwrap_or(Decimal::ZERO);
        let eligible = eligible_sections(catalog, income, self.age);

        if let Some(choice) = self.section {
            return self.print_details(&eligible, choice);
        }

        if self.json {
            self.print_json(&eligible, income)
        } else if self.csv {
            write_csv(&build_rows(&eligible), io::stdout())
        } else {
            self.print_table(&eligible, income);
            Ok(())
        }
    }

    fn print_table(&self, eligible: &[EligibleSection], income: Decimal) {
        if self.income.is_some() {
            println!(
                "Based on your income of {}, you fall under the '{}'.",
                format_inr(income),
                TaxBracket::from_income(income)
            );
        }

        if eligible.is_empty() {
            println!("No applicable tax-saving schemes found based on the provided information.");
            return;
        }

        println!();
        println!("TAX-SAVING SCHEMES (age {})", self.age);
        println!();

        let table = Table::new(build_rows(eligible))
            .with(Style::rounded())
            .with(Modify::new(Columns::first()).with(Alignment::right()))
            .to_string();
        println!("{}", table);
    }

    fn print_details(&self, eligible: &[EligibleSection], choice: usize) -> anyhow::Result<()> {
        let Some(selected) = choice.checked_sub(1).and_then(|idx| eligible.get(idx)) else {
            anyhow::bail!(
                "Invalid choice: {} ({} scheme(s) available for age {})",
                choice,
                eligible.len(),
                self.age
            );
        };
        write_section_details(io::stdout().lock(), selected.section)?;
        Ok(())
    }

    fn print_json(&self, eligible: &[EligibleSection], income: Decimal) -> anyhow::Result<()> {
        let output = SchemesOutput {
            income: income.to_string(),
            age: self.age,
            bracket: TaxBracket::from_income(income).label().to_string(),
            schemes: eligible
                .iter()
                .enumerate()
                .map(|(i, e)| SchemeView {
                    index: i + 1,
                    section: e.section,
                    eligibility: e.rule,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}

fn build_rows(eligible: &[EligibleSection]) -> Vec<SchemeRow> {
    eligible
        .iter()
        .enumerate()
        .map(|(i, e)| SchemeRow {
            row_num: i + 1,
            section: e.section.key.to_string(),
            description: e.section.description.to_string(),
            limit: e.section.limit.to_string(),
            investments: e
                .section
                .investments
                .iter()
                .map(|inv| inv.name)
                .collect::<Vec<_>>()
                .join(", "),
            eligible_person: e.rule.eligible_person.to_string(),
            age_limit: e.rule.max_age.to_string(),
        })
        .collect()
}

fn write_csv<W: io::Write>(rows: &[SchemeRow], writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
