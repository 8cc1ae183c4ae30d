//! Catalog command - print the compiled-in reference data

use super::display::write_section_details;
use crate::core::{Catalog, EligibilityRule, TaxSection};
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Args, Debug)]
pub struct CatalogCommand {
    /// Only print this section (e.g. "Section 80C")
    #[arg(short, long)]
    section: Option<String>,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct CatalogEntry<'a> {
    section: &'a TaxSection,
    eligibility: Option<&'a EligibilityRule>,
}

impl CatalogCommand {
    pub fn exec(&self, catalog: &Catalog) -> anyhow::Result<()> {
        let sections = match &self.section {
            Some(key) => match catalog.section(key) {
                Some(section) => vec![section],
                None => anyhow::bail!("Unknown section: {}", key),
            },
            None => catalog.sections.iter().collect(),
        };

        if self.json {
            let entries: Vec<_> = sections
                .iter()
                .map(|&section| CatalogEntry {
                    section,
                    eligibility: catalog.rule_for(section.key),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }

        let mut out = io::stdout().lock();
        for section in sections {
            write_section_details(&mut out, section)?;
            match catalog.rule_for(section.key) {
                Some(rule) => {
                    writeln!(out, "Eligible: {}", rule.eligible_person)?;
                    writeln!(out, "Age Limit: {}", rule.max_age)?;
                    writeln!(out, "Income Limit: {}", rule.income_limit)?;
                }
                None => writeln!(out, "Eligible: not offered")?,
            }
        }
        Ok(())
    }
}
