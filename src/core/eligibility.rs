use super::catalog::{Catalog, EligibilityRule, TaxSection};
use rust_decimal::Decimal;

/// A section offered to the user together with the rule that admitted it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EligibleSection<'a> {
    pub section: &'a TaxSection,
    pub rule: &'a EligibilityRule,
}

/// Sections the user may claim, in catalog order.
///
/// Only the age limit is enforced. Sections without an eligibility rule are
/// never offered. The income limit is carried in the rules but not applied.
pub fn eligible_sections(
    catalog: &Catalog,
    income: Decimal,
    age: u32,
) -> Vec<EligibleSection<'_>> {
    let eligible: Vec<_> = catalog
        .sections
        .iter()
        .filter_map(|section| {
            let rule = catalog.rule_for(section.key)?;
            rule.max_age
                .admits(age)
                .then_some(EligibleSection { section, rule })
        })
        .collect();

    log::debug!(
        "Eligible for income {} age {}: {:?}",
        income,
        age,
        eligible.iter().map(|e| e.section.key).collect::<Vec<_>>()
    );
    eligible
}
