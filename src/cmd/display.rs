use crate::core::TaxSection;
use crate::money::format_inr;
use std::io::{self, Write};

/// One numbered entry of a scheme listing.
pub fn write_section_summary<W: Write>(
    mut out: W,
    index: usize,
    section: &TaxSection,
) -> io::Result<()> {
    writeln!(out, "{}. Section: {}", index, section.key)?;
    writeln!(out, "   Description: {}", section.description)?;
    writeln!(out, "   Investment Limit: {}", section.limit)
}

/// Full details of a section and every investment under it.
pub fn write_section_details<W: Write>(mut out: W, section: &TaxSection) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Detailed Information about {}:", section.key)?;
    writeln!(out, "Description: {}", section.description)?;
    writeln!(out, "Investment Limit: {}", section.limit)?;
    if let Some(extra) = section.senior_citizen_limit {
        writeln!(out, "Senior Citizen Limit: {}", format_inr(extra))?;
    }
    for investment in &section.investments {
        writeln!(out)?;
        writeln!(out, "Investment: {}", investment.name)?;
        writeln!(out, "Description: {}", investment.description)?;
        writeln!(out, "Benefit: {}", investment.benefit)?;
        writeln!(out, "Application Steps:")?;
        for step in &investment.application_steps {
            writeln!(out, "- {}", step)?;
        }
        writeln!(out, "Application Link: {}", investment.application_link)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Catalog;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn summary_lines() {
        let catalog = Catalog::builtin().unwrap();
        let section = catalog.section("Section 80E").unwrap();
        let text = render(|out| write_section_summary(out, 3, section));
        assert_eq!(
            text,
            "3. Section: Section 80E\n   \
             Description: Deductions on interest paid on education loans\n   \
             Investment Limit: No upper limit\n"
        );
    }

    #[test]
    fn details_list_steps_in_order() {
        let catalog = Catalog::builtin().unwrap();
        let section = catalog.section("Section 80D").unwrap();
        let text = render(|out| write_section_details(out, section));
        assert!(text.contains("Detailed Information about Section 80D:"));
        assert!(text.contains("Investment Limit: INR 25000"));
        assert!(text.contains("Senior Citizen Limit: INR 50000"));
        assert!(text.contains("Investment: Health Insurance"));
        let first = text.find("- Purchase a health insurance policy").unwrap();
        let second = text.find("- Ensure the policy is in the name").unwrap();
        let third = text.find("- Keep the premium receipts").unwrap();
        assert!(first < second && second < third);
        assert!(text.contains("Application Link: https://www.policybazaar.com/health-insurance/"));
    }

    #[test]
    fn details_omit_missing_senior_limit() {
        let catalog = Catalog::builtin().unwrap();
        let section = catalog.section("Section 80C").unwrap();
        let text = render(|out| write_section_details(out, section));
        assert!(!text.contains("Senior Citizen Limit"));
        assert_eq!(text.matches("Investment: ").count(), 3);
    }
}
