//! Compiled-in reference data: the tax law sections offering deductions and
//! the eligibility rules that decide who may claim them.

use crate::money::format_inr;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("eligibility rule refers to unknown section: {0}")]
    UnknownSection(String),
    #[error("duplicate section: {0}")]
    DuplicateSection(String),
    #[error("duplicate eligibility rule for section: {0}")]
    DuplicateRule(String),
}

/// Maximum deduction that can be claimed under a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "type", content = "amount")]
pub enum DeductionLimit {
    Amount(#[schemars(with = "f64")] Decimal),
    Unlimited,
}

impl std::fmt::Display for DeductionLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeductionLimit::Amount(amount) => write!(f, "{}", format_inr(*amount)),
            DeductionLimit::Unlimited => write!(f, "No upper limit"),
        }
    }
}

/// A financial product qualifying for deduction under a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Investment {
    pub name: &'static str,
    pub description: &'static str,
    pub benefit: &'static str,
    /// Steps to apply, in order
    pub application_steps: Vec<&'static str>,
    /// Reference link, display only
    pub application_link: &'static str,
}

/// A clause of tax law authorizing a deduction category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct TaxSection {
    /// Identifier, e.g. "Section 80C"
    pub key: &'static str,
    pub description: &'static str,
    pub limit: DeductionLimit,
    /// Additional limit available to senior citizens
    #[schemars(with = "Option<f64>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub senior_citizen_limit: Option<Decimal>,
    pub investments: Vec<Investment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "type", content = "value")]
pub enum AgeLimit {
    Max(u32),
    NoLimit,
}

impl AgeLimit {
    pub fn admits(&self, age: u32) -> bool {
        match self {
            AgeLimit::Max(max) => age <= *max,
            AgeLimit::NoLimit => true,
        }
    }
}

impl std::fmt::Display for AgeLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgeLimit::Max(max) => write!(f, "up to {}", max),
            AgeLimit::NoLimit => write!(f, "No age limit"),
        }
    }
}

/// Income ceiling for claiming a section. Carried as reference data only,
/// the eligibility filter does not consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "type", content = "value")]
pub enum IncomeLimit {
    Max(#[schemars(with = "f64")] Decimal),
    NoLimit,
}

impl std::fmt::Display for IncomeLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncomeLimit::Max(max) => write!(f, "up to {}", format_inr(*max)),
            IncomeLimit::NoLimit => write!(f, "No income limit"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct EligibilityRule {
    /// Key of the section this rule applies to
    pub section: &'static str,
    pub eligible_person: &'static str,
    pub max_age: AgeLimit,
    pub income_limit: IncomeLimit,
}

/// Tax law sections and their eligibility rules, in declaration order.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct Catalog {
    pub sections: Vec<TaxSection>,
    pub rules: Vec<EligibilityRule>,
}

impl Catalog {
    /// Check that the sections and rules reference each other consistently.
    pub fn new(
        sections: Vec<TaxSection>,
        rules: Vec<EligibilityRule>,
    ) -> Result<Self, CatalogError> {
        for (i, section) in sections.iter().enumerate() {
            if sections[..i].iter().any(|s| s.key == section.key) {
                return Err(CatalogError::DuplicateSection(section.key.to_string()));
            }
        }
        for (i, rule) in rules.iter().enumerate() {
            if !sections.iter().any(|s| s.key == rule.section) {
                return Err(CatalogError::UnknownSection(rule.section.to_string()));
            }
            if rules[..i].iter().any(|r| r.section == rule.section) {
                return Err(CatalogError::DuplicateRule(rule.section.to_string()));
            }
        }
        for section in &sections {
            if !rules.iter().any(|r| r.section == section.key) {
                log::warn!(
                    "{} has no eligibility rule and will never be offered",
                    section.key
                );
            }
        }
        Ok(Catalog { sections, rules })
    }

    /// The Indian income tax deductions offered by the advisor.
    pub fn builtin() -> Result<Self, CatalogError> {
        Catalog::new(builtin_sections(), builtin_rules())
    }

    pub fn section(&self, key: &str) -> Option<&TaxSection> {
        self.sections.iter().find(|s| s.key == key)
    }

    pub fn rule_for(&self, key: &str) -> Option<&EligibilityRule> {
        self.rules.iter().find(|r| r.section == key)
    }
}

fn builtin_sections() -> Vec<TaxSection> {
    vec![
        TaxSection {
            key: "Section 80C",
            description: "Deductions on investments like PPF, EPF, ELSS, etc.",
            limit: DeductionLimit::Amount(dec!(150000)),
            senior_citizen_limit: None,
            investments: vec![
                Investment {
                    name: "PPF",
                    description: "Public Provident Fund",
                    benefit: "Tax-free interest",
                    application_steps: vec![
                        "Visit a post office or bank where PPF is offered.",
                        "Fill out the PPF account opening form.",
                        "Submit KYC documents and initial deposit.",
                    ],
                    application_link: "https://www.ppf.gov.in/",
                },
                Investment {
                    name: "ELSS",
                    description: "Equity Linked Savings Scheme",
                    benefit: "Tax-free returns after 3 years",
                    application_steps: vec![
                        "Choose a mutual fund company offering ELSS.",
                        "Complete the KYC process with the mutual fund.",
                        "Invest in ELSS through the company\u{2019}s website or physical branch.",
                    ],
                    application_link: "https://groww.in/mutual-funds/elss",
                },
                Investment {
                    name: "NPS",
                    description: "National Pension Scheme",
                    benefit: "Additional deduction of Rs 50,000 under section 80CCD(1B)",
                    application_steps: vec![
                        "Visit the official NPS website or a designated Point of Presence (POP).",
                        "Complete the registration form and KYC process.",
                        "Make your contribution through online or offline modes.",
                    ],
                    application_link: "https://www.npscra.nsdl.co.in/",
                },
            ],
        },
        TaxSection {
            key: "Section 80D",
            description: "Deductions on health insurance premiums",
            limit: DeductionLimit::Amount(dec!(25000)),
            senior_citizen_limit: Some(dec!(50000)),
            investments: vec![Investment {
                name: "Health Insurance",
                description: "Premium paid for health insurance",
                benefit: "Deduction based on age group",
                application_steps: vec![
                    "Purchase a health insurance policy from an insurance company.",
                    "Ensure the policy is in the name of the insured person.",
                    "Keep the premium receipts for claiming deductions.",
                ],
                application_link: "https://www.policybazaar.com/health-insurance/",
            }],
        },
        TaxSection {
            key: "Section 80E",
            description: "Deductions on interest paid on education loans",
            limit: DeductionLimit::Unlimited,
            senior_citizen_limit: None,
            investments: vec![Investment {
                name: "Education Loan",
                description: "Loan taken for higher education",
                benefit: "Deduction on interest paid",
                application_steps: vec![
                    "Apply for an education loan from a bank or financial institution.",
                    "Keep records of loan disbursement and interest payments.",
                    "Claim the deduction while filing your income tax return.",
                ],
                application_link: "https://www.bankbazaar.com/education-loan.html",
            }],
        },
    ]
}

fn builtin_rules() -> Vec<EligibilityRule> {
    vec![
        EligibilityRule {
            section: "Section 80C",
            eligible_person: "Individual and HUF",
            max_age: AgeLimit::NoLimit,
            income_limit: IncomeLimit::NoLimit,
        },
        EligibilityRule {
            section: "Section 80D",
            eligible_person: "Individual and HUF",
            max_age: AgeLimit::Max(60),
            income_limit: IncomeLimit::NoLimit,
        },
        EligibilityRule {
            section: "Section 80E",
            eligible_person: "Individual (for self, spouse, children)",
            max_age: AgeLimit::NoLimit,
            income_limit: IncomeLimit::NoLimit,
        },
    ]
}
