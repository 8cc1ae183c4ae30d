pub mod bracket;
pub mod catalog;
pub mod eligibility;
pub mod intent;
pub mod profile;

// Flat public surface for domain types and functions.
pub use bracket::TaxBracket;
pub use catalog::{Catalog, EligibilityRule, TaxSection};
pub use eligibility::{eligible_sections, EligibleSection};
pub use intent::detect_intent;
pub use profile::UserProfile;
