use super::bracket::TaxBracket;
use rust_decimal::Decimal;

/// What the user told us during one session.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub income: Decimal,
    /// Only asked for when the user wants to see schemes
    pub age: Option<u32>,
    pub bracket: TaxBracket,
}

impl UserProfile {
    pub fn from_income(income: Decimal) -> Self {
        UserProfile {
            income,
            age: None,
            bracket: TaxBracket::from_income(income),
        }
    }
}
