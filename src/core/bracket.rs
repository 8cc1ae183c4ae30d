use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Income tax bracket for an annual income.
///
/// Ranges are continuous: each bracket includes its upper bound, so there is
/// no gap between one bracket's ceiling and the next one's floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxBracket {
    NoTax,
    FivePercent,
    TwentyPercent,
    ThirtyPercent,
}

impl TaxBracket {
    pub fn from_income(income: Decimal) -> Self {
        let bracket = if income <= dec!(250000) {
            TaxBracket::NoTax
        } else if income <= dec!(500000) {
            TaxBracket::FivePercent
        } else if income <= dec!(1000000) {
            TaxBracket::TwentyPercent
        } else {
            TaxBracket::ThirtyPercent
        };
        log::debug!("Income {} classified as {:?}", income, bracket);
        bracket
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaxBracket::NoTax => "No Tax",
            TaxBracket::FivePercent => "5% Tax Bracket",
            TaxBracket::TwentyPercent => "20% Tax Bracket",
            TaxBracket::ThirtyPercent => "30% Tax Bracket",
        }
    }

    /// Nominal marginal rate
    pub fn rate(&self) -> Decimal {
        match self {
            TaxBracket::NoTax => dec!(0),
            TaxBracket::FivePercent => dec!(0.05),
            TaxBracket::TwentyPercent => dec!(0.20),
            TaxBracket::ThirtyPercent => dec!(0.30),
        }
    }
}

impl std::fmt::Display for TaxBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
