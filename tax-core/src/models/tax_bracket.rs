use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal-rate band of a tax rate schedule.
///
/// `max_income` is `None` for the open-ended top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
}

impl TaxBracket {
    /// Returns `true` when `income` does not reach past this bracket.
    pub fn contains_top_of(
        &self,
        income: Decimal,
    ) -> bool {
        self.max_income.is_none_or(|max| income <= max)
    }
}
