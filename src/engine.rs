use crate::currency::{ChangePart, DENOMINATIONS};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Computes and formats change breakdowns over a fixed denomination set.
///
/// The set is injected at construction and never mutated. Inputs are assumed to
/// be pre-validated: price > 0, payment >= price, at most 2 fractional digits.
pub struct ChangeEngine {
    denominations: &'static [u32],
}

impl Default for ChangeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeEngine {
    pub fn new() -> Self {
        Self {
            denominations: &DENOMINATIONS,
        }
    }

    /// Converts the decimal difference into whole pence, truncating toward zero.
    ///
    /// Amounts with more than 2 fractional digits are outside the contract; the
    /// sub-penny remainder is dropped, not rounded. Change beyond `u64::MAX`
    /// pence saturates to that bound.
    pub fn change_due(&self, price: Decimal, payment: Decimal) -> u64 {
        ((payment - price) * Decimal::ONE_HUNDRED)
            .trunc()
            .to_u64()
            .unwrap_or(u64::MAX)
    }

    /// Greedy single pass: largest denomination first, maximal multiple each.
    ///
    /// The smallest denomination is 1p, so the remainder is always consumed.
    pub fn breakdown(&self, mut pence: u64) -> Vec<ChangePart> {
        let mut parts = Vec::new();
        for &denomination in self.denominations {
            let count = pence / u64::from(denomination);
            if count != 0 {
                pence -= count * u64::from(denomination);
                parts.push(ChangePart {
                    count,
                    denomination,
                });
            }
        }
        parts
    }

    /// Produces the display lines for one transaction.
    pub fn render(&self, price: Decimal, payment: Decimal) -> Vec<String> {
        let due = self.change_due(price, payment);
        if due == 0 {
            return vec!["No change due".to_string()];
        }

        let mut lines = vec!["Your change is:".to_string()];
        lines.extend(self.breakdown(due).iter().map(ToString::to_string));
        lines
    }
}
