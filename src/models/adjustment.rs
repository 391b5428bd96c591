//! Tax and tip adjustments
//!
//! Amounts are entered directly off the printed receipt rather than derived
//! from a rate. The include flags gate whether an amount is apportioned at
//! all; an excluded amount is retained (it is still on screen) but has no
//! effect on totals.

use super::money::Money;

/// Tax and tip to apportion on top of the item subtotals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Adjustment {
    /// Tax amount as printed on the receipt
    pub tax: Money,
    /// Tip amount (kept consistent with a percentage by [`crate::engine::TipEntry`])
    pub tip: Money,
    /// Whether tax is apportioned into totals
    pub include_tax: bool,
    /// Whether tip is apportioned into totals
    pub include_tip: bool,
}

impl Adjustment {
    /// No adjustments at all
    pub fn none() -> Self {
        Self::default()
    }

    /// The tax amount that actually enters totals
    pub fn effective_tax(&self) -> Money {
        if self.include_tax {
            self.tax
        } else {
            Money::zero()
        }
    }

    /// The tip amount that actually enters totals
    pub fn effective_tip(&self) -> Money {
        if self.include_tip {
            self.tip
        } else {
            Money::zero()
        }
    }
}
