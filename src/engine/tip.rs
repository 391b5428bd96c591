//! Tip amount/percentage reconciliation
//!
//! The tip can be edited as an amount or as a percentage of the
//! pre-adjustment base; the two are derived state of each other, not
//! independent fields. Editing one recomputes the other against the base
//! supplied by the caller at edit time.

use crate::models::Money;

/// A tip entry keeping amount and percentage mutually consistent
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TipEntry {
    /// Tip amount in cents
    pub amount: Money,
    /// Equivalent percentage of the pre-adjustment base, rounded to a whole
    /// percent when derived from an amount edit
    pub percent: f64,
}

impl TipEntry {
    /// Edit the amount; re-derive the percentage from `base`.
    ///
    /// A zero base leaves the percentage untouched: there is no percentage
    /// to derive from nothing, and clobbering the old value would lose the
    /// user's last explicit entry.
    pub fn set_amount(&mut self, amount: Money, base: Money) {
        self.amount = amount;
        if base.cents() > 0 {
            self.percent = (amount.cents() as f64 / base.cents() as f64 * 100.0).round();
        }
    }

    /// Edit the percentage; re-derive the amount from `base`, rounded to
    /// whole cents.
    pub fn set_percent(&mut self, percent: f64, base: Money) {
        self.percent = percent;
        self.amount = Money::from_cents((percent / 100.0 * base.cents() as f64).round() as i64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_edit_derives_percentage() {
        let mut tip = TipEntry::default();
        tip.set_amount(Money::from_cents(1500), Money::from_cents(10000));
        assert_eq!(tip.amount.cents(), 1500);
        assert_eq!(tip.percent, 15.0);
    }

    #[test]
    fn test_percent_edit_derives_amount() {
        let mut tip = TipEntry::default();
        tip.set_percent(20.0, Money::from_cents(10000));
        assert_eq!(tip.amount.cents(), 2000);
        assert_eq!(tip.percent, 20.0);
    }

    #[test]
    fn test_round_trip_reflects_formula_not_stale_state() {
        // Edit one side, read the other, repeat
        let base = Money::from_cents(10000);
        let mut tip = TipEntry::default();

        tip.set_amount(Money::from_cents(1500), base);
        assert_eq!(tip.percent, 15.0);

        tip.set_percent(20.0, base);
        assert_eq!(tip.amount.cents(), 2000);

        tip.set_amount(Money::from_cents(333), base);
        assert_eq!(tip.percent, 3.0); // 3.33 rounds to 3
    }

    #[test]
    fn test_percentage_derivation_rounds() {
        let mut tip = TipEntry::default();
        tip.set_amount(Money::from_cents(156), Money::from_cents(1000));
        assert_eq!(tip.percent, 16.0); // 15.6 rounds up
    }

    #[test]
    fn test_amount_derivation_rounds_to_cents() {
        let mut tip = TipEntry::default();
        tip.set_percent(15.0, Money::from_cents(2047));
        // 15% of 20.47 = 3.0705 -> 3.07
        assert_eq!(tip.amount.cents(), 307);
    }

    #[test]
    fn test_zero_base_leaves_percentage_unchanged() {
        let mut tip = TipEntry::default();
        tip.set_percent(18.0, Money::from_cents(10000));
        assert_eq!(tip.amount.cents(), 1800);

        tip.set_amount(Money::from_cents(500), Money::zero());
        assert_eq!(tip.amount.cents(), 500);
        assert_eq!(tip.percent, 18.0); // untouched

        // Percent edit against a zero base gives a zero amount, not a fault
        tip.set_percent(25.0, Money::zero());
        assert_eq!(tip.amount, Money::zero());
    }
}
