//! Settlement: apportionment of tax and tip, final per-party totals
//!
//! Tax and tip are distributed in proportion to each party's share of the
//! pre-adjustment subtotal. Apportionment redistributes money but never
//! creates or destroys it: the grand total equals the apportionment base
//! plus whichever adjustment amounts are included, exactly, in cents.

use serde::Serialize;

use crate::error::ResplitResult;
use crate::models::{Adjustment, LineItem, Money, ParticipantSet};

use super::allocate::distribute;
use super::classify::classify;
use super::subtotal::{subtotals, Subtotals};

/// One party's final breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartyTotal {
    /// Item-derived subtotal
    pub subtotal: Money,
    /// Apportioned tax share
    pub tax: Money,
    /// Apportioned tip share
    pub tip: Money,
    /// `subtotal + tax + tip`
    pub total: Money,
}

impl PartyTotal {
    fn new(subtotal: Money, tax: Money, tip: Money) -> Self {
        Self {
            subtotal,
            tax,
            tip,
            total: subtotal + tax + tip,
        }
    }
}

/// The reconciled settlement for a receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settlement {
    /// The payer's breakdown
    pub payer: PartyTotal,
    /// One breakdown per participant, in participant order
    pub participants: Vec<PartyTotal>,
    /// Sum of every party's total
    pub grand_total: Money,
}

impl Settlement {
    /// The pre-adjustment base the settlement was apportioned over
    pub fn base(&self) -> Money {
        self.payer.subtotal + self.participants.iter().map(|p| p.subtotal).sum()
    }
}

/// Compute the settlement for the current item list.
///
/// Pure transformation: no state survives between invocations, so this is
/// re-run in full on every change to the inputs.
pub fn settle(
    items: &[LineItem],
    participants: &ParticipantSet,
    adjustment: &Adjustment,
) -> ResplitResult<Settlement> {
    let classified = classify(items, participants.count())?;
    let sub = subtotals(&classified);
    Ok(apportion(&sub, adjustment))
}

/// The pre-adjustment subtotal base, used as the tip-percentage base
pub fn subtotal_base(items: &[LineItem], participants: &ParticipantSet) -> ResplitResult<Money> {
    let classified = classify(items, participants.count())?;
    Ok(subtotals(&classified).base())
}

fn apportion(sub: &Subtotals, adjustment: &Adjustment) -> Settlement {
    // Weights are subtotal cents, payer first. A zero base makes every
    // weight zero and distribute() then yields all-zero proportions.
    let mut weights: Vec<f64> = Vec::with_capacity(sub.participants.len() + 1);
    weights.push(sub.payer.cents() as f64);
    weights.extend(sub.participants.iter().map(|m| m.cents() as f64));

    let tax_shares = distribute(adjustment.effective_tax(), &weights);
    let tip_shares = distribute(adjustment.effective_tip(), &weights);

    let payer = PartyTotal::new(sub.payer, tax_shares[0], tip_shares[0]);
    let participants: Vec<PartyTotal> = sub
        .participants
        .iter()
        .enumerate()
        .map(|(i, subtotal)| PartyTotal::new(*subtotal, tax_shares[i + 1], tip_shares[i + 1]))
        .collect();

    let grand_total = payer.total + participants.iter().map(|p| p.total).sum();

    Settlement {
        payer,
        participants,
        grand_total,
    }
}
