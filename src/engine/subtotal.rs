//! Per-party item subtotals
//!
//! A party's subtotal is the sum of its own items plus its percentage slice
//! of every shared item. Slices are cut in whole cents via
//! [`distribute`](super::allocate::distribute), so a shared item whose shares
//! sum to 100 contributes exactly its full price, never a cent more or less.
//! Shares that do not sum to 100 are computed as stored, in which case the
//! item contributes `price * total_shares / 100`.

use crate::models::{Contributor, Money};

use super::allocate::distribute;
use super::classify::Classified;

/// Item-derived subtotals before any tax/tip apportionment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtotals {
    /// The payer's subtotal
    pub payer: Money,
    /// One subtotal per participant, in participant order
    pub participants: Vec<Money>,
}

impl Subtotals {
    /// Total before adjustment: the apportionment base
    pub fn base(&self) -> Money {
        self.payer + self.participants.iter().copied().sum()
    }
}

/// Compute each party's subtotal from a classified item list
pub fn subtotals(classified: &Classified<'_>) -> Subtotals {
    let mut payer: Money = classified.payer_items.iter().map(|i| i.price).sum();
    let mut participants: Vec<Money> = classified
        .participant_items
        .iter()
        .map(|bucket| bucket.iter().map(|i| i.price).sum())
        .collect();

    for shared in &classified.shared_items {
        let total_percent = shared.shares.total();
        if total_percent == 0.0 {
            continue;
        }

        // How much of the price the stored shares actually cover
        let covered = Money::from_cents(
            (shared.item.price.cents() as f64 * total_percent / 100.0).round() as i64,
        );

        let contributors: Vec<Contributor> = shared.shares.iter().map(|(c, _)| c).collect();
        let weights: Vec<f64> = shared.shares.iter().map(|(_, p)| p).collect();
        let slices = distribute(covered, &weights);

        for (contributor, slice) in contributors.into_iter().zip(slices) {
            match contributor {
                Contributor::Payer => payer += slice,
                Contributor::Participant(idx) => {
                    participants[usize::from(idx.get()) - 1] += slice;
                }
            }
        }
    }

    Subtotals {
        payer,
        participants,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::classify::classify;
    use crate::models::{LineItem, Owner, ParticipantIdx, ShareMap};

    fn pidx(i: u8) -> ParticipantIdx {
        ParticipantIdx::new(i).unwrap()
    }

    fn item(name: &str, cents: i64, owner: Owner) -> LineItem {
        LineItem::with_owner(name, Money::from_cents(cents), owner)
    }

    #[test]
    fn test_plain_item_sums() {
        let items = vec![
            item("Burger", 1299, Owner::Payer),
            item("Coffee", 350, Owner::Payer),
            item("Fries", 499, Owner::Participant(pidx(1))),
        ];
        let classified = classify(&items, 1).unwrap();
        let sub = subtotals(&classified);
        assert_eq!(sub.payer.cents(), 1649);
        assert_eq!(sub.participants[0].cents(), 499);
        assert_eq!(sub.base().cents(), 2148);
    }

    #[test]
    fn test_shared_item_equal_split_covers_full_price() {
        // 2.49 split 50/50: 125 + 124, nothing lost to rounding
        let items = vec![item("Soda", 249, Owner::Shared(ShareMap::new()))];
        let classified = classify(&items, 1).unwrap();
        let sub = subtotals(&classified);
        assert_eq!(sub.payer.cents(), 125);
        assert_eq!(sub.participants[0].cents(), 124);
        assert_eq!(sub.base().cents(), 249);
    }

    #[test]
    fn test_partial_sharing_skips_unlisted_participants() {
        let mut shares = ShareMap::new();
        shares.insert(Contributor::Payer, 60.0);
        shares.insert(Contributor::Participant(pidx(2)), 40.0);
        let items = vec![item("Appetizer", 1000, Owner::Shared(shares))];

        let classified = classify(&items, 4).unwrap();
        let sub = subtotals(&classified);
        assert_eq!(sub.payer.cents(), 600);
        assert_eq!(sub.participants[0].cents(), 0);
        assert_eq!(sub.participants[1].cents(), 400);
        assert_eq!(sub.participants[2].cents(), 0);
        assert_eq!(sub.participants[3].cents(), 0);
    }

    #[test]
    fn test_unassigned_item_changes_nothing() {
        let base_items = vec![item("Burger", 1299, Owner::Payer)];
        let with_unassigned = vec![
            item("Burger", 1299, Owner::Payer),
            item("Mystery", 88888, Owner::Unassigned),
        ];

        let a = subtotals(&classify(&base_items, 2).unwrap());
        let b = subtotals(&classify(&with_unassigned, 2).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn test_shares_not_summing_to_hundred_are_computed_as_stored() {
        // 50 + 25 = 75: the item contributes 75% of its price
        let mut shares = ShareMap::new();
        shares.insert(Contributor::Payer, 50.0);
        shares.insert(Contributor::Participant(pidx(1)), 25.0);
        let items = vec![item("Dessert", 1000, Owner::Shared(shares))];

        let sub = subtotals(&classify(&items, 1).unwrap());
        assert_eq!(sub.payer.cents(), 500);
        assert_eq!(sub.participants[0].cents(), 250);
        assert_eq!(sub.base().cents(), 750);
    }

    #[test]
    fn test_three_way_shared_item_is_exact() {
        // 10.00 three ways: 334 + 333 + 333 = 1000
        let items = vec![item("Platter", 1000, Owner::Shared(ShareMap::new()))];
        let classified = classify(&items, 2).unwrap();
        let sub = subtotals(&classified);
        assert_eq!(sub.payer.cents(), 334);
        assert_eq!(sub.participants[0].cents(), 333);
        assert_eq!(sub.participants[1].cents(), 333);
        assert_eq!(sub.base().cents(), 1000);
    }

    #[test]
    fn test_empty_receipt() {
        let sub = subtotals(&classify(&[], 3).unwrap());
        assert_eq!(sub.payer, Money::zero());
        assert_eq!(sub.participants, vec![Money::zero(); 3]);
        assert!(sub.base().is_zero());
    }
}
