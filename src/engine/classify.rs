//! Item classification
//!
//! Stable partition of the item list into the payer's bucket, one bucket per
//! participant, and the shared bucket. Unassigned items land nowhere: they
//! exist but are excluded from every subtotal and from the apportionment
//! base, which is not the same thing as having been deleted.

use crate::error::{ResplitError, ResplitResult};
use crate::models::{Contributor, LineItem, Owner, ShareMap};

/// A shared item with its share map resolved for the current participant count
#[derive(Debug)]
pub struct SharedItem<'a> {
    pub item: &'a LineItem,
    /// Stored shares, or a fresh equal split when none were stored
    pub shares: ShareMap,
}

/// The partitioned item list
#[derive(Debug)]
pub struct Classified<'a> {
    /// Items owned by the payer, in receipt order
    pub payer_items: Vec<&'a LineItem>,
    /// One bucket per participant (index 0 is participant 1), receipt order
    pub participant_items: Vec<Vec<&'a LineItem>>,
    /// Shared items with resolved share maps, receipt order
    pub shared_items: Vec<SharedItem<'a>>,
}

/// Partition `items` for `participant_count` participants.
///
/// A `Shared` owner with an empty share map resolves to an equal split of
/// `100 / (participant_count + 1)` percent per contributor, computed here
/// rather than when the item was marked shared: the participant count may
/// have changed in between.
///
/// Fails fast on a participant index above `participant_count`, whether it
/// appears as an item owner or as a share-map key. That is a caller/model
/// mismatch, not user data to degrade gracefully on.
pub fn classify(items: &[LineItem], participant_count: u8) -> ResplitResult<Classified<'_>> {
    let mut payer_items = Vec::new();
    let mut participant_items: Vec<Vec<&LineItem>> =
        (0..participant_count).map(|_| Vec::new()).collect();
    let mut shared_items = Vec::new();

    for item in items {
        match &item.owner {
            Owner::Unassigned => {}
            Owner::Payer => payer_items.push(item),
            Owner::Participant(idx) => {
                if idx.get() > participant_count {
                    return Err(ResplitError::ParticipantOutOfRange {
                        index: idx.get(),
                        count: participant_count,
                    });
                }
                participant_items[usize::from(idx.get()) - 1].push(item);
            }
            Owner::Shared(shares) => {
                let shares = if shares.is_empty() {
                    ShareMap::equal_split(participant_count)
                } else {
                    for (contributor, _) in shares.iter() {
                        if let Contributor::Participant(idx) = contributor {
                            if idx.get() > participant_count {
                                return Err(ResplitError::ParticipantOutOfRange {
                                    index: idx.get(),
                                    count: participant_count,
                                });
                            }
                        }
                    }
                    shares.clone()
                };
                shared_items.push(SharedItem { item, shares });
            }
        }
    }

    Ok(Classified {
        payer_items,
        participant_items,
        shared_items,
    })
}
