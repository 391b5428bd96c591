//! Receipt line items and ownership
//!
//! A line item is created when receipt items are extracted or imported, is
//! mutated only by reassigning its owner, and is discarded with the session.
//! Ownership is a tagged enum rather than a string union: there is no
//! "friendN" string to misspell and no dynamic key set to walk.

use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::money::Money;
use super::participant::{ParticipantIdx, ShareMap};

/// Opaque stable identifier for a line item, unique within a receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", &self.0.to_string()[..8])
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("item-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Who pays for a line item
#[derive(Debug, Clone, PartialEq)]
pub enum Owner {
    /// Nobody yet. Excluded from every subtotal and from the grand total;
    /// "exists but excluded" is a distinct state from "deleted".
    Unassigned,
    /// The payer ("you")
    Payer,
    /// A single participant
    Participant(ParticipantIdx),
    /// Split across the payer and/or participants by percentage.
    /// An empty map means "equal split", resolved at classification time.
    Shared(ShareMap),
}

impl Owner {
    /// Whether the item counts toward any subtotal
    pub fn is_assigned(&self) -> bool {
        !matches!(self, Owner::Unassigned)
    }
}

/// One priced row of the receipt
#[derive(Debug, Clone)]
pub struct LineItem {
    /// Stable identifier, unique within a receipt
    pub id: ItemId,
    /// Display label; arbitrary text, including quote characters
    pub name: String,
    /// Non-negative price (validated at import, not re-checked here)
    pub price: Money,
    /// Current ownership assignment
    pub owner: Owner,
}

impl LineItem {
    /// Create an unassigned item, the state freshly extracted items are in
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            price,
            owner: Owner::Unassigned,
        }
    }

    /// Create an item with an owner already decided
    pub fn with_owner(name: impl Into<String>, price: Money, owner: Owner) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            price,
            owner,
        }
    }

    /// Reassign the item. The only mutation a line item ever sees.
    pub fn assign(&mut self, owner: Owner) {
        self.owner = owner;
    }
}
