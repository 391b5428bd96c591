//! Participants and share maps
//!
//! A receipt is split between the payer ("you") and an ordered set of
//! participants. Participant indices are 1-based bounded integers rather than
//! open-ended string keys, so an owner can only ever name a participant that
//! the type system knows about; whether the index is within the current
//! participant count is checked by the classifier.

use std::collections::BTreeMap;
use std::fmt;

/// 1-based index of a participant. Index 0 cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantIdx(u8);

impl ParticipantIdx {
    /// Create a participant index. Returns `None` for 0.
    pub fn new(index: u8) -> Option<Self> {
        if index == 0 {
            None
        } else {
            Some(Self(index))
        }
    }

    /// The 1-based index value
    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for ParticipantIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// A party that can hold a slice of a shared item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Contributor {
    /// The payer ("you")
    Payer,
    /// One of the participants
    Participant(ParticipantIdx),
}

impl fmt::Display for Contributor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contributor::Payer => write!(f, "You"),
            Contributor::Participant(idx) => write!(f, "{}", idx),
        }
    }
}

/// Percentage split of a shared item across contributors.
///
/// Percentages are nominally in `[0, 100]` and nominally sum to 100, but the
/// map itself enforces neither: callers may store whatever the user entered
/// and the engine computes correctly for those numbers. The one operation
/// that does enforce the sum is [`ShareMap::set`], the interactive-edit path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShareMap(BTreeMap<Contributor, f64>);

impl ShareMap {
    /// Create an empty share map
    pub fn new() -> Self {
        Self::default()
    }

    /// Equal split across the payer and `participant_count` participants.
    ///
    /// Each contributor gets `100 / (participant_count + 1)` percent. Always
    /// computed fresh from the current participant count, never cached on the
    /// item, since the count may change after the item was marked shared.
    pub fn equal_split(participant_count: u8) -> Self {
        let share = 100.0 / (f64::from(participant_count) + 1.0);
        let mut map = BTreeMap::new();
        map.insert(Contributor::Payer, share);
        for i in 1..=participant_count {
            let idx = ParticipantIdx::new(i).expect("1-based loop index");
            map.insert(Contributor::Participant(idx), share);
        }
        Self(map)
    }

    /// Store a percentage without touching other entries.
    ///
    /// Used by import: the stored numbers are whatever the source said, even
    /// if they do not sum to 100.
    pub fn insert(&mut self, who: Contributor, percent: f64) {
        self.0.insert(who, percent);
    }

    /// The stored percentage for a contributor, or 0 when absent.
    ///
    /// Absent keys are a supported state (partial sharing), not an error.
    pub fn share_of(&self, who: Contributor) -> f64 {
        self.0.get(&who).copied().unwrap_or(0.0)
    }

    /// Interactive edit of one contributor's percentage.
    ///
    /// The new value is clamped to `[0, 100]` and the remainder is
    /// redistributed over the other contributors in proportion to their
    /// previous values (equally when they were all zero), so the map sums to
    /// 100 after every edit instead of drifting across repeated edits.
    pub fn set(&mut self, who: Contributor, percent: f64) {
        let percent = percent.clamp(0.0, 100.0);
        let others: Vec<Contributor> = self.0.keys().copied().filter(|c| *c != who).collect();
        self.0.insert(who, percent);

        if others.is_empty() {
            return;
        }

        let remaining = 100.0 - percent;
        let other_total: f64 = others.iter().map(|c| self.share_of(*c)).sum();
        for c in &others {
            let value = if other_total > 0.0 {
                self.share_of(*c) / other_total * remaining
            } else {
                remaining / others.len() as f64
            };
            self.0.insert(*c, value);
        }
    }

    /// Whether any shares are stored
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of the stored percentages
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Iterate contributors and percentages in deterministic order
    /// (payer first, then participants by index)
    pub fn iter(&self) -> impl Iterator<Item = (Contributor, f64)> + '_ {
        self.0.iter().map(|(c, p)| (*c, *p))
    }
}

impl FromIterator<(Contributor, f64)> for ShareMap {
    fn from_iter<I: IntoIterator<Item = (Contributor, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The ordered set of participants for the current receipt session.
///
/// The product caps this at four participants, but that cap is a caller
/// convention (enforced by the CLI), not an engine invariant.
#[derive(Debug, Clone, Default)]
pub struct ParticipantSet {
    initials: Vec<String>,
}

impl ParticipantSet {
    /// Create a participant set of `count` participants without initials
    pub fn with_count(count: u8) -> Self {
        Self {
            initials: vec![String::new(); usize::from(count)],
        }
    }

    /// Create a participant set from display initials, one per participant.
    /// An empty string means the participant has no initials.
    pub fn from_initials(initials: Vec<String>) -> Self {
        Self { initials }
    }

    /// Number of participants
    pub fn count(&self) -> u8 {
        self.initials.len() as u8
    }

    /// Short label for a participant: initials, falling back to "FN".
    /// Used in compact contexts (shared-split labels, tables).
    pub fn label(&self, idx: ParticipantIdx) -> String {
        match self.initials.get(usize::from(idx.get()) - 1) {
            Some(s) if !s.is_empty() => s.clone(),
            _ => format!("F{}", idx.get()),
        }
    }

    /// Full name for a participant: initials, falling back to "Friend N".
    /// Used in summary rows.
    pub fn name(&self, idx: ParticipantIdx) -> String {
        match self.initials.get(usize::from(idx.get()) - 1) {
            Some(s) if !s.is_empty() => s.clone(),
            _ => format!("Friend {}", idx.get()),
        }
    }

    /// Iterate participant indices in order
    pub fn indices(&self) -> impl Iterator<Item = ParticipantIdx> {
        (1..=self.count()).map(|i| ParticipantIdx::new(i).expect("1-based range"))
    }
}
