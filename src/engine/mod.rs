//! The allocation engine
//!
//! Pure functions from `(items, participants, adjustment)` to a reconciled
//! [`Settlement`]. No state is retained between calls; callers hold the item
//! list and adjustment values and pass them in fresh on every change.
//!
//! Pipeline: [`classify`](classify::classify) partitions the items,
//! [`subtotals`](subtotal::subtotals) sums each bucket (cutting shared items
//! into cent-exact slices), and [`settle`](settle::settle) apportions tax and
//! tip over the subtotal base.

pub mod allocate;
pub mod classify;
pub mod settle;
pub mod subtotal;
pub mod tip;

pub use classify::{classify, Classified, SharedItem};
pub use settle::{settle, subtotal_base, PartyTotal, Settlement};
pub use subtotal::{subtotals, Subtotals};
pub use tip::TipEntry;
