//! Core data models for resplit
//!
//! This module contains the data structures that represent the receipt
//! domain: line items, ownership assignments, participants, money, and
//! tax/tip adjustments.

pub mod adjustment;
pub mod item;
pub mod money;
pub mod participant;

pub use adjustment::Adjustment;
pub use item::{ItemId, LineItem, Owner};
pub use money::Money;
pub use participant::{Contributor, ParticipantIdx, ParticipantSet, ShareMap};
