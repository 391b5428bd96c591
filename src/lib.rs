//! resplit - Terminal-based receipt splitting calculator
//!
//! This library provides the core functionality for splitting a restaurant
//! receipt between you and up to four friends: assign each line item to a
//! party (or share it by percentage), and the engine apportions tax and tip
//! proportionally and produces exact per-party totals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (items, owners, participants, money)
//! - `engine`: The allocation engine (classify, subtotal, settle)
//! - `import`: Items CSV import
//! - `export`: Summary CSV and settlement JSON export
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use resplit::engine::settle;
//! use resplit::models::{Adjustment, ParticipantSet};
//!
//! let settlement = settle(&items, &ParticipantSet::with_count(2), &Adjustment::none())?;
//! println!("you owe {}", settlement.payer.total);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod import;
pub mod models;

pub use error::{ResplitError, ResplitResult};
