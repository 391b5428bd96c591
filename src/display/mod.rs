//! Display module
//!
//! Formats items and settlements for terminal output. All functions return
//! strings; printing is the caller's concern.

pub mod summary;

pub use summary::{format_item_list, format_settlement};
