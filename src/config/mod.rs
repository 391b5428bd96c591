//! Configuration module
//!
//! Path resolution and persisted user settings.

pub mod paths;
pub mod settings;

pub use paths::ResplitPaths;
pub use settings::Settings;
