//! Configuration module for Horizon
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::HorizonPaths;
pub use settings::Settings;
