//! Configuration module for longhand
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::{ModelSize, Settings};
