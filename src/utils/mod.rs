//! Utility functions and helpers
//!
//! Logging setup and platform paths.

pub mod app_paths;
pub mod dual_logging;
pub mod logging;
