//! Harvest week filler library
//!
//! Resolves a Harvest project and task by name and books a weekly hour
//! total, split evenly over Monday to Friday, for a range of ISO weeks.

pub mod cli;
pub mod config;
pub mod error;
pub mod helpers;
pub mod models;
pub mod resolver;
pub mod service;

pub use config::{Credentials, HarvestConfig};
pub use error::{ConfigError, HarvestError, ResolutionNotFound};
pub use service::{FillRequest, FillerService, RunOutcome};

// Re-export key types for convenience
pub use helpers::harvest::HarvestApi;
pub use resolver::Target;
