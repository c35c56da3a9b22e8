//! Configuration for the planet generator and orbital simulation: RON
//! persistence with serde, eager validation, and CLI overrides.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugSettings, PlanetSettings};
pub use error::ConfigError;
