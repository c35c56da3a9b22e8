//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Command-line arguments. CLI values override settings loaded from the
/// RON config file.
#[derive(Parser, Debug)]
#[command(name = "helios", about = "Procedural planet generator and orbital simulator")]
pub struct CliArgs {
    /// Path to a RON config file (defaults are used when omitted).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Face grid resolution override.
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Planet radius override.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Fixed time step override.
    #[arg(long)]
    pub time_step: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Number of fixed simulation steps to run.
    #[arg(long, default_value_t = 1000)]
    pub steps: u64,

    /// Number of orbit preview steps to predict.
    #[arg(long, default_value_t = 500)]
    pub preview_steps: u32,

    /// Name of the body whose reference frame the orbit preview uses.
    #[arg(long)]
    pub relative_to: Option<String>,

    /// Export the generated planet mesh as a Wavefront OBJ file.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Scatter this many deterministic asteroids into the system.
    #[arg(long, default_value_t = 0)]
    pub asteroids: u32,

    /// Seed for the asteroid scattering.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

impl Config {
    /// Apply CLI overrides on top of a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(resolution) = args.resolution {
            self.planet.resolution = resolution;
        }
        if let Some(radius) = args.radius {
            self.planet.radius = radius;
        }
        if let Some(time_step) = args.time_step {
            self.simulation.time_step = time_step;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
