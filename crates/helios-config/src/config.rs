//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use helios_nbody::{BodySpec, SimulationParams};
use helios_noise::{FilterKind, NoiseLayer, NoiseParams};
use helios_terrain::BiomeSettings;

use crate::ConfigError;

/// Top-level configuration for a generation + simulation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Planet mesh and noise settings.
    pub planet: PlanetSettings,
    /// Biome-index settings for surface coloring.
    pub biome: BiomeSettings,
    /// Simulation constants.
    pub simulation: SimulationParams,
    /// Celestial bodies in registry order.
    pub bodies: Vec<BodySpec>,
    /// Debug/development settings.
    pub debug: DebugSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            planet: PlanetSettings::default(),
            biome: BiomeSettings::default(),
            simulation: SimulationParams::default(),
            bodies: default_bodies(),
            debug: DebugSettings::default(),
        }
    }
}

/// Planet mesh and terrain noise configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetSettings {
    /// Vertex grid resolution per cube face. Minimum 2.
    pub resolution: u32,
    /// Planet radius in engine units.
    pub radius: f64,
    /// Terrain noise layers, in evaluation order.
    pub noise_layers: Vec<NoiseLayer>,
}

impl Default for PlanetSettings {
    fn default() -> Self {
        Self {
            resolution: 64,
            radius: 1.0,
            noise_layers: vec![
                // Broad continents, also the mask for the mountain layer.
                NoiseLayer {
                    enabled: true,
                    use_first_layer_as_mask: false,
                    params: NoiseParams {
                        kind: FilterKind::Simple,
                        num_layers: 4,
                        strength: 0.12,
                        base_roughness: 1.1,
                        roughness: 2.2,
                        persistence: 0.5,
                        min_value: 0.95,
                        center: DVec3::ZERO,
                        weight_multiplier: 0.8,
                        seed: 0,
                    },
                },
                // Ridged mountain ranges gated to the continents.
                NoiseLayer {
                    enabled: true,
                    use_first_layer_as_mask: true,
                    params: NoiseParams {
                        kind: FilterKind::Ridged,
                        num_layers: 5,
                        strength: 0.8,
                        base_roughness: 1.6,
                        roughness: 2.5,
                        persistence: 0.5,
                        min_value: 0.0,
                        center: DVec3::ZERO,
                        weight_multiplier: 0.8,
                        seed: 1,
                    },
                },
            ],
        }
    }
}

/// Debug/development configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugSettings {
    /// Log level override (e.g., "debug", "info", "warn"). Empty uses the
    /// default filter.
    pub log_level: String,
}

/// A small default system: an anchored star, one planet, one moon.
fn default_bodies() -> Vec<BodySpec> {
    vec![
        BodySpec {
            name: "sun".into(),
            radius: 10.0,
            surface_gravity: 50.0,
            movable: false,
            ..Default::default()
        },
        BodySpec {
            name: "terra".into(),
            radius: 1.0,
            surface_gravity: 10.0,
            initial_position: DVec3::new(100.0, 0.0, 0.0),
            // Circular orbit speed around the sun: sqrt(G * M / r).
            initial_velocity: DVec3::new(0.0, 0.0, 7.07),
            ..Default::default()
        },
        BodySpec {
            name: "luna".into(),
            radius: 0.3,
            surface_gravity: 1.5,
            initial_position: DVec3::new(105.0, 0.0, 0.0),
            initial_velocity: DVec3::new(0.0, 0.0, 7.07 + 1.41),
            parent: Some("terra".into()),
            ..Default::default()
        },
    ]
}

impl Config {
    /// Load configuration from a RON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        ron::from_str(&contents).map_err(ConfigError::Parse)
    }

    /// Load configuration from a RON file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a RON file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let pretty = ron::ser::PrettyConfig::default();
        let contents =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents).map_err(ConfigError::Write)
    }

    /// Validate every section eagerly, before anything is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.planet.resolution < 2 {
            return Err(ConfigError::ResolutionTooSmall(self.planet.resolution));
        }
        if !(self.planet.radius.is_finite() && self.planet.radius > 0.0) {
            return Err(ConfigError::InvalidRadius(self.planet.radius));
        }
        for layer in &self.planet.noise_layers {
            if layer.enabled {
                layer.params.validate()?;
            }
        }
        if let Some(warp) = &self.biome.noise {
            warp.validate()?;
        }
        self.simulation.validate()?;
        Ok(())
    }
}
