//! Biome-index math for surface coloring.
//!
//! The external coloring system consumes a single `[0, 1]` biome index per
//! vertex (written into `uv.x`) and resolves it against its own gradient
//! textures. Only the index math lives here: a latitude-like height percent,
//! warped by an optional noise filter, blended smoothly across configured
//! biome thresholds.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::TerrainError;
use helios_noise::{NoiseFilter, NoiseParams};

/// One latitude band of a planet's biome table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiomeBand {
    /// Height percent (0 = south pole, 1 = north pole) where this biome
    /// starts. Bands are listed south to north.
    pub start_height: f64,
}

impl Default for BiomeBand {
    fn default() -> Self {
        Self { start_height: 0.0 }
    }
}

/// Configuration for the biome-index function.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiomeSettings {
    /// Biome bands in south-to-north order.
    pub biomes: Vec<BiomeBand>,
    /// Optional noise warping of the height percent, so biome borders
    /// wander instead of following perfect latitude lines.
    pub noise: Option<NoiseParams>,
    /// Offset subtracted from the warp noise before scaling.
    pub noise_offset: f64,
    /// Scale of the warp noise contribution.
    pub noise_strength: f64,
    /// Width of the smooth blend across each biome border.
    pub blend_amount: f64,
}

impl Default for BiomeSettings {
    fn default() -> Self {
        Self {
            biomes: vec![
                BiomeBand { start_height: 0.0 },
                BiomeBand { start_height: 0.35 },
                BiomeBand { start_height: 0.75 },
            ],
            noise: None,
            noise_offset: 0.0,
            noise_strength: 0.0,
            blend_amount: 0.1,
        }
    }
}

/// Evaluates the biome index for points on the unit sphere.
pub struct BiomeSampler {
    settings: BiomeSettings,
    warp: Option<NoiseFilter>,
}

impl BiomeSampler {
    /// Build a sampler, validating the warp noise parameters if present.
    pub fn new(settings: BiomeSettings) -> Result<Self, TerrainError> {
        let warp = match &settings.noise {
            Some(params) => Some(NoiseFilter::new(params.clone())?),
            None => None,
        };
        Ok(Self { settings, warp })
    }

    /// Biome index in `[0, 1]` for a unit-sphere point.
    ///
    /// Monotonically blends from one biome to the next as the (possibly
    /// noise-warped) height percent crosses each band's start threshold.
    /// Returns `0.0` when no biome bands are configured.
    #[must_use]
    pub fn biome_percent(&self, point_on_unit_sphere: DVec3) -> f64 {
        let num_biomes = self.settings.biomes.len();
        if num_biomes == 0 {
            return 0.0;
        }

        let mut height_percent = (point_on_unit_sphere.y + 1.0) * 0.5;
        if let Some(warp) = &self.warp {
            height_percent += (warp.evaluate(point_on_unit_sphere) - self.settings.noise_offset)
                * self.settings.noise_strength;
        }

        // The tiny epsilon keeps the blend well-defined at blend_amount = 0.
        let blend_range = self.settings.blend_amount * 0.5 + 0.001;
        let mut biome_index = 0.0;

        for (i, biome) in self.settings.biomes.iter().enumerate() {
            let dst = height_percent - biome.start_height;
            let weight = inverse_lerp(-blend_range, blend_range, dst);
            biome_index *= 1.0 - weight;
            biome_index += i as f64 * weight;
        }

        biome_index / (num_biomes as f64 - 1.0).max(1.0)
    }
}

/// Where `value` sits between `a` and `b`, clamped to `[0, 1]`.
fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}
