//! Single-filter fractal noise evaluation.

use glam::DVec3;
use noise::{NoiseFn, Simplex};
use serde::{Deserialize, Serialize};

use crate::NoiseError;

/// Which octave-compositing rule a filter uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    /// Plain fBm: octaves of `(noise + 1) / 2`, summed. Rolling hills and
    /// continent-scale undulation.
    #[default]
    Simple,
    /// Ridged fBm: octaves of `(1 - |noise|)²`, each weighted by the previous
    /// octave's value. Produces sharp crests for mountain ranges.
    Ridged,
}

/// Parameters for one noise filter.
///
/// Field names are part of the external configuration contract; the same
/// names appear in RON config files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParams {
    /// Octave-compositing rule.
    pub kind: FilterKind,
    /// Number of octaves to composite. Must be at least 1.
    pub num_layers: u32,
    /// Final scale applied to the accumulated value. Negative strength is
    /// allowed and inverts the displacement direction.
    pub strength: f64,
    /// Frequency of the first octave. Must be positive.
    pub base_roughness: f64,
    /// Frequency multiplier per octave. Must be positive; typically > 1.
    pub roughness: f64,
    /// Amplitude multiplier per octave, typically in (0, 1).
    pub persistence: f64,
    /// Height floor subtracted from the accumulated value before scaling.
    /// Lets ocean floors clamp up to a shared sea level.
    pub min_value: f64,
    /// Domain offset, so layers with identical seeds can still sample
    /// different regions of the noise field.
    pub center: DVec3,
    /// Per-octave weight feedback for [`FilterKind::Ridged`]; higher values
    /// concentrate detail on existing ridges. Ignored by `Simple`.
    pub weight_multiplier: f64,
    /// Seed for the underlying gradient noise.
    pub seed: u32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            kind: FilterKind::Simple,
            num_layers: 1,
            strength: 1.0,
            base_roughness: 1.0,
            roughness: 2.0,
            persistence: 0.5,
            min_value: 0.0,
            center: DVec3::ZERO,
            weight_multiplier: 0.8,
            seed: 0,
        }
    }
}

impl NoiseParams {
    /// Check the parameters for values that would make evaluation diverge
    /// or degenerate. Called when a filter is built.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.num_layers == 0 {
            return Err(NoiseError::ZeroOctaves);
        }
        if self.base_roughness <= 0.0 {
            return Err(NoiseError::NonPositiveBaseRoughness(self.base_roughness));
        }
        if self.roughness <= 0.0 {
            return Err(NoiseError::NonPositiveRoughness(self.roughness));
        }
        Ok(())
    }
}

/// A deterministic scalar noise field over 3D points.
///
/// Evaluation is a pure function of the point and the (immutable) params:
/// the same filter evaluated at the same point always returns the same
/// value, which is what makes planet rebuilds reproducible.
pub struct NoiseFilter {
    noise: Simplex,
    params: NoiseParams,
}

impl NoiseFilter {
    /// Build a filter, validating its parameters.
    pub fn new(params: NoiseParams) -> Result<Self, NoiseError> {
        params.validate()?;
        let noise = Simplex::new(params.seed);
        Ok(Self { noise, params })
    }

    /// Evaluate the filter at a point (typically on the unit sphere).
    #[must_use]
    pub fn evaluate(&self, point: DVec3) -> f64 {
        let total = match self.params.kind {
            FilterKind::Simple => self.evaluate_simple(point),
            FilterKind::Ridged => self.evaluate_ridged(point),
        };
        (total - self.params.min_value) * self.params.strength
    }

    fn evaluate_simple(&self, point: DVec3) -> f64 {
        let mut total = 0.0;
        let mut frequency = self.params.base_roughness;
        let mut amplitude = 1.0;

        for _ in 0..self.params.num_layers {
            let v = self.sample(point * frequency + self.params.center);
            // Remap [-1, 1] to [0, 1] so octaves only ever add height.
            total += (v + 1.0) * 0.5 * amplitude;
            frequency *= self.params.roughness;
            amplitude *= self.params.persistence;
        }

        total
    }

    fn evaluate_ridged(&self, point: DVec3) -> f64 {
        let mut total = 0.0;
        let mut frequency = self.params.base_roughness;
        let mut amplitude = 1.0;
        let mut weight = 1.0;

        for _ in 0..self.params.num_layers {
            let mut v = 1.0 - self.sample(point * frequency + self.params.center).abs();
            v *= v;
            v *= weight;
            weight = (v * self.params.weight_multiplier).clamp(0.0, 1.0);

            total += v * amplitude;
            frequency *= self.params.roughness;
            amplitude *= self.params.persistence;
        }

        total
    }

    #[inline]
    fn sample(&self, p: DVec3) -> f64 {
        self.noise.get([p.x, p.y, p.z])
    }

    /// The parameters this filter was built with.
    #[must_use]
    pub fn params(&self) -> &NoiseParams {
        &self.params
    }
}
