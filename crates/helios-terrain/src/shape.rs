//! Displacement of unit-sphere points into terrain.

use glam::DVec3;
use helios_noise::{NoiseLayer, NoiseStack};
use tracing::warn;

use crate::{ElevationRange, TerrainError};

/// Maps points on the unit sphere to displaced points on the planet surface.
///
/// This is the single place where elevations enter the shared
/// [`ElevationRange`]: callers that want min/max tracking must displace
/// through [`ShapeGenerator::displace`] rather than evaluating the stack
/// themselves.
pub struct ShapeGenerator {
    stack: NoiseStack,
    planet_radius: f64,
}

impl ShapeGenerator {
    /// Build a shape generator, validating the radius and every noise layer.
    pub fn new(planet_radius: f64, layers: &[NoiseLayer]) -> Result<Self, TerrainError> {
        if !(planet_radius.is_finite() && planet_radius > 0.0) {
            return Err(TerrainError::InvalidRadius(planet_radius));
        }
        let stack = NoiseStack::new(layers)?;
        Ok(Self {
            stack,
            planet_radius,
        })
    }

    /// Raw composed elevation at a point, without range tracking.
    ///
    /// Exactly `0.0` when no noise layer is enabled.
    #[must_use]
    pub fn elevation_at(&self, point_on_unit_sphere: DVec3) -> f64 {
        self.stack.evaluate(point_on_unit_sphere)
    }

    /// Displace a unit-sphere point along its own direction and record the
    /// elevation in the shared accumulator.
    ///
    /// The returned point lies at `planet_radius * (1 + elevation)` from the
    /// center. A non-finite elevation (pathological noise parameters) is
    /// replaced by zero so a single bad vertex cannot corrupt the mesh; the
    /// rejection is counted on the accumulator and logged.
    pub fn displace(
        &self,
        point_on_unit_sphere: DVec3,
        range: &mut ElevationRange,
    ) -> DVec3 {
        let mut elevation = self.stack.evaluate(point_on_unit_sphere);
        if !elevation.is_finite() {
            warn!(
                point = ?point_on_unit_sphere,
                elevation,
                "non-finite elevation, substituting 0"
            );
            range.count_non_finite();
            elevation = 0.0;
        }
        range.add(elevation);
        point_on_unit_sphere * self.planet_radius * (1.0 + elevation)
    }

    /// The configured planet radius.
    #[must_use]
    pub fn planet_radius(&self) -> f64 {
        self.planet_radius
    }

    /// True when the generator produces a perfectly smooth sphere.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.stack.is_empty()
    }
}
