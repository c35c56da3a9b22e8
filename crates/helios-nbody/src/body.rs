//! Celestial body state and configuration input.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Configuration input for one body, as loaded from a scene/config file.
///
/// The parent is referenced by name here; it is resolved to an index when
/// the universe is assembled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodySpec {
    /// Unique body name; parent references resolve against it.
    pub name: String,
    /// Body radius in engine units.
    pub radius: f64,
    /// Gravitational acceleration at the body's surface. Together with the
    /// radius this determines the mass.
    pub surface_gravity: f64,
    /// Starting position.
    pub initial_position: DVec3,
    /// Starting velocity.
    pub initial_velocity: DVec3,
    /// Immovable bodies exert gravity but never move (anchor stars).
    pub movable: bool,
    /// Optional parent body name. A body with a parent feels gravity from
    /// that parent alone.
    pub parent: Option<String>,
}

impl Default for BodySpec {
    fn default() -> Self {
        Self {
            name: String::new(),
            radius: 1.0,
            surface_gravity: 1.0,
            initial_position: DVec3::ZERO,
            initial_velocity: DVec3::ZERO,
            movable: true,
            parent: None,
        }
    }
}

/// Live simulation state of one celestial body.
///
/// The mass is derived — `surface_gravity * radius² / G` — and kept in sync
/// by the setters; it can never be assigned independently.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitalBody {
    /// Body name, unique within the universe.
    pub name: String,
    /// Current position, updated every fixed step.
    pub position: DVec3,
    /// Current velocity, updated every fixed step.
    pub velocity: DVec3,
    /// Whether the integrator may move this body.
    pub movable: bool,
    /// Registry index of the parent body, if any. A relation, not an owning
    /// reference: bodies are looked up by index in the universe's registry.
    pub parent: Option<usize>,
    radius: f64,
    surface_gravity: f64,
    mass: f64,
}

impl OrbitalBody {
    /// Build a live body from its spec with the parent already resolved.
    pub(crate) fn from_spec(
        spec: &BodySpec,
        parent: Option<usize>,
        gravitational_constant: f64,
    ) -> Self {
        let mut body = Self {
            name: spec.name.clone(),
            position: spec.initial_position,
            velocity: spec.initial_velocity,
            movable: spec.movable,
            parent,
            radius: spec.radius,
            surface_gravity: spec.surface_gravity,
            mass: 0.0,
        };
        body.recalculate_mass(gravitational_constant);
        body
    }

    /// The derived mass.
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// The body radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Surface gravitational acceleration.
    #[must_use]
    pub fn surface_gravity(&self) -> f64 {
        self.surface_gravity
    }

    /// Change the radius, recomputing the mass.
    pub fn set_radius(&mut self, radius: f64, gravitational_constant: f64) {
        self.radius = radius;
        self.recalculate_mass(gravitational_constant);
    }

    /// Change the surface gravity, recomputing the mass.
    pub fn set_surface_gravity(&mut self, surface_gravity: f64, gravitational_constant: f64) {
        self.surface_gravity = surface_gravity;
        self.recalculate_mass(gravitational_constant);
    }

    fn recalculate_mass(&mut self, gravitational_constant: f64) {
        self.mass = self.surface_gravity * self.radius * self.radius / gravitational_constant;
    }

    /// Linear momentum `mass * velocity`.
    #[must_use]
    pub fn momentum(&self) -> DVec3 {
        self.velocity * self.mass
    }
}
