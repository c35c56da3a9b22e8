//! The live body registry and fixed-step integrator.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::gravity::{GravitySample, compute_accelerations};
use crate::{BodySpec, NBodyError, OrbitalBody};

/// Global simulation constants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Gravitational constant `G`.
    pub gravitational_constant: f64,
    /// Fixed integration time step.
    pub time_step: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            gravitational_constant: 0.0001,
            time_step: 0.01,
        }
    }
}

impl SimulationParams {
    /// Reject non-positive or non-finite time steps eagerly.
    pub fn validate(&self) -> Result<(), NBodyError> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(NBodyError::InvalidTimeStep(self.time_step));
        }
        Ok(())
    }
}

impl GravitySample for OrbitalBody {
    fn position(&self) -> DVec3 {
        self.position
    }
    fn mass(&self) -> f64 {
        OrbitalBody::mass(self)
    }
    fn movable(&self) -> bool {
        self.movable
    }
    fn parent(&self) -> Option<usize> {
        self.parent
    }
}

/// The set of live celestial bodies and the fixed-step N-body integrator.
///
/// Each [`Universe::step`] is atomic: accelerations for *all* bodies are
/// computed from the pre-step position snapshot, then all velocities update,
/// then all positions — no body ever reads a half-updated neighbor within a
/// step. Bodies are created at assembly and never destroyed during a run.
pub struct Universe {
    bodies: Vec<OrbitalBody>,
    params: SimulationParams,
    steps_taken: u64,
    zero_distance_events: u64,
}

impl Universe {
    /// Assemble a universe from body specs, resolving parent names to
    /// registry indices.
    ///
    /// Fails eagerly on an invalid time step, duplicate body names, unknown
    /// parent references, or a body parented to itself.
    pub fn from_specs(specs: &[BodySpec], params: SimulationParams) -> Result<Self, NBodyError> {
        params.validate()?;

        for (i, spec) in specs.iter().enumerate() {
            if specs[..i].iter().any(|other| other.name == spec.name) {
                return Err(NBodyError::DuplicateName(spec.name.clone()));
            }
        }

        let mut bodies = Vec::with_capacity(specs.len());
        for spec in specs {
            let parent = match &spec.parent {
                None => None,
                Some(parent_name) => {
                    if *parent_name == spec.name {
                        return Err(NBodyError::SelfParent(spec.name.clone()));
                    }
                    let index = specs
                        .iter()
                        .position(|candidate| candidate.name == *parent_name)
                        .ok_or_else(|| NBodyError::UnknownParent {
                            body: spec.name.clone(),
                            parent: parent_name.clone(),
                        })?;
                    Some(index)
                }
            };
            bodies.push(OrbitalBody::from_spec(spec, parent, params.gravitational_constant));
        }

        info!(bodies = bodies.len(), "universe assembled");
        Ok(Self {
            bodies,
            params,
            steps_taken: 0,
            zero_distance_events: 0,
        })
    }

    /// Advance the simulation by one fixed step.
    pub fn step(&mut self) {
        let (accelerations, zero_pairs) =
            compute_accelerations(&self.bodies, self.params.gravitational_constant);
        self.zero_distance_events += u64::from(zero_pairs);

        let dt = self.params.time_step;
        for (body, acceleration) in self.bodies.iter_mut().zip(&accelerations) {
            if body.movable {
                body.velocity += *acceleration * dt;
            }
        }
        for body in &mut self.bodies {
            if body.movable {
                body.position += body.velocity * dt;
            }
        }
        self.steps_taken += 1;
    }

    /// Advance by `n` fixed steps.
    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// The live bodies, in registry order.
    #[must_use]
    pub fn bodies(&self) -> &[OrbitalBody] {
        &self.bodies
    }

    /// One body by registry index.
    pub fn body(&self, index: usize) -> Result<&OrbitalBody, NBodyError> {
        self.bodies.get(index).ok_or(NBodyError::BodyIndexOutOfRange {
            index,
            count: self.bodies.len(),
        })
    }

    /// Find a body's registry index by name.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }

    /// The simulation constants.
    #[must_use]
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Total fixed steps taken so far.
    #[must_use]
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// How many coincident-body force computations were skipped so far.
    #[must_use]
    pub fn zero_distance_events(&self) -> u64 {
        self.zero_distance_events
    }

    /// Total linear momentum of all bodies. Conserved (up to floating-point
    /// error) for an isolated system of movable bodies.
    #[must_use]
    pub fn total_momentum(&self) -> DVec3 {
        self.bodies.iter().map(OrbitalBody::momentum).sum()
    }
}
