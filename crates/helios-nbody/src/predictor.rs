//! Orbit path prediction over a detached copy of the body set.

use glam::DVec3;

use crate::gravity::{GravitySample, compute_accelerations};
use crate::{NBodyError, Universe};

/// Parameters for one prediction run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PredictionParams {
    /// Number of recorded steps.
    pub steps: u32,
    /// Time step for the prediction, independent of the live simulation's.
    pub time_step: f64,
    /// Warm-up steps run before recording starts, to offset the preview
    /// window into the future.
    pub skip_steps: u32,
    /// Optional registry index of a reference body. When set, recorded
    /// points are re-expressed with the reference body's net drift removed,
    /// yielding a reference-frame-stable trajectory preview.
    pub reference_body: Option<usize>,
}

impl Default for PredictionParams {
    fn default() -> Self {
        Self {
            steps: 1000,
            time_step: 0.01,
            skip_steps: 0,
            reference_body: None,
        }
    }
}

/// Detached clone of one body, advanced by the predictor and discarded
/// after the run. Carries no link back to the live body.
struct VirtualBody {
    position: DVec3,
    velocity: DVec3,
    mass: f64,
    movable: bool,
    parent: Option<usize>,
}

impl GravitySample for VirtualBody {
    fn position(&self) -> DVec3 {
        self.position
    }
    fn mass(&self) -> f64 {
        self.mass
    }
    fn movable(&self) -> bool {
        self.movable
    }
    fn parent(&self) -> Option<usize> {
        self.parent
    }
}

/// Produces per-body path previews by simulating forward in time without
/// touching live state.
pub struct OrbitPredictor;

impl OrbitPredictor {
    /// Predict future positions for every body in the universe.
    ///
    /// Returns one position sequence per body, in registry order, each
    /// `params.steps` long. The sequences are regenerated in full on every
    /// call; live bodies are never mutated.
    pub fn predict(
        universe: &Universe,
        params: &PredictionParams,
    ) -> Result<Vec<Vec<DVec3>>, NBodyError> {
        if !(params.time_step.is_finite() && params.time_step > 0.0) {
            return Err(NBodyError::InvalidTimeStep(params.time_step));
        }
        let body_count = universe.bodies().len();
        if let Some(reference) = params.reference_body
            && reference >= body_count
        {
            return Err(NBodyError::BodyIndexOutOfRange {
                index: reference,
                count: body_count,
            });
        }

        let mut virtual_bodies: Vec<VirtualBody> = universe
            .bodies()
            .iter()
            .map(|body| VirtualBody {
                position: body.position,
                velocity: body.velocity,
                mass: body.mass(),
                movable: body.movable,
                parent: body.parent,
            })
            .collect();

        let gravitational_constant = universe.params().gravitational_constant;
        let reference_initial = params.reference_body.map(|i| virtual_bodies[i].position);

        for _ in 0..params.skip_steps {
            step_virtual(&mut virtual_bodies, gravitational_constant, params.time_step);
        }

        let mut paths: Vec<Vec<DVec3>> = (0..body_count)
            .map(|_| Vec::with_capacity(params.steps as usize))
            .collect();

        for _ in 0..params.steps {
            step_virtual(&mut virtual_bodies, gravitational_constant, params.time_step);

            for (i, vbody) in virtual_bodies.iter().enumerate() {
                let mut point = vbody.position;
                if let (Some(reference), Some(initial)) = (params.reference_body, reference_initial)
                {
                    if i == reference {
                        // The reference body plots as a fixed point.
                        point = initial;
                    } else {
                        // Remove the reference body's net drift from its own
                        // starting position.
                        point -= virtual_bodies[reference].position - initial;
                    }
                }
                paths[i].push(point);
            }
        }

        Ok(paths)
    }
}

/// One fixed step over the virtual bodies, with the same snapshot semantics
/// as the live integrator.
fn step_virtual(bodies: &mut [VirtualBody], gravitational_constant: f64, dt: f64) {
    let (accelerations, _) = compute_accelerations(bodies, gravitational_constant);
    for (body, acceleration) in bodies.iter_mut().zip(&accelerations) {
        if body.movable {
            body.velocity += *acceleration * dt;
        }
    }
    for body in bodies.iter_mut() {
        if body.movable {
            body.position += body.velocity * dt;
        }
    }
}
