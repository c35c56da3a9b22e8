//! Orbital mechanics: celestial bodies, fixed-step N-body gravity
//! integration, and a non-mutating orbit path predictor.
//!
//! The integrator advances all bodies through one atomic fixed step:
//! accelerations are computed from a pre-step position snapshot for every
//! body before any velocity or position changes, so force pairs stay
//! symmetric regardless of body order.

mod body;
mod error;
mod gravity;
mod predictor;
mod universe;

pub use body::{BodySpec, OrbitalBody};
pub use error::NBodyError;
pub use predictor::{OrbitPredictor, PredictionParams};
pub use universe::{SimulationParams, Universe};
