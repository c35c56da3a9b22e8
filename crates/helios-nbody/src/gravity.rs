//! Shared gravitational acceleration pass.
//!
//! Both the live integrator and the orbit predictor step through the same
//! acceleration computation, so the snapshot semantics (all accelerations
//! from pre-step positions) and the interaction topology live in exactly one
//! place.

use glam::DVec3;
use tracing::warn;

/// The minimal body view the acceleration pass needs. Implemented by live
/// bodies and by the predictor's virtual clones.
pub(crate) trait GravitySample {
    fn position(&self) -> DVec3;
    fn mass(&self) -> f64;
    fn movable(&self) -> bool;
    fn parent(&self) -> Option<usize>;
}

/// Compute per-body accelerations from a position snapshot.
///
/// Interaction topology: a body with a parent feels that parent's gravity
/// alone; a parentless body feels every *other parentless* body. Moons stay
/// out of the root pairwise sum — local hierarchical systems are an
/// intentional approximation, not a candidate for "fixing" to full N².
///
/// Immovable bodies get zero acceleration (they exert gravity but never
/// respond to it). Coincident body pairs (`r² == 0`) have no defined force
/// direction; they contribute nothing and are counted for the caller.
pub(crate) fn compute_accelerations<B: GravitySample>(
    bodies: &[B],
    gravitational_constant: f64,
) -> (Vec<DVec3>, u32) {
    let mut zero_distance_pairs = 0u32;
    let accelerations = (0..bodies.len())
        .map(|i| {
            if !bodies[i].movable() {
                return DVec3::ZERO;
            }
            match bodies[i].parent() {
                Some(parent) => acceleration_from(
                    &bodies[i],
                    &bodies[parent],
                    gravitational_constant,
                    &mut zero_distance_pairs,
                ),
                None => {
                    let mut total = DVec3::ZERO;
                    for (j, other) in bodies.iter().enumerate() {
                        if j == i || other.parent().is_some() {
                            continue;
                        }
                        total += acceleration_from(
                            &bodies[i],
                            other,
                            gravitational_constant,
                            &mut zero_distance_pairs,
                        );
                    }
                    total
                }
            }
        })
        .collect();

    if zero_distance_pairs > 0 {
        warn!(
            pairs = zero_distance_pairs,
            "coincident bodies contributed zero force this step"
        );
    }
    (accelerations, zero_distance_pairs)
}

/// Acceleration of `body` toward `attractor`: `G * m_attractor / r²` along
/// the separation direction.
fn acceleration_from<B: GravitySample>(
    body: &B,
    attractor: &B,
    gravitational_constant: f64,
    zero_distance_pairs: &mut u32,
) -> DVec3 {
    let delta = attractor.position() - body.position();
    let sqr_distance = delta.length_squared();
    if sqr_distance == 0.0 {
        *zero_distance_pairs += 1;
        return DVec3::ZERO;
    }
    let direction = delta / sqr_distance.sqrt();
    direction * gravitational_constant * attractor.mass() / sqr_distance
}
