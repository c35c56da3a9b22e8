//! Demo binary: generate a planet, run the orbital simulation, and preview
//! orbits, all from a RON config with CLI overrides.
//!
//! Run with `cargo run -p helios-demo` for the default system.
//! Run with `cargo run -p helios-demo -- --resolution 128 --export planet.obj`
//! to export the generated mesh.

mod obj_export;

use std::f64::consts::TAU;

use clap::Parser;
use glam::DVec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use helios_config::{CliArgs, Config};
use helios_log::init_logging;
use helios_nbody::{BodySpec, OrbitPredictor, PredictionParams, Universe};
use helios_planet::PlanetBuilder;
use helios_terrain::BiomeSampler;

use crate::obj_export::export_obj;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        let mut source = std::error::Error::source(err.as_ref());
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    init_logging(Some(config.debug.log_level.as_str()));
    config.validate()?;

    // --- Planet generation ---------------------------------------------

    let biome = BiomeSampler::new(config.biome.clone())?;
    let mut builder = PlanetBuilder::new(
        config.planet.resolution,
        config.planet.radius,
        config.planet.noise_layers.clone(),
    )
    .with_biome(biome);

    let report = builder.rebuild()?;
    info!(
        elevation_min = report.elevation.min(),
        elevation_max = report.elevation.max(),
        vertices = report.vertex_count,
        triangles = report.triangle_count,
        "planet generated"
    );
    if report.elevation.non_finite_count() > 0 {
        info!(
            rejected = report.elevation.non_finite_count(),
            "some vertices used the fallback elevation"
        );
    }

    if let Some(path) = &args.export {
        let faces: Vec<_> = builder.built_faces().collect();
        export_obj(path, &faces)?;
        info!(path = %path.display(), "exported planet mesh");
    }

    // --- Orbital simulation --------------------------------------------

    let mut specs = config.bodies.clone();
    if args.asteroids > 0 {
        specs.extend(scatter_asteroids(&specs, args.asteroids, args.seed));
        info!(count = args.asteroids, seed = args.seed, "scattered asteroid belt");
    }

    let mut universe = Universe::from_specs(&specs, config.simulation)?;
    let momentum_before = universe.total_momentum();

    universe.step_n(args.steps);

    let momentum_after = universe.total_momentum();
    info!(
        steps = args.steps,
        momentum_drift = (momentum_after - momentum_before).length(),
        zero_distance_events = universe.zero_distance_events(),
        "simulation complete"
    );
    for body in universe.bodies() {
        info!(
            name = %body.name,
            position = ?body.position,
            speed = body.velocity.length(),
            "body state"
        );
    }

    // --- Orbit preview -------------------------------------------------

    let reference_body = match &args.relative_to {
        Some(name) => Some(
            universe
                .index_of(name)
                .ok_or_else(|| format!("no body named \"{name}\" for --relative-to"))?,
        ),
        None => None,
    };

    let prediction = PredictionParams {
        steps: args.preview_steps,
        time_step: config.simulation.time_step,
        skip_steps: 0,
        reference_body,
    };
    let paths = OrbitPredictor::predict(&universe, &prediction)?;
    for (body, path) in universe.bodies().iter().zip(&paths) {
        let end = path.last().copied().unwrap_or(body.position);
        info!(
            name = %body.name,
            points = path.len(),
            end = ?end,
            "orbit preview"
        );
    }

    Ok(())
}

/// Deterministically scatter small parentless bodies in a ring around the
/// heaviest parentless body.
fn scatter_asteroids(specs: &[BodySpec], count: u32, seed: u64) -> Vec<BodySpec> {
    let center = specs
        .iter()
        .filter(|s| s.parent.is_none())
        .max_by(|a, b| {
            let mass_a = a.surface_gravity * a.radius * a.radius;
            let mass_b = b.surface_gravity * b.radius * b.radius;
            mass_a.total_cmp(&mass_b)
        });
    let (center_position, center_mu) = match center {
        Some(body) => (
            body.initial_position,
            // G * M = surface_gravity * radius², independent of G.
            body.surface_gravity * body.radius * body.radius,
        ),
        None => (DVec3::ZERO, 1.0),
    };

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let angle = rng.random_range(0.0..TAU);
            let distance = rng.random_range(150.0..250.0);
            let height = rng.random_range(-5.0..5.0);
            let offset = DVec3::new(angle.cos() * distance, height, angle.sin() * distance);

            // Circular orbit speed, tangent to the ring.
            let speed = (center_mu / distance).sqrt();
            let tangent = DVec3::new(-angle.sin(), 0.0, angle.cos());

            BodySpec {
                name: format!("asteroid-{i}"),
                radius: 0.05,
                surface_gravity: 0.01,
                initial_position: center_position + offset,
                initial_velocity: tangent * speed,
                movable: true,
                parent: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asteroid_scatter_is_deterministic() {
        let config = Config::default();
        let a = scatter_asteroids(&config.bodies, 10, 7);
        let b = scatter_asteroids(&config.bodies, 10, 7);
        assert_eq!(a, b, "same seed must scatter the same belt");

        let c = scatter_asteroids(&config.bodies, 10, 8);
        assert_ne!(a, c, "different seeds must scatter different belts");
    }

    #[test]
    fn test_asteroids_have_unique_names_and_no_parent() {
        let config = Config::default();
        let belt = scatter_asteroids(&config.bodies, 25, 1);
        for (i, asteroid) in belt.iter().enumerate() {
            assert_eq!(asteroid.name, format!("asteroid-{i}"));
            assert!(asteroid.parent.is_none());
            assert!(asteroid.movable);
        }
    }

    #[test]
    fn test_scattered_system_assembles() {
        let config = Config::default();
        let mut specs = config.bodies.clone();
        specs.extend(scatter_asteroids(&specs, 5, 3));
        let universe = Universe::from_specs(&specs, config.simulation).expect("assembles");
        assert_eq!(universe.bodies().len(), 8);
    }
}
