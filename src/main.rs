use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use log::error;

use sightline::configuration::Configuration;
use sightline::manager::manager::IManager;

const PROBE_VELOCITIES_KMH: [f64; 4] = [0.0, 30.0, 50.0, 100.0];
const PROBE_DISTANCES_M: [f64; 4] = [0.0, 50.0, 100.0, 250.0];

fn main() -> ExitCode {
    env_logger::init();

    let Some(config_path) = env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: sightline <config.json>");
        return ExitCode::FAILURE;
    };
    let config = Configuration::new();
    if let Err(err) = config.from_reader(&config_path) {
        error!("failed to load {}: {}", config_path.display(), err);
        return ExitCode::FAILURE;
    }

    let visual_angle_curve_manager = config.visual_angle_curve_manager();
    for name in visual_angle_curve_manager.names() {
        let Ok(curve) = visual_angle_curve_manager.get(&name) else { continue };
        println!("visual angle '{}': {}", name, curve);
        for velocity in PROBE_VELOCITIES_KMH {
            println!("  {:>6} km/h -> {:.2} deg", velocity, curve.angle_deg(velocity));
        }
    }

    let error_probability_curve_manager = config.error_probability_curve_manager();
    for name in error_probability_curve_manager.names() {
        let Ok(curve) = error_probability_curve_manager.get(&name) else { continue };
        println!("error probability '{}': {}", name, curve);
        for distance in PROBE_DISTANCES_M {
            println!("  {:>6} m -> {:.3}", distance, curve.error_probability(distance));
        }
    }
    ExitCode::SUCCESS
}
