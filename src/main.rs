//! Skyfall - Headless Demo Jump
//!
//! Drives one scripted jump over the city: ride the drop aircraft for a
//! second, release, free-fall until the canopy auto-opens, then steer
//! gently until touchdown. Telemetry is logged once per simulated second.
//!
//! Run with `RUST_LOG=info` to see the flight log.

use glam::Vec3;
use log::info;
use skyfall_game::{Level, PlayerInput, Simulation, SimulationConfig};

const DT: f32 = 1.0 / 60.0;
const MAX_SIM_SECONDS: u32 = 180;

fn main() {
    env_logger::init();

    let config = SimulationConfig::default();
    let level = Level::city(42, config.flight.launch_altitude, config.flight.player_radius);
    let launch = level.launch.position;
    let mut simulation = Simulation::new(config, level);

    // Ride the drop aircraft for one second before release.
    simulation.attach_to_vehicle(launch);
    let mut aircraft = launch;
    for _ in 0..60 {
        aircraft += Vec3::new(20.0 * DT, 0.0, 0.0);
        simulation.set_vehicle_transform(aircraft);
        simulation.tick(&PlayerInput::default(), DT);
    }
    simulation.detach_from_vehicle();
    info!("released at {:?}", simulation.diver.position());

    let mut input = PlayerInput::default();
    input.flare = true;

    for frame in 0..(MAX_SIM_SECONDS * 60) {
        let outcome = simulation.tick(&input, DT);

        if let Some(event) = outcome.canopy_event {
            info!("t={:.1}s canopy {:?}", frame as f32 * DT, event);
        }

        if frame % 60 == 0 {
            let t = simulation.telemetry();
            info!(
                "t={:>5.1}s alt={:>7.1}m v={:>5.1}m/s vspeed={:>5.1}m/s glide={} deploy={:.2}",
                frame as f32 * DT,
                t.altitude,
                t.speed,
                t.vertical_speed,
                t.glide_ratio
                    .map(|g| format!("{g:.2}"))
                    .unwrap_or_else(|| "-".to_string()),
                t.deploy_fraction,
            );
        }

        if outcome.collision.grounded {
            let t = simulation.telemetry();
            if t.dead {
                info!("fatal impact after {:.1}s", frame as f32 * DT);
            } else {
                info!(
                    "touchdown after {:.1}s at {:?}",
                    frame as f32 * DT,
                    simulation.diver.position()
                );
            }
            return;
        }
    }

    info!("demo timed out before touchdown");
}
