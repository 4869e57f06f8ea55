//! Aerodynamic force model.
//!
//! Everything here is force divided by mass, i.e. an acceleration added to
//! the body's per-tick accumulator. Drag, lift, glide, and steering all act
//! on the velocity *relative to the wind* — wind never translates the body
//! rigidly, it only shifts the airflow the body sees.

use glam::Vec3;

use crate::random::SeededRandom;

use super::canopy::CanopyState;
use super::config::FlightConfig;
use super::state::{FlightCommand, FlightState};
use super::wind::WindSample;

/// Relative speeds below this skip all speed-dependent terms, so the
/// normalize below never divides by zero.
const MIN_AERO_SPEED: f32 = 1e-4;

/// Relative speed at which steering reaches full effectiveness (m/s).
const STEER_REFERENCE_SPEED: f32 = 8.0;

/// Accumulate aerodynamic accelerations into `state.acceleration`.
///
/// Returns the steering response in [-1, 1], a presentation hint for the
/// banking animation: sign is the steer direction, magnitude is deploy
/// fraction times steering effectiveness.
pub fn apply_aero_forces(
    state: &mut FlightState,
    canopy: &CanopyState,
    command: &FlightCommand,
    wind: &WindSample,
    air_density: f32,
    config: &FlightConfig,
    turbulence: &mut SeededRandom,
) -> f32 {
    let mut steer_response = 0.0;

    let relative_velocity = state.velocity - wind.velocity;
    let speed = relative_velocity.length();

    if speed > MIN_AERO_SPEED {
        // Blend frontal area and drag coefficient between body and canopy
        // by how far the canopy has deployed.
        let deploy = canopy.deploy;
        let area_eff = config.body_area + (config.canopy_area - config.body_area) * deploy;
        let cd_eff = config.body_drag_cd + (config.canopy_drag_cd - config.body_drag_cd) * deploy;

        // Coherent ±5% wobble so drag is never perfectly flat under a
        // steady canopy. Deterministic, not noise.
        let cd_wobble = cd_eff * (1.0 + (wind.time * 2.0).sin() * 0.05);

        let drag_mag = 0.5 * air_density * cd_wobble * area_eff * speed * speed / config.mass;
        state.acceleration += -relative_velocity.normalize() * drag_mag;

        if canopy.is_open() {
            let sink = (-relative_velocity.y).max(0.0);
            let angle_of_attack = relative_velocity.y.abs() / speed;

            // Lift: proportional to sink rate, degraded at steep angles.
            let lift_efficiency = 1.0 - angle_of_attack * 0.3;
            state.acceleration.y += config.lift_gain * sink * deploy * lift_efficiency;

            // Glide: forward push against the horizontal airflow. Efficiency
            // floors at 0.3 so steep dives still carry some drive.
            let horizontal = Vec3::new(relative_velocity.x, 0.0, relative_velocity.z);
            if horizontal.length_squared() > 1e-6 {
                let forward = -horizontal.normalize();
                let glide_efficiency = (1.0 - angle_of_attack).max(0.3);
                state.acceleration +=
                    forward * (config.glide_gain * sink * deploy * glide_efficiency);
            }

            if command.steer != 0.0 {
                // Lateral axis perpendicular to travel; fall back to the
                // camera axis when nearly stationary.
                let mut heading = Vec3::new(state.velocity.x, 0.0, state.velocity.z);
                if heading.length_squared() < 1e-4 {
                    heading = Vec3::new(command.camera_forward.x, 0.0, command.camera_forward.z);
                }
                if heading.length_squared() > 0.0 {
                    let heading = heading.normalize();
                    let right = Vec3::Y.cross(heading).normalize();
                    let effectiveness = (speed / STEER_REFERENCE_SPEED).min(1.0);
                    state.acceleration += right
                        * (command.steer * config.steer_force / config.mass)
                        * deploy
                        * effectiveness;
                    steer_response = command.steer * deploy * effectiveness;
                }
            }

            if command.dive {
                state.acceleration.y -= config.dive_gain * deploy;
            }
            if command.flare {
                state.acceleration.y += config.flare_gain * deploy;
            }
        }
    }

    // Light buffeting: a small push from the wind itself, applied even with
    // the canopy closed, plus seeded turbulence that grows with deployment
    // and speed.
    state.acceleration += wind.velocity * (0.08 / config.mass);
    let jitter_scale = canopy.deploy * state.velocity.length() * 0.005;
    let jitter = Vec3::new(
        turbulence.next_centered() * 0.3,
        turbulence.next_centered() * 0.2,
        turbulence.next_centered() * 0.3,
    ) * jitter_scale;
    state.acceleration += jitter;

    steer_response
}
