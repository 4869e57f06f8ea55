//! Per-tick flight driver.
//!
//! Composes the whole frame in a fixed phase order: clamp dt, zero the
//! accumulator, gravity, move-intent correction, canopy deployment, the
//! aerodynamic force model, semi-implicit Euler integration, the numeric
//! validity check, the horizontal speed clamp, and finally collision
//! resolution. Nothing here reaches into ambient state: body and canopy
//! are passed in by the caller, and every abnormal condition comes back
//! out as plain data.

use glam::Vec3;

use crate::collision::{CollisionOutcome, CollisionWorld};
use crate::random::SeededRandom;

use super::canopy::{CanopyEvent, CanopyState};
use super::config::FlightConfig;
use super::forces::apply_aero_forces;
use super::state::{FlightCommand, FlightFlags, FlightState};

/// Everything one tick reports back to the surrounding system.
///
/// Transient per-tick data; the presentation layer consumes it and drops it.
#[derive(Debug, Clone, Copy)]
pub struct TickOutcome {
    /// Collision result, including landings and lethal impacts.
    pub collision: CollisionOutcome,

    /// Canopy open/close edge, if one fired this tick. Consumers that show
    /// or hide the chute react to this rather than polling the fraction.
    pub canopy_event: Option<CanopyEvent>,

    /// Steering response in [-1, 1] for the banking animation.
    pub steer_response: f32,

    /// Whether the numeric-safety reset fired this tick.
    pub safety_reset: bool,
}

impl TickOutcome {
    fn idle(position: Vec3) -> Self {
        Self {
            collision: CollisionOutcome::no_hit(position),
            canopy_event: None,
            steer_response: 0.0,
            safety_reset: false,
        }
    }
}

/// Drives the flight physics one tick at a time.
#[derive(Debug, Clone)]
pub struct FlightController {
    /// Tuning constants. Public so an external panel can rewrite fields
    /// between ticks; values are only read while a tick runs.
    pub config: FlightConfig,

    turbulence: SeededRandom,
}

impl FlightController {
    /// Default turbulence seed for sessions that don't care about replay.
    pub const DEFAULT_SEED: u32 = 0x5EED;

    /// Create a controller with the given configuration.
    pub fn new(config: FlightConfig) -> Self {
        Self::with_seed(config, Self::DEFAULT_SEED)
    }

    /// Create a controller with an explicit turbulence seed.
    ///
    /// Two controllers with equal seeds, configs, and inputs produce
    /// identical trajectories.
    pub fn with_seed(config: FlightConfig, seed: u32) -> Self {
        Self {
            config,
            turbulence: SeededRandom::new(seed),
        }
    }

    /// Advance the flight by one tick.
    ///
    /// Mutates `state` and `canopy` in place and reports the tick's events.
    /// While vehicle-attached, physics is bypassed entirely: acceleration
    /// and velocity are zeroed and the body stays wherever the vehicle
    /// collaborator pinned it.
    pub fn update(
        &mut self,
        state: &mut FlightState,
        canopy: &mut CanopyState,
        command: &FlightCommand,
        world: &CollisionWorld,
        delta_time: f32,
    ) -> TickOutcome {
        // Clamp against frame hitches; a stalled frame integrates at most
        // this much wall-clock time.
        let dt = delta_time.min(self.config.max_delta_time);

        if command.reset {
            self.full_reset(state, canopy);
        }

        if state.flags.in_vehicle() {
            state.acceleration = Vec3::ZERO;
            state.velocity = Vec3::ZERO;
            return TickOutcome::idle(state.position);
        }

        state.acceleration = Vec3::ZERO;
        state.acceleration.y -= self.config.gravity;

        // Horizontal move intent: steer toward the desired input velocity,
        // with the correction capped so it can't yank the body around.
        let desired = command.move_dir
            * self
                .config
                .desired_move_speed(canopy.is_open(), command.sprint);
        let horizontal_velocity = Vec3::new(state.velocity.x, 0.0, state.velocity.z);
        state.acceleration +=
            (desired - horizontal_velocity).clamp_length_max(self.config.move_accel_limit);

        if command.jump && state.flags.on_ground() && state.jump_count < self.config.max_jumps {
            state.velocity.y = self.config.jump_velocity;
            state.flags.set(FlightFlags::ON_GROUND, false);
            state.jump_count += 1;
        }

        // Manual canopy toggle only counts mid-air while descending.
        if command.toggle_canopy && !state.flags.on_ground() && state.velocity.y < -1.0 {
            canopy.toggle();
        }

        state.wind_timer += dt;
        let wind_field = self.config.wind_field();
        let wind = wind_field.sample(state.wind_timer);
        let air_density = wind_field.air_density(state.position.y);

        let canopy_event = canopy.step(&self.config, state.velocity.y, state.position.y, dt);

        let steer_response = apply_aero_forces(
            state,
            canopy,
            command,
            &wind,
            air_density,
            &self.config,
            &mut self.turbulence,
        );

        // Semi-implicit Euler: velocity first, then position with the new
        // velocity.
        state.velocity += state.acceleration * dt;
        state.position += state.velocity * dt;

        // Defensive floor, not normal physics: a non-finite body is put
        // back at the launch point rather than propagated.
        let mut safety_reset = false;
        if !state.is_numerically_valid() {
            log::warn!(
                "non-finite body state detected (pos {:?}, vel {:?}); resetting to launch",
                state.position,
                state.velocity
            );
            state.reset_kinematics();
            safety_reset = true;
        }

        let cap = self
            .config
            .max_horizontal_speed(canopy.is_open(), command.sprint);
        let horizontal_speed = state.horizontal_speed();
        if horizontal_speed > cap {
            let scale = cap / horizontal_speed;
            state.velocity.x *= scale;
            state.velocity.z *= scale;
        }

        let collision = world.resolve(state, self.config.lethal_impact_speed);
        if collision.grounded {
            state.jump_count = 0;
            // Landing force-closes the canopy.
            canopy.force_close();
        }
        // Keep the body above the plane no matter what the resolver did.
        if state.position.y < state.radius {
            state.position.y = state.radius;
        }

        TickOutcome {
            collision,
            canopy_event,
            steer_response,
            safety_reset,
        }
    }

    /// Explicit full reset: launch kinematics, stowed canopy, death flag
    /// cleared. Distinct from the numeric-safety reset, which restores
    /// kinematics only.
    fn full_reset(&self, state: &mut FlightState, canopy: &mut CanopyState) {
        state.reset_kinematics();
        state.jump_count = 0;
        state.flags.set(FlightFlags::ON_GROUND, false);
        state.flags.set(FlightFlags::DEAD, false);
        canopy.reset();
    }
}
