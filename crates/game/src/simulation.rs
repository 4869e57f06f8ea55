//! Game simulation - the per-frame driver.
//!
//! Wires input, the flight controller, the level, and the vehicle
//! attachment together, and derives the read-only telemetry the HUD and
//! renderer consume. The simulation owns all mutable state; collaborators
//! only ever see plain data.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use skyfall_physics::{
    FlightConfig, FlightController, FlightFlags, TickOutcome, WindSample,
};

use crate::input::PlayerInput;
use crate::level::Level;
use crate::player::Diver;

/// Game simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Flight physics configuration.
    pub flight: FlightConfig,

    /// Seed for the turbulence generator. Equal seeds and inputs replay
    /// identical jumps.
    pub turbulence_seed: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            flight: FlightConfig::default(),
            turbulence_seed: FlightController::DEFAULT_SEED,
        }
    }
}

/// Derived read-only scalars for the HUD and renderer.
///
/// Computed fresh from the current state on request; never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Telemetry {
    /// Total speed (m/s).
    pub speed: f32,

    /// Speed in the horizontal plane (m/s).
    pub horizontal_speed: f32,

    /// Magnitude of vertical speed (m/s).
    pub vertical_speed: f32,

    /// Height above the ground plane (meters).
    pub altitude: f32,

    /// Horizontal over vertical speed; `None` while effectively hovering
    /// or drifting too slowly for the ratio to mean anything.
    pub glide_ratio: Option<f32>,

    /// Air density at the current altitude (kg/m³).
    pub air_density: f32,

    /// Weight force (N).
    pub weight_force: f32,

    /// Drag force at the current speed (N).
    pub drag_force: f32,

    /// Weight minus drag (N). Positive while still accelerating downward.
    pub net_force: f32,

    /// Terminal velocity estimate for the current configuration (m/s).
    pub terminal_velocity: f32,

    /// Latest wind reading.
    pub wind: WindSample,

    /// Canopy openness in [0, 1].
    pub deploy_fraction: f32,

    /// Whether the canopy is past the open threshold.
    pub canopy_open: bool,

    /// Whether the body is vertically supported this frame.
    pub grounded: bool,

    /// Whether the diver died on impact.
    pub dead: bool,
}

/// The main game simulation.
#[derive(Debug)]
pub struct Simulation {
    /// Current frame number.
    pub frame: u64,

    /// Current level.
    pub level: Level,

    /// The simulated diver.
    pub diver: Diver,

    controller: FlightController,
    vehicle_transform: Option<Vec3>,
}

impl Simulation {
    /// Create a new simulation over the given level.
    pub fn new(config: SimulationConfig, level: Level) -> Self {
        let radius = config.flight.player_radius;
        let diver = Diver::new(1, "diver".to_string(), level.launch.position, radius);
        let controller = FlightController::with_seed(config.flight, config.turbulence_seed);

        Self {
            frame: 0,
            level,
            diver,
            controller,
            vehicle_transform: None,
        }
    }

    /// Create a simulation with default configuration over an open field.
    pub fn open_field() -> Self {
        let config = SimulationConfig::default();
        let level = Level::empty(config.flight.launch_altitude, config.flight.player_radius);
        Self::new(config, level)
    }

    /// Live tuning surface: the flight constants, rewritable between ticks.
    pub fn config_mut(&mut self) -> &mut FlightConfig {
        &mut self.controller.config
    }

    /// Pin the diver to a vehicle at the given transform. Physics is
    /// bypassed until [`Simulation::detach_from_vehicle`].
    pub fn attach_to_vehicle(&mut self, transform: Vec3) {
        self.diver.flight.flags.set(FlightFlags::IN_VEHICLE, true);
        self.diver.flight.position = transform;
        self.diver.flight.velocity = Vec3::ZERO;
        self.diver.flight.acceleration = Vec3::ZERO;
        self.vehicle_transform = Some(transform);
    }

    /// Move the vehicle; the attached diver rides along.
    pub fn set_vehicle_transform(&mut self, transform: Vec3) {
        if self.diver.flight.flags.in_vehicle() {
            self.diver.flight.position = transform;
        }
        self.vehicle_transform = Some(transform);
    }

    /// Release the diver into free fall at the vehicle's transform.
    pub fn detach_from_vehicle(&mut self) {
        self.diver.flight.flags.set(FlightFlags::IN_VEHICLE, false);
    }

    /// Advance the simulation by one frame of duration `dt` seconds.
    pub fn tick(&mut self, input: &PlayerInput, dt: f32) -> TickOutcome {
        self.frame += 1;

        let was_alive = self.diver.is_alive();
        let was_grounded = self.diver.on_ground();

        let command = input.to_command();
        let outcome = self.controller.update(
            &mut self.diver.flight,
            &mut self.diver.canopy,
            &command,
            &self.level.collision,
            dt,
        );

        if was_alive && outcome.collision.lethal {
            self.diver.deaths += 1;
        }
        if !was_grounded && outcome.collision.grounded && self.diver.is_alive() {
            self.diver.landings += 1;
        }

        outcome
    }

    /// Derive the current telemetry for HUD/renderer consumers.
    ///
    /// Uses the binary open/closed aerodynamic profile, matching what the
    /// display reports rather than the mid-deploy blend.
    pub fn telemetry(&self) -> Telemetry {
        let config = &self.controller.config;
        let flight = &self.diver.flight;
        let wind_field = config.wind_field();

        let speed = flight.speed();
        let horizontal_speed = flight.horizontal_speed();
        let vertical_speed = flight.velocity.y.abs();

        let air_density = wind_field.air_density(flight.position.y);
        let (cd, area) = if self.diver.canopy.is_open() {
            (config.canopy_drag_cd, config.canopy_area)
        } else {
            (config.body_drag_cd, config.body_area)
        };

        let weight_force = config.mass * config.gravity;
        let drag_force = 0.5 * air_density * cd * area * speed * speed;
        let terminal_velocity = (2.0 * weight_force / (air_density * cd * area)).sqrt();

        let glide_ratio = (horizontal_speed > 0.1 && vertical_speed > 0.0)
            .then(|| horizontal_speed / vertical_speed);

        Telemetry {
            speed,
            horizontal_speed,
            vertical_speed,
            altitude: flight.position.y,
            glide_ratio,
            air_density,
            weight_force,
            drag_force,
            net_force: weight_force - drag_force,
            terminal_velocity,
            wind: wind_field.sample(flight.wind_timer),
            deploy_fraction: self.diver.canopy.deploy,
            canopy_open: self.diver.canopy.is_open(),
            grounded: flight.flags.on_ground(),
            dead: flight.flags.dead(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_tick_advances_frame() {
        let mut sim = Simulation::open_field();
        sim.tick(&PlayerInput::default(), DT);
        sim.tick(&PlayerInput::default(), DT);
        assert_eq!(sim.frame, 2);
    }

    #[test]
    fn test_vehicle_ride_then_release() {
        let mut sim = Simulation::open_field();
        let seat = Vec3::new(10.0, 800.0, -5.0);
        sim.attach_to_vehicle(seat);
        sim.tick(&PlayerInput::default(), DT);
        assert_eq!(sim.diver.position(), seat);
        assert_eq!(sim.diver.velocity(), Vec3::ZERO);

        let moved = seat + Vec3::new(5.0, 0.0, 0.0);
        sim.set_vehicle_transform(moved);
        sim.tick(&PlayerInput::default(), DT);
        assert_eq!(sim.diver.position(), moved);

        sim.detach_from_vehicle();
        sim.tick(&PlayerInput::default(), DT);
        assert!(sim.diver.velocity().y < 0.0);
    }

    #[test]
    fn test_terminal_velocity_estimate() {
        let sim = Simulation::open_field();
        let t = sim.telemetry();
        // Closed canopy at altitude ~1000 m.
        let config = FlightConfig::default();
        let rho = config.wind_field().air_density(sim.diver.position().y);
        let expected = (2.0 * 80.0 * 9.81 / (rho * 0.9 * 0.7)).sqrt();
        assert!((t.terminal_velocity - expected).abs() < 1e-3);
        assert!(!t.canopy_open);
        assert!(t.glide_ratio.is_none());
    }

    #[test]
    fn test_auto_open_jump_lands_safely() {
        let mut config = SimulationConfig::default();
        config.flight = FlightConfig::calm();
        let level = Level::empty(config.flight.launch_altitude, config.flight.player_radius);
        let mut sim = Simulation::new(config, level);

        let mut opened = false;
        let mut landed = false;
        for _ in 0..(120 * 60) {
            let outcome = sim.tick(&PlayerInput::default(), DT);
            if outcome.canopy_event.is_some() {
                opened = true;
            }
            if outcome.collision.grounded {
                landed = true;
                break;
            }
        }
        assert!(opened, "auto-open never fired");
        assert!(landed, "diver never reached the ground");
        assert!(sim.diver.is_alive(), "landing under canopy must be survivable");
        assert_eq!(sim.diver.landings, 1);
    }

    #[test]
    fn test_free_fall_without_auto_open_is_lethal() {
        let mut config = SimulationConfig::default();
        config.flight = FlightConfig::calm();
        config.flight.auto_open = false;
        let level = Level::empty(300.0, config.flight.player_radius);
        let mut sim = Simulation::new(config, level);

        for _ in 0..(60 * 60) {
            sim.tick(&PlayerInput::default(), DT);
            if sim.diver.on_ground() {
                break;
            }
        }
        assert!(!sim.diver.is_alive());
        assert_eq!(sim.diver.deaths, 1);
    }

    #[test]
    fn test_telemetry_reports_descent() {
        let mut sim = Simulation::open_field();
        for _ in 0..120 {
            sim.tick(&PlayerInput::default(), DT);
        }
        let t = sim.telemetry();
        assert!(t.vertical_speed > 5.0);
        assert!(t.altitude < 1003.0);
        assert!(!t.grounded);
        assert!(!t.dead);
        assert!(t.net_force < t.weight_force);
    }
}
