//! Flight configuration constants.
//!
//! All tuning parameters are grouped here. The struct is plain data so an
//! external tuning panel can rewrite fields between ticks without restarting
//! the simulation.

use serde::{Deserialize, Serialize};

use super::wind::{WindField, WindMode};

/// Configuration for the parachute flight physics.
///
/// All values use metric units (meters, seconds, kilograms) unless noted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightConfig {
    // ========================================================================
    // Body
    // ========================================================================
    /// Diver mass including gear (kg).
    pub mass: f32,

    /// Gravity magnitude (m/s²), applied along -Y.
    pub gravity: f32,

    /// Collision sphere radius (meters).
    pub player_radius: f32,

    // ========================================================================
    // Aerodynamics
    // ========================================================================
    /// Drag coefficient of the body in free fall.
    pub body_drag_cd: f32,

    /// Frontal area of the body in free fall (m²).
    pub body_area: f32,

    /// Drag coefficient of the fully open canopy.
    pub canopy_drag_cd: f32,

    /// Reference area of the fully open canopy (m²).
    pub canopy_area: f32,

    /// Lift force per (m/s of sink × deploy fraction) (N).
    pub lift_gain: f32,

    /// Forward glide force per (m/s of sink × deploy fraction) (N).
    pub glide_gain: f32,

    /// Lateral steering force at full effectiveness (N).
    pub steer_force: f32,

    /// Extra downward acceleration while the dive control is held (m/s²).
    pub dive_gain: f32,

    /// Extra upward acceleration while the flare control is held (m/s²).
    pub flare_gain: f32,

    // ========================================================================
    // Canopy Deployment
    // ========================================================================
    /// Deploy fraction gained per second while opening.
    pub open_rate: f32,

    /// Deploy fraction lost per second while closing.
    pub close_rate: f32,

    /// Whether the canopy opens automatically at low altitude.
    pub auto_open: bool,

    /// Altitude below which auto-open fires (meters).
    pub auto_open_altitude: f32,

    // ========================================================================
    // Atmosphere and Wind
    // ========================================================================
    /// Air density at sea level (kg/m³).
    pub sea_level_density: f32,

    /// Exponential atmosphere scale height (meters).
    pub scale_height: f32,

    /// Wind generation mode.
    pub wind_mode: WindMode,

    /// Steady-mode wind, X component (m/s).
    pub steady_wind_x: f32,

    /// Steady-mode wind, Z component (m/s).
    pub steady_wind_z: f32,

    // ========================================================================
    // Movement
    // ========================================================================
    /// Walking move speed with the canopy closed (m/s).
    pub walk_speed_closed: f32,

    /// Sprinting move speed with the canopy closed (m/s).
    pub sprint_speed_closed: f32,

    /// Walking move speed with the canopy open (m/s).
    pub walk_speed_open: f32,

    /// Sprinting move speed with the canopy open (m/s).
    pub sprint_speed_open: f32,

    /// Move-input responsiveness multiplier while the canopy is open.
    pub open_responsiveness: f32,

    /// Cap on the horizontal correction toward the desired move velocity (m/s²).
    pub move_accel_limit: f32,

    /// Upward velocity applied on a jump from the ground (m/s).
    pub jump_velocity: f32,

    /// Jumps allowed between landings.
    pub max_jumps: u32,

    // ========================================================================
    // Safety
    // ========================================================================
    /// Vertical speed above which a ground impact is fatal (m/s).
    pub lethal_impact_speed: f32,

    /// Largest time step one tick will integrate (seconds). Frame hitches
    /// beyond this are truncated rather than integrated.
    pub max_delta_time: f32,

    /// Altitude of the launch point above the ground (meters).
    pub launch_altitude: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            // Body
            mass: 80.0,
            gravity: 9.81,
            player_radius: 1.2,

            // Aerodynamics
            body_drag_cd: 0.9,
            body_area: 0.7,
            canopy_drag_cd: 1.6,
            canopy_area: 40.0,
            lift_gain: 1.05,
            glide_gain: 0.35,
            steer_force: 30.0,
            dive_gain: 11.0,
            flare_gain: 9.0,

            // Canopy
            open_rate: 1.8,
            close_rate: 3.0,
            auto_open: true,
            auto_open_altitude: 120.0,

            // Atmosphere and wind
            sea_level_density: 1.225,
            scale_height: 8500.0,
            wind_mode: WindMode::Dynamic,
            steady_wind_x: 3.0,
            steady_wind_z: 1.0,

            // Movement
            walk_speed_closed: 10.0,
            sprint_speed_closed: 16.0,
            walk_speed_open: 6.0,
            sprint_speed_open: 12.0,
            open_responsiveness: 1.2,
            move_accel_limit: 40.0,
            jump_velocity: 12.0,
            max_jumps: 1,

            // Safety
            lethal_impact_speed: 14.0,
            max_delta_time: 0.06,
            launch_altitude: 1000.0,
        }
    }
}

impl FlightConfig {
    /// Create a config with a fixed wind vector instead of evolving gusts.
    pub fn steady_wind(x: f32, z: f32) -> Self {
        Self {
            wind_mode: WindMode::Steady,
            steady_wind_x: x,
            steady_wind_z: z,
            ..Default::default()
        }
    }

    /// Create a "calm day" config: no wind, auto-open left on.
    pub fn calm() -> Self {
        Self::steady_wind(0.0, 0.0)
    }

    /// Build the wind field for the current atmosphere and wind settings.
    pub fn wind_field(&self) -> WindField {
        WindField {
            mode: self.wind_mode,
            steady_x: self.steady_wind_x,
            steady_z: self.steady_wind_z,
            sea_level_density: self.sea_level_density,
            scale_height: self.scale_height,
        }
    }

    /// Horizontal speed cap for the current canopy/sprint combination.
    pub fn max_horizontal_speed(&self, canopy_open: bool, sprinting: bool) -> f32 {
        match (canopy_open, sprinting) {
            (true, true) => self.sprint_speed_open,
            (true, false) => self.walk_speed_open,
            (false, true) => self.sprint_speed_closed,
            (false, false) => self.walk_speed_closed,
        }
    }

    /// Desired move speed for the current canopy/sprint combination.
    ///
    /// The open-canopy responsiveness boost makes steering input feel less
    /// sluggish under canopy; the hard speed cap still applies afterward.
    pub fn desired_move_speed(&self, canopy_open: bool, sprinting: bool) -> f32 {
        let base = self.max_horizontal_speed(canopy_open, sprinting);
        if canopy_open {
            base * self.open_responsiveness
        } else {
            base
        }
    }
}
