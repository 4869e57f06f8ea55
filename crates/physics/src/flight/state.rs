//! Flight state and command structures.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Flags describing the diver's current state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightFlags(pub u8);

impl FlightFlags {
    /// Body is supported by the ground or a roof this frame.
    pub const ON_GROUND: u8 = 1 << 0;

    /// A lethal-speed impact occurred. Terminal until an explicit reset.
    pub const DEAD: u8 = 1 << 1;

    /// Body is pinned to a vehicle transform; physics is bypassed.
    pub const IN_VEHICLE: u8 = 1 << 2;

    /// Check if a flag is set.
    #[inline]
    pub fn has(self, flag: u8) -> bool {
        (self.0 & flag) != 0
    }

    /// Set or clear a flag.
    #[inline]
    pub fn set(&mut self, flag: u8, value: bool) {
        if value {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }

    /// Check if the body is grounded.
    #[inline]
    pub fn on_ground(self) -> bool {
        self.has(Self::ON_GROUND)
    }

    /// Check if the diver died on impact.
    #[inline]
    pub fn dead(self) -> bool {
        self.has(Self::DEAD)
    }

    /// Check if the body is pinned to a vehicle.
    #[inline]
    pub fn in_vehicle(self) -> bool {
        self.has(Self::IN_VEHICLE)
    }
}

/// Kinematic state of the falling body plus session bookkeeping.
///
/// Owned by the simulation loop. The force model writes `acceleration`,
/// the controller integrates `position`/`velocity`, and the collision
/// resolver applies corrective edits; nothing else mutates this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightState {
    /// Position in world space (meters).
    pub position: Vec3,

    /// Velocity in world space (m/s).
    pub velocity: Vec3,

    /// Acceleration accumulator (m/s²). Rebuilt from zero every tick;
    /// never carried between frames.
    pub acceleration: Vec3,

    /// Collision sphere radius (meters).
    pub radius: f32,

    /// Where resets return the body to.
    pub launch_position: Vec3,

    /// Elapsed wind time (seconds). Drives gust sampling and the coherent
    /// drag turbulence.
    pub wind_timer: f32,

    /// Jumps taken since the last landing.
    pub jump_count: u32,

    /// Current state flags.
    pub flags: FlightFlags,
}

impl FlightState {
    /// Create a body at the launch point, at rest and airborne.
    pub fn new(launch_position: Vec3, radius: f32) -> Self {
        Self {
            position: launch_position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            radius,
            launch_position,
            wind_timer: 0.0,
            jump_count: 0,
            flags: FlightFlags::default(),
        }
    }

    /// Total speed (m/s).
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Speed in the horizontal plane (m/s).
    #[inline]
    pub fn horizontal_speed(&self) -> f32 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z).length()
    }

    /// Height above the ground plane (meters).
    #[inline]
    pub fn altitude(&self) -> f32 {
        self.position.y
    }

    /// Whether position and velocity are all finite.
    pub fn is_numerically_valid(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }

    /// Safety reset: return the kinematics to launch conditions.
    ///
    /// Restores position, velocity, and acceleration only; canopy and
    /// session flags are untouched.
    pub fn reset_kinematics(&mut self) {
        self.position = self.launch_position;
        self.velocity = Vec3::ZERO;
        self.acceleration = Vec3::ZERO;
    }
}

/// Per-tick input command, as delivered by the input collaborator.
///
/// The move direction arrives already camera-relative and normalized; the
/// core never reads raw device state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FlightCommand {
    /// Desired horizontal move direction, normalized, `y == 0`. Zero when
    /// no movement is requested.
    pub move_dir: Vec3,

    /// Camera forward direction, used as the steering axis fallback when
    /// the body is nearly stationary.
    pub camera_forward: Vec3,

    /// Sprint modifier held.
    pub sprint: bool,

    /// Steering command: -1 (left), 0, or +1 (right).
    pub steer: f32,

    /// Dive control held.
    pub dive: bool,

    /// Flare control held.
    pub flare: bool,

    /// Canopy toggle edge (true for exactly one tick).
    pub toggle_canopy: bool,

    /// Jump edge.
    pub jump: bool,

    /// Full-reset edge.
    pub reset: bool,
}

impl Default for FlightCommand {
    fn default() -> Self {
        Self {
            move_dir: Vec3::ZERO,
            camera_forward: Vec3::NEG_Z,
            sprint: false,
            steer: 0.0,
            dive: false,
            flare: false,
            toggle_canopy: false,
            jump: false,
            reset: false,
        }
    }
}
