//! Diver entity and state.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use skyfall_physics::{CanopyState, FlightState};

/// Unique identifier for entities.
pub type EntityId = u32;

/// A skydiver in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diver {
    /// Unique diver ID.
    pub id: EntityId,

    /// Diver name/handle.
    pub name: String,

    /// Kinematic flight state.
    pub flight: FlightState,

    /// Canopy deployment state.
    pub canopy: CanopyState,

    /// Completed landings this session.
    pub landings: u32,

    /// Lethal impacts this session.
    pub deaths: u32,
}

impl Diver {
    /// Create a diver at the given launch position.
    pub fn new(id: EntityId, name: String, launch_position: Vec3, radius: f32) -> Self {
        Self {
            id,
            name,
            flight: FlightState::new(launch_position, radius),
            canopy: CanopyState::new(),
            landings: 0,
            deaths: 0,
        }
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.flight.position
    }

    /// Current velocity.
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.flight.velocity
    }

    /// Whether the diver survived so far.
    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.flight.flags.dead()
    }

    /// Whether the diver is supported by ground or a roof this frame.
    #[inline]
    pub fn on_ground(&self) -> bool {
        self.flight.flags.on_ground()
    }

    /// Whether the canopy is past the open threshold.
    #[inline]
    pub fn canopy_open(&self) -> bool {
        self.canopy.is_open()
    }
}
