//! Player input handling.
//!
//! Converts raw key states into the camera-relative [`FlightCommand`] the
//! physics layer consumes. The physics core never sees device state; by
//! the time a command reaches it, movement is already expressed in world
//! space.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use skyfall_physics::FlightCommand;

/// Movement key states.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// Raw player input for a single frame.
///
/// Held controls are level-triggered; the toggle/jump/reset fields are
/// edges and must be true for exactly one frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Movement keys pressed.
    pub movement: MovementKeys,

    /// Sprint modifier held.
    pub sprint: bool,

    /// Steer-left control held.
    pub steer_left: bool,

    /// Steer-right control held.
    pub steer_right: bool,

    /// Dive control held.
    pub dive: bool,

    /// Flare control held.
    pub flare: bool,

    /// Canopy toggle edge.
    pub toggle_canopy: bool,

    /// Jump edge.
    pub jump: bool,

    /// Full-reset edge.
    pub reset: bool,

    /// Camera forward direction this frame, used to orient movement.
    pub camera_forward: Vec3,
}

impl Default for PlayerInput {
    fn default() -> Self {
        Self {
            movement: MovementKeys::default(),
            sprint: false,
            steer_left: false,
            steer_right: false,
            dive: false,
            flare: false,
            toggle_canopy: false,
            jump: false,
            reset: false,
            camera_forward: Vec3::NEG_Z,
        }
    }
}

impl PlayerInput {
    /// Convert to a physics command.
    ///
    /// Movement keys become a normalized world-space direction in the
    /// camera's horizontal frame; opposing keys cancel.
    pub fn to_command(&self) -> FlightCommand {
        let mut forward = Vec3::new(self.camera_forward.x, 0.0, self.camera_forward.z);
        forward = if forward.length_squared() > 1e-6 {
            forward.normalize()
        } else {
            Vec3::NEG_Z
        };
        let right = Vec3::Y.cross(forward).normalize();

        let side = (self.movement.left as i32 - self.movement.right as i32) as f32;
        let ahead = (self.movement.forward as i32 - self.movement.backward as i32) as f32;

        let mut move_dir = right * side + forward * ahead;
        if move_dir.length_squared() > 1e-6 {
            move_dir = move_dir.normalize();
        } else {
            move_dir = Vec3::ZERO;
        }

        let steer = (self.steer_right as i32 - self.steer_left as i32) as f32;

        FlightCommand {
            move_dir,
            camera_forward: forward,
            sprint: self.sprint,
            steer,
            dive: self.dive,
            flare: self.flare,
            toggle_canopy: self.toggle_canopy,
            jump: self.jump,
            reset: self.reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keys_zero_move() {
        let cmd = PlayerInput::default().to_command();
        assert_eq!(cmd.move_dir, Vec3::ZERO);
        assert_eq!(cmd.steer, 0.0);
    }

    #[test]
    fn test_forward_follows_camera() {
        let input = PlayerInput {
            movement: MovementKeys {
                forward: true,
                ..Default::default()
            },
            camera_forward: Vec3::new(1.0, -0.5, 0.0),
            ..Default::default()
        };
        let cmd = input.to_command();
        // Camera pitch is flattened out of the move direction.
        assert!((cmd.move_dir - Vec3::X).length() < 1e-6);
        assert_eq!(cmd.move_dir.y, 0.0);
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let input = PlayerInput {
            movement: MovementKeys {
                forward: true,
                left: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let cmd = input.to_command();
        assert!((cmd.move_dir.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let input = PlayerInput {
            movement: MovementKeys {
                forward: true,
                backward: true,
                left: true,
                right: true,
            },
            ..Default::default()
        };
        assert_eq!(input.to_command().move_dir, Vec3::ZERO);
    }

    #[test]
    fn test_steer_mapping() {
        let left = PlayerInput {
            steer_left: true,
            ..Default::default()
        };
        assert_eq!(left.to_command().steer, -1.0);

        let right = PlayerInput {
            steer_right: true,
            ..Default::default()
        };
        assert_eq!(right.to_command().steer, 1.0);

        let both = PlayerInput {
            steer_left: true,
            steer_right: true,
            ..Default::default()
        };
        assert_eq!(both.to_command().steer, 0.0);
    }

    #[test]
    fn test_edges_pass_through() {
        let input = PlayerInput {
            toggle_canopy: true,
            jump: true,
            reset: true,
            ..Default::default()
        };
        let cmd = input.to_command();
        assert!(cmd.toggle_canopy && cmd.jump && cmd.reset);
    }
}
