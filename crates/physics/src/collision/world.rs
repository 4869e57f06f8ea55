//! Collision world and contact resolution.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::flight::{FlightFlags, FlightState};

use super::volume::BuildingVolume;

/// Vertical slack for the roof-landing test (meters).
const ROOF_EPSILON: f32 = 0.05;

/// Extra distance past the surface when ejecting from a wall (meters).
const PUSH_EPSILON: f32 = 0.01;

/// Pull toward the roof center per meter off-center (1/s).
const ROOF_ATTRACTION: f32 = 0.1;

/// Off-center distance beyond which roof attraction kicks in (meters).
const ROOF_ATTRACTION_DEADZONE: f32 = 1.0;

/// Result of one tick of collision resolution.
///
/// Transient: produced and consumed within a single tick, never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollisionOutcome {
    /// Whether any contact occurred.
    pub hit: bool,

    /// Contact point (body center projected onto the surface).
    pub point: Vec3,

    /// Contact normal.
    pub normal: Vec3,

    /// Whether the body is vertically supported this frame.
    pub grounded: bool,

    /// Whether this contact was a lethal-speed impact.
    pub lethal: bool,
}

impl CollisionOutcome {
    /// No contact this tick.
    pub fn no_hit(position: Vec3) -> Self {
        Self {
            hit: false,
            point: position,
            normal: Vec3::Y,
            grounded: false,
            lethal: false,
        }
    }
}

/// The static collision environment: an infinite ground plane at `y = 0`
/// plus the building volumes.
///
/// Immutable after world build; resolution only ever mutates the body
/// passed into it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollisionWorld {
    buildings: Vec<BuildingVolume>,
}

impl CollisionWorld {
    /// An empty world: ground plane only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a world from an existing building list.
    pub fn with_buildings(buildings: Vec<BuildingVolume>) -> Self {
        Self { buildings }
    }

    /// Add a building volume. Only valid at world-build time.
    pub fn add_building(&mut self, volume: BuildingVolume) {
        self.buildings.push(volume);
    }

    /// The static building set.
    pub fn buildings(&self) -> &[BuildingVolume] {
        &self.buildings
    }

    /// Detect and resolve contacts for the body, mutating its position,
    /// velocity, and ground/death flags in place.
    ///
    /// Called once per tick after integration. A ground-plane contact
    /// returns early; building tests are skipped on that tick.
    pub fn resolve(&self, state: &mut FlightState, lethal_speed: f32) -> CollisionOutcome {
        let mut outcome = CollisionOutcome::no_hit(state.position);

        // Ground plane.
        if state.position.y - state.radius <= 0.0 {
            state.position.y = state.radius;
            outcome.hit = true;
            outcome.point = Vec3::new(state.position.x, state.radius, state.position.z);
            outcome.normal = Vec3::Y;

            if state.velocity.y.abs() > lethal_speed {
                state.flags.set(FlightFlags::DEAD, true);
                outcome.lethal = true;
            }
            // Soft bounce-absorb; never leaves a downward component.
            state.velocity.y = (state.velocity.y * -0.2).max(0.0);
            state.flags.set(FlightFlags::ON_GROUND, true);
            outcome.grounded = true;
            return outcome;
        }

        let mut landed = false;
        for building in &self.buildings {
            // Roof landing: over the footprint, at roof height, descending.
            if building.footprint_contains(state.position, state.radius) {
                let roof = building.roof_y();
                if state.position.y - state.radius <= roof + ROOF_EPSILON
                    && state.velocity.y <= 0.0
                {
                    state.position.y = roof + state.radius;
                    outcome.hit = true;
                    outcome.point = Vec3::new(state.position.x, roof + state.radius, state.position.z);
                    outcome.normal = Vec3::Y;

                    // Weak pull toward the roof center keeps the body from
                    // sliding off small roofs.
                    let (center_x, center_z) = building.center_xz();
                    let dx = center_x - state.position.x;
                    let dz = center_z - state.position.z;
                    if dx.abs() > ROOF_ATTRACTION_DEADZONE {
                        state.velocity.x += dx * ROOF_ATTRACTION;
                    }
                    if dz.abs() > ROOF_ATTRACTION_DEADZONE {
                        state.velocity.z += dz * ROOF_ATTRACTION;
                    }

                    state.velocity.y = (state.velocity.y * -0.15).max(0.0);
                    state.velocity.x *= 0.7;
                    state.velocity.z *= 0.7;
                    landed = true;
                }
            }

            // Side/corner penetration: eject along the center-to-closest
            // direction and absorb the velocity into the wall.
            let closest = building.closest_point(state.position);
            let dist_sq = closest.distance_squared(state.position);
            if dist_sq < state.radius * state.radius {
                let mut push = state.position - closest;
                if push.length_squared() == 0.0 {
                    push = Vec3::Y;
                }
                let push = push.normalize();
                let penetration = state.radius - dist_sq.sqrt();
                state.position += push * (penetration + PUSH_EPSILON);
                let along = push * state.velocity.dot(push);
                state.velocity -= along * 0.9;
            }
        }

        state.flags.set(FlightFlags::ON_GROUND, landed);
        outcome.grounded = landed;
        outcome
    }
}
