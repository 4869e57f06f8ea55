//! Collision system for the falling body.
//!
//! Resolves a moving sphere against an infinite ground plane and a static
//! set of axis-aligned building volumes, distinguishing three contact
//! kinds:
//!
//! - **Ground landing**: snap to the plane; fatal above the lethal speed
//! - **Roof landing**: snap to a building top with horizontal damping
//! - **Penetration push-out**: eject from a wall, absorbing the velocity
//!   into it rather than bouncing
//!
//! Buildings number a few tens, so contacts are found by linear scan; no
//! spatial index.

mod volume;
mod world;

pub use volume::BuildingVolume;
pub use world::{CollisionOutcome, CollisionWorld};
